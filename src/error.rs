use std::{fmt, io};

use crate::chunks::ChunkType;

pub type Result<T> = std::result::Result<T, PngError>;

/// The part of a chunk's framing that was being read when the stream ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkField {
    Length,
    Type,
    Data,
    Crc,
}
impl fmt::Display for ChunkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Length => "chunk length",
            Self::Type => "chunk type",
            Self::Data => "chunk data",
            Self::Crc => "chunk crc",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PngError {
    #[error("not a valid png file")]
    InvalidFormat,

    #[error("corrupted file: failed to read {field}")]
    CorruptedStream {
        field: ChunkField,
        #[source]
        source: io::Error,
    },

    /// The first chunk was not a 13 byte `IHDR`.
    #[error("passed a non valid header chunk: {chunk_type:?} with length {length}")]
    ContractViolation { chunk_type: ChunkType, length: u32 },

    #[error("crc mismatch in {chunk_type:?} chunk: stored {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch {
        chunk_type: ChunkType,
        expected: u32,
        actual: u32,
    },

    #[error("failed to open input")]
    Io(#[from] io::Error),
}
impl PngError {
    pub(crate) fn corrupted(field: ChunkField) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::CorruptedStream { field, source }
    }
}
