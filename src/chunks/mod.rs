use std::{
    fmt,
    io::{self, Read},
};

use crate::error::{ChunkField, PngError, Result};

mod crc;
pub mod ihdr;

pub const MAX_CHUNK_LENGTH: u32 = i32::MAX as u32;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);
#[allow(non_upper_case_globals)]
impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");
    pub const eXIf: Self = Self(*b"eXIf");
}
impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}
impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// One `{length}{type}{data}{crc}` record of the chunk stream.
///
/// The stored crc is kept as read; it is only compared against the chunk
/// contents when asked to via [`ChunkRecord::crc_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRecord {
    pub length: u32,
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
    pub crc: u32,
}
impl ChunkRecord {
    pub fn wire_size(&self) -> u64 {
        8 + self.length as u64 + 4
    }

    pub fn computed_crc(&self) -> u32 {
        crc::Crc32::new()
            .update(&self.chunk_type.0)
            .update(&self.data)
            .finish()
    }

    pub fn crc_matches(&self) -> bool {
        self.computed_crc() == self.crc
    }
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Reads one chunk. Any short read is reported as
/// [`PngError::CorruptedStream`] naming the field that was cut off.
pub fn read_chunk<R: Read>(reader: &mut R) -> Result<ChunkRecord> {
    let length = read_u32(reader).map_err(PngError::corrupted(ChunkField::Length))?;
    if length > MAX_CHUNK_LENGTH {
        return Err(PngError::corrupted(ChunkField::Length)(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("declared length {length} exceeds {MAX_CHUNK_LENGTH}"),
        )));
    }

    let mut chunk_type = [0; 4];
    reader
        .read_exact(&mut chunk_type)
        .map_err(PngError::corrupted(ChunkField::Type))?;
    let chunk_type = ChunkType(chunk_type);

    // Grows with the bytes actually present rather than trusting `length`.
    let mut data = Vec::new();
    let read = reader
        .by_ref()
        .take(length as u64)
        .read_to_end(&mut data)
        .map_err(PngError::corrupted(ChunkField::Data))?;
    if read != length as usize {
        return Err(PngError::corrupted(ChunkField::Data)(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{chunk_type} declared {length} bytes, only {read} available"),
        )));
    }

    let crc = read_u32(reader).map_err(PngError::corrupted(ChunkField::Crc))?;
    log::debug!("read {chunk_type} chunk, {length} bytes");

    Ok(ChunkRecord {
        length,
        chunk_type,
        data,
        crc,
    })
}

/// Ends after `IEND` or the first error.
pub fn iter_chunks<R: Read>(reader: R) -> ChunkIter<R> {
    ChunkIter {
        reader,
        finished: false,
    }
}

pub struct ChunkIter<R> {
    reader: R,
    finished: bool,
}
impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<ChunkRecord>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let chunk = read_chunk(&mut self.reader);
        if !matches!(&chunk, Ok(c) if c.chunk_type != ChunkType::IEND) {
            self.finished = true;
        }
        Some(chunk)
    }
}
impl<R: Read> std::iter::FusedIterator for ChunkIter<R> {}
