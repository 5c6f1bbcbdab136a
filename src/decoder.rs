use std::{io::Read, marker::PhantomData};

use crate::{
    chunks::{
        ihdr::{decode_header_payload, HeaderInfo},
        iter_chunks, read_chunk, ChunkIter, ChunkRecord,
    },
    error::{PngError, Result},
    signature,
};

/// Walks a PNG stream front to back. The state parameter tracks how far the
/// stream has been consumed so the header can only be read once, right after
/// the signature.
pub struct PngDecoder<R, State>(R, PhantomData<State>);

/// Signature checked, header chunk not yet read.
pub struct Start;
/// Header read, positioned at the second chunk.
pub struct Chunks;

impl<R: Read> PngDecoder<R, Start> {
    pub fn new(mut reader: R) -> Result<Self> {
        if !signature::validate(&mut reader) {
            return Err(PngError::InvalidFormat);
        }
        Ok(Self(reader, PhantomData))
    }

    pub fn read_header(mut self) -> Result<(PngDecoder<R, Chunks>, ChunkRecord, HeaderInfo)> {
        let chunk = read_chunk(&mut self.0)?;
        let header = decode_header_payload(&chunk)?;
        log::debug!("header: {header:?}");
        Ok((PngDecoder(self.0, PhantomData), chunk, header))
    }
}

impl<R: Read> PngDecoder<R, Chunks> {
    /// The remaining chunks, up to and including `IEND`.
    pub fn into_chunks(self) -> ChunkIter<R> {
        iter_chunks(self.0)
    }
}
