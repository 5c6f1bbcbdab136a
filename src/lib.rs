//! Reads the chunk structure of PNG files: the `IHDR` fields, the full chunk
//! list, and `IDAT`/`eXIf` statistics. Pixel data is never decompressed.

pub mod chunks;
mod decoder;
mod error;
mod png;
pub mod signature;

pub use chunks::{ihdr::HeaderInfo, ChunkRecord, ChunkType};
pub use decoder::{Chunks, PngDecoder, Start};
pub use error::{ChunkField, PngError, Result};
pub use png::{ParseOptions, PngInfo};
