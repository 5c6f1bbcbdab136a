use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde_json::json;

use crate::{
    chunks::{ihdr::HeaderInfo, ChunkRecord, ChunkType},
    decoder::PngDecoder,
    error::{PngError, Result},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Off by default, mismatches are then only logged.
    pub verify_crc: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    header: HeaderInfo,
    chunks: Vec<ChunkRecord>,
    idat_count: usize,
    exif_count: usize,
    exif_data: String,
}

impl PngInfo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, ParseOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::parse_with(BufReader::new(file), options)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }

    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        Self::parse_with(reader, ParseOptions::default())
    }

    pub fn parse_with<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let (decoder, header_chunk, header) = PngDecoder::new(reader)?.read_header()?;
        let mut info = PngInfo {
            header,
            chunks: vec![],
            idat_count: 0,
            exif_count: 0,
            exif_data: String::new(),
        };
        info.record(header_chunk, options)?;

        let info = decoder.into_chunks().try_fold(info, |mut info, chunk| {
            info.record(chunk?, options)?;
            Ok::<_, PngError>(info)
        })?;
        log::info!(
            "scanned {} chunks ({} IDAT, {} eXIf)",
            info.chunks.len(),
            info.idat_count,
            info.exif_count
        );
        Ok(info)
    }

    fn record(&mut self, chunk: ChunkRecord, options: ParseOptions) -> Result<()> {
        if !chunk.crc_matches() {
            let actual = chunk.computed_crc();
            if options.verify_crc {
                return Err(PngError::ChecksumMismatch {
                    chunk_type: chunk.chunk_type,
                    expected: chunk.crc,
                    actual,
                });
            }
            log::warn!(
                "{} chunk crc {:#010x} does not match computed {actual:#010x}",
                chunk.chunk_type,
                chunk.crc
            );
        }

        match chunk.chunk_type {
            ChunkType::IDAT => self.idat_count += 1,
            ChunkType::eXIf => {
                self.exif_count += 1;
                self.exif_data.push_str(&String::from_utf8_lossy(&chunk.data));
                self.exif_data.push('\n');
            }
            _ => (),
        }
        self.chunks.push(chunk);
        Ok(())
    }

    pub fn header(&self) -> &HeaderInfo {
        &self.header
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn bit_depth(&self) -> u8 {
        self.header.bit_depth
    }

    pub fn color_type(&self) -> u8 {
        self.header.color_type
    }

    pub fn compression_method(&self) -> u8 {
        self.header.compression_method
    }

    pub fn filter_method(&self) -> u8 {
        self.header.filter_method
    }

    pub fn interlace_method(&self) -> u8 {
        self.header.interlace_method
    }

    pub fn chunks(&self) -> &[ChunkRecord] {
        &self.chunks
    }

    pub fn idat_count(&self) -> usize {
        self.idat_count
    }

    pub fn exif_count(&self) -> usize {
        self.exif_count
    }

    /// The text of every `eXIf` chunk, each followed by a newline.
    pub fn exif_data(&self) -> &str {
        &self.exif_data
    }

    pub fn to_json(&self) -> serde_json::Value {
        let chunks: Vec<_> = self
            .chunks
            .iter()
            .map(|c| {
                json!({
                    "type": c.chunk_type.to_string(),
                    "length": c.length,
                    "crc": c.crc,
                })
            })
            .collect();
        json!({
            "width": self.width(),
            "height": self.height(),
            "bit_depth": self.bit_depth(),
            "color_type": self.color_type(),
            "compression_method": self.compression_method(),
            "filter_method": self.filter_method(),
            "interlace_method": self.interlace_method(),
            "idat_count": self.idat_count,
            "exif_count": self.exif_count,
            "exif_data": self.exif_data,
            "chunks": chunks,
        })
    }
}

fn name_or_unknown<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_owned(), |v| v.to_string())
}

impl fmt::Display for PngInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== PNG INFO ==")?;
        writeln!(f, "\tWidth: {}", self.width())?;
        writeln!(f, "\tHeight: {}", self.height())?;
        writeln!(f, "\tBit Depth: {}", self.bit_depth())?;
        writeln!(
            f,
            "\tColor Type: {} ({})",
            self.color_type(),
            name_or_unknown(self.header.color_type())
        )?;
        writeln!(f, "\tCompression Method: {}", self.compression_method())?;
        writeln!(f, "\tFilter Method: {}", self.filter_method())?;
        writeln!(
            f,
            "\tInterlace Method: {} ({})",
            self.interlace_method(),
            name_or_unknown(self.header.interlacing())
        )?;
        writeln!(f, "\tIDAT count: {}", self.idat_count)?;
        writeln!(f, "\teXIf count: {}", self.exif_count)?;
        write!(f, "\teXIf data: {}", self.exif_data)
    }
}
