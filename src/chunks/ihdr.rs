use std::fmt;

use nom::{
    combinator::all_consuming,
    number::complete::{be_u32, u8},
    sequence::tuple,
    IResult,
};

use super::{ChunkRecord, ChunkType};
use crate::error::{PngError, Result};

pub const IHDR_LENGTH: u32 = 13;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}
impl HeaderInfo {
    pub fn color_type(&self) -> Option<ColorType> {
        ColorType::try_from(self.color_type).ok()
    }

    pub fn interlacing(&self) -> Option<Interlacing> {
        Interlacing::try_from(self.interlace_method).ok()
    }
}

/// Decodes the header fields of `chunk`, which must be a 13 byte `IHDR`.
pub fn decode_header_payload(chunk: &ChunkRecord) -> Result<HeaderInfo> {
    let violation = || PngError::ContractViolation {
        chunk_type: chunk.chunk_type,
        length: chunk.length,
    };
    if chunk.chunk_type != ChunkType::IHDR
        || chunk.length != IHDR_LENGTH
        || chunk.data.len() != IHDR_LENGTH as usize
    {
        return Err(violation());
    }
    let (_, header) = parse_fields(&chunk.data).map_err(|_| violation())?;
    Ok(header)
}

fn parse_fields(data: &[u8]) -> IResult<&[u8], HeaderInfo> {
    let (rest, (width, height, fields)) =
        all_consuming(tuple((be_u32, be_u32, tuple((u8, u8, u8, u8, u8)))))(data)?;
    let (bit_depth, color_type, compression_method, filter_method, interlace_method) = fields;
    Ok((
        rest,
        HeaderInfo {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        },
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Greyscale = 0,
    Truecolor = 2,
    IndexedColor = 3,
    GreyscaleWithAlpha = 4,
    TruecolorWithAlpha = 6,
}
impl TryFrom<u8> for ColorType {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleWithAlpha),
            6 => Ok(Self::TruecolorWithAlpha),
            other => Err(other),
        }
    }
}
impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Greyscale => "greyscale",
            Self::Truecolor => "truecolor",
            Self::IndexedColor => "indexed-color",
            Self::GreyscaleWithAlpha => "greyscale with alpha",
            Self::TruecolorWithAlpha => "truecolor with alpha",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlacing {
    None,
    Adam7,
}
impl TryFrom<u8> for Interlacing {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Adam7),
            other => Err(other),
        }
    }
}
impl fmt::Display for Interlacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Adam7 => "adam7",
        })
    }
}
