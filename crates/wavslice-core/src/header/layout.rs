//! Fixed byte layouts for reading and writing WAV headers.

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{WavError, WavResult};
use crate::format::Encoding;

use super::record::{FactChunk, WavHeader};

/// Size of the standard header (RIFF + 16-byte `fmt ` + `data` chunk header).
pub const STANDARD_HEADER_LEN: usize = 44;

/// Size of the extended header written for µ-law and A-law files.
pub const EXTENDED_HEADER_LEN: usize = 58;

/// `fmt ` chunk size for plain PCM.
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

// Offsets shared by both layouts
const RIFF_TAG: usize = 0;
const RIFF_SIZE: usize = 4;
const WAVE_TAG: usize = 8;
const FMT_TAG: usize = 12;
const FMT_SIZE: usize = 16;
const AUDIO_FORMAT: usize = 20;
const CHANNELS: usize = 22;
const SAMPLE_RATE: usize = 24;
const BYTE_RATE: usize = 28;
const BLOCK_ALIGN: usize = 32;
const BITS_PER_SAMPLE: usize = 34;

// Standard layout
const STANDARD_DATA_TAG: usize = 36;
const STANDARD_DATA_SIZE: usize = 40;

// Extended layout
const CB_SIZE: usize = 36;
const FACT_TAG: usize = 38;
const FACT_SIZE: usize = 42;
const FACT_SAMPLE_COUNT: usize = 46;
const EXTENDED_DATA_TAG: usize = 50;
const EXTENDED_DATA_SIZE: usize = 54;

/// Header wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// 44-byte PCM header.
    Standard,
    /// 58-byte header with `cbSize` and a `fact` chunk.
    Extended,
}

impl HeaderLayout {
    /// Layout used for the given audio format code.
    pub fn for_format(code: u16) -> Self {
        if Encoding::from(code).is_companded() {
            HeaderLayout::Extended
        } else {
            HeaderLayout::Standard
        }
    }

    /// Header size in bytes; the payload starts right after it.
    pub fn len(self) -> usize {
        match self {
            HeaderLayout::Standard => STANDARD_HEADER_LEN,
            HeaderLayout::Extended => EXTENDED_HEADER_LEN,
        }
    }
}

/// Parses a header, picking the layout from the audio format code.
///
/// The standard-size prefix is checked first; companded formats are then
/// re-read from offset 0 with the extended layout.
pub fn parse_header(bytes: &[u8]) -> WavResult<WavHeader> {
    ensure_len(bytes, STANDARD_HEADER_LEN)?;
    let code = LittleEndian::read_u16(&bytes[AUDIO_FORMAT..]);
    match HeaderLayout::for_format(code) {
        HeaderLayout::Standard => parse_standard(bytes),
        HeaderLayout::Extended => parse_extended(bytes),
    }
}

/// Parses the 44-byte standard layout.
pub fn parse_standard(bytes: &[u8]) -> WavResult<WavHeader> {
    ensure_len(bytes, STANDARD_HEADER_LEN)?;
    let mut header = parse_prefix(bytes)?;
    expect_tag(bytes, STANDARD_DATA_TAG, b"data", "data")?;
    header.data_size = LittleEndian::read_u32(&bytes[STANDARD_DATA_SIZE..]);
    Ok(header)
}

/// Parses the 58-byte extended layout used for µ-law and A-law.
pub fn parse_extended(bytes: &[u8]) -> WavResult<WavHeader> {
    ensure_len(bytes, EXTENDED_HEADER_LEN)?;
    let mut header = parse_prefix(bytes)?;
    expect_tag(bytes, FACT_TAG, b"fact", "fact")?;
    header.fact = Some(FactChunk {
        cb_size: LittleEndian::read_u16(&bytes[CB_SIZE..]),
        chunk_size: LittleEndian::read_u32(&bytes[FACT_SIZE..]),
        sample_count: LittleEndian::read_u32(&bytes[FACT_SAMPLE_COUNT..]),
    });
    expect_tag(bytes, EXTENDED_DATA_TAG, b"data", "data")?;
    header.data_size = LittleEndian::read_u32(&bytes[EXTENDED_DATA_SIZE..]);
    Ok(header)
}

/// Writes `header` in the standard 44-byte layout.
///
/// Fields are written as stored. Headers built through
/// [`WavHeader::with_data_size`] carry a RIFF size matching their payload.
pub fn write_standard<W: Write>(writer: &mut W, header: &WavHeader) -> io::Result<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(header.riff_size)?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(PCM_FMT_CHUNK_SIZE)?;
    writer.write_u16::<LittleEndian>(header.audio_format)?;
    writer.write_u16::<LittleEndian>(header.channels)?;
    writer.write_u32::<LittleEndian>(header.sample_rate)?;
    writer.write_u32::<LittleEndian>(header.byte_rate)?;
    writer.write_u16::<LittleEndian>(header.block_align)?;
    writer.write_u16::<LittleEndian>(header.bits_per_sample)?;

    // data chunk header
    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(header.data_size)?;

    Ok(())
}

/// Reads the fields both layouts share (everything through bits per sample).
fn parse_prefix(bytes: &[u8]) -> WavResult<WavHeader> {
    expect_tag(bytes, RIFF_TAG, b"RIFF", "RIFF")?;
    expect_tag(bytes, WAVE_TAG, b"WAVE", "WAVE")?;
    expect_tag(bytes, FMT_TAG, b"fmt ", "fmt ")?;

    Ok(WavHeader {
        riff_size: LittleEndian::read_u32(&bytes[RIFF_SIZE..]),
        fmt_size: LittleEndian::read_u32(&bytes[FMT_SIZE..]),
        audio_format: LittleEndian::read_u16(&bytes[AUDIO_FORMAT..]),
        channels: LittleEndian::read_u16(&bytes[CHANNELS..]),
        sample_rate: LittleEndian::read_u32(&bytes[SAMPLE_RATE..]),
        byte_rate: LittleEndian::read_u32(&bytes[BYTE_RATE..]),
        block_align: LittleEndian::read_u16(&bytes[BLOCK_ALIGN..]),
        bits_per_sample: LittleEndian::read_u16(&bytes[BITS_PER_SAMPLE..]),
        data_size: 0,
        fact: None,
    })
}

fn ensure_len(bytes: &[u8], expected: usize) -> WavResult<()> {
    if bytes.len() < expected {
        return Err(WavError::HeaderTooShort {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn expect_tag(
    bytes: &[u8],
    offset: usize,
    tag: &[u8; 4],
    name: &'static str,
) -> WavResult<()> {
    let found = &bytes[offset..offset + 4];
    if found != tag {
        return Err(WavError::invalid_tag(offset, name, found));
    }
    Ok(())
}
