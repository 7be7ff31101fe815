//! Independent checks on written WAV files.
//!
//! Outputs are read back with `hound` rather than wavslice's own parser, so a
//! header bug cannot hide behind a matching reader bug.

use std::fs;
use std::path::Path;

/// What an output file holds, as seen by hound.
#[derive(Debug, Clone, PartialEq)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Samples across all channels.
    pub sample_len: u32,
    /// Raw payload bytes (everything after the 44-byte header).
    pub payload: Vec<u8>,
}

/// Opens `path` with hound and collects its format and payload.
pub fn inspect_wav(path: &Path) -> Result<WavSummary, String> {
    let reader = hound::WavReader::open(path).map_err(|e| format!("hound: {}", e))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(format!("unexpected sample format {:?}", spec.sample_format));
    }
    let sample_len = reader.len();
    drop(reader);

    let bytes = fs::read(path).map_err(|e| format!("Failed to read file: {}", e))?;
    if bytes.len() < 44 {
        return Err(format!("file too short: {} bytes", bytes.len()));
    }
    let declared = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]) as usize;
    let riff = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    if riff != bytes.len() - 8 {
        return Err(format!("RIFF size {} does not match file size {}", riff, bytes.len()));
    }
    if declared != bytes.len() - 44 {
        return Err(format!(
            "data size {} does not match payload {}",
            declared,
            bytes.len() - 44
        ));
    }

    Ok(WavSummary {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_len,
        payload: bytes[44..].to_vec(),
    })
}

/// Reads a 16-bit file's samples through hound.
pub fn read_pcm16(path: &Path) -> Result<Vec<i16>, String> {
    let mut reader = hound::WavReader::open(path).map_err(|e| format!("hound: {}", e))?;
    reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("hound: {}", e))
}
