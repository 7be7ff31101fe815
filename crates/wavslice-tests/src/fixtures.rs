//! Synthetic WAV fixtures.
//!
//! No binary fixtures are checked in; every test builds the files it needs
//! here, in standard (PCM) or extended (µ-law / A-law) layout.

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Format code for linear PCM.
pub const PCM: u16 = 1;
/// Format code for A-law.
pub const ALAW: u16 = 6;
/// Format code for µ-law.
pub const MULAW: u16 = 7;

/// A temporary directory holding fixture and output files.
pub struct FixtureDir {
    pub root: TempDir,
}

impl FixtureDir {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of `name` inside the directory (not created).
    pub fn join(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write `bytes` to `name` and return the full path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Path of `name` as a string, for CLI arguments.
    pub fn arg(&self, name: &str) -> String {
        self.join(name).to_string_lossy().into_owned()
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a 44-byte standard header followed by `payload`.
pub fn pcm_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, payload: &[u8]) -> Vec<u8> {
    standard_wav(PCM, channels, sample_rate, bits_per_sample, payload)
}

/// Builds a standard-layout file with an arbitrary format code.
pub fn standard_wav(
    format: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    payload: &[u8],
) -> Vec<u8> {
    let block_align = channels * (bits_per_sample / 8);
    let data_size = payload.len() as u32;

    let mut bytes = Vec::with_capacity(44 + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&format.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Builds a 58-byte extended header (`cbSize` + `fact`) followed by 8-bit
/// companded `payload`.
pub fn companded_wav(format: u16, channels: u16, sample_rate: u32, payload: &[u8]) -> Vec<u8> {
    let data_size = payload.len() as u32;

    let mut bytes = Vec::with_capacity(58 + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(50 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&18u32.to_le_bytes());
    bytes.extend_from_slice(&format.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(channels)).to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(b"fact");
    bytes.extend_from_slice(&4u32.to_le_bytes());
    bytes.extend_from_slice(&(data_size / u32::from(channels)).to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Interleaved 16-bit ramps; channel `c` holds `i * (c + 1)` at frame `i`,
/// so every channel differs from the others after frame 0.
pub fn ramp_pcm16(channels: u16, frames: usize) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(frames * usize::from(channels) * 2);
    for frame in 0..frames {
        for channel in 0..usize::from(channels) {
            let value = (frame * (channel + 1)) as i16;
            pcm.extend_from_slice(&value.to_le_bytes());
        }
    }
    pcm
}

/// Mono 16-bit sine tone.
pub fn sine_pcm16(sample_rate: u32, frames: usize, frequency: f64) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let t = i as f64 / f64::from(sample_rate);
        let value = ((2.0 * PI * frequency * t).sin() * 0.8 * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// 8-bit companded bytes cycling through every code value.
pub fn companded_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

/// Little-endian 16-bit samples from raw bytes.
pub fn pcm16_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Bytes of one channel from an interleaved payload.
pub fn channel_bytes(
    payload: &[u8],
    channels: usize,
    bytes_per_sample: usize,
    channel: usize,
) -> Vec<u8> {
    payload
        .chunks_exact(channels * bytes_per_sample)
        .flat_map(|frame| {
            frame[channel * bytes_per_sample..(channel + 1) * bytes_per_sample].to_vec()
        })
        .collect()
}
