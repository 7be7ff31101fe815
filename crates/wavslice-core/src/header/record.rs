//! Canonical header record shared by both wire layouts.

use crate::error::{WavError, WavResult};
use crate::format::{Encoding, WAVE_FORMAT_PCM};

use super::layout::{HeaderLayout, PCM_FMT_CHUNK_SIZE, STANDARD_HEADER_LEN};

/// Fields of the `fact` section found in the extended layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactChunk {
    /// Size of the `fmt ` extension (`cbSize`), normally 0.
    pub cb_size: u16,
    /// Declared size of the `fact` chunk body.
    pub chunk_size: u32,
    /// Samples per channel as recorded by the encoder.
    pub sample_count: u32,
}

/// Parsed WAV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size as found in the file (file size minus 8).
    pub riff_size: u32,
    /// Size of the `fmt ` chunk body.
    pub fmt_size: u32,
    /// Audio format code (1 = PCM, 6 = A-law, 7 = µ-law).
    pub audio_format: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample of one channel.
    pub bits_per_sample: u16,
    /// Size of the `data` chunk body in bytes.
    pub data_size: u32,
    /// `fact` section, present only for the extended layout.
    pub fact: Option<FactChunk>,
}

impl WavHeader {
    /// Builds a PCM header for the given parameters.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Self {
        let block_align = channels.wrapping_mul(bits_per_sample / 8);
        Self {
            riff_size: (STANDARD_HEADER_LEN as u32 - 8).wrapping_add(data_size),
            fmt_size: PCM_FMT_CHUNK_SIZE,
            audio_format: WAVE_FORMAT_PCM,
            channels,
            sample_rate,
            byte_rate: sample_rate.wrapping_mul(u32::from(block_align)),
            block_align,
            bits_per_sample,
            data_size,
            fact: None,
        }
    }

    /// Decode path for this header's format code.
    pub fn encoding(&self) -> Encoding {
        Encoding::from(self.audio_format)
    }

    /// Wire layout this header was read with.
    pub fn layout(&self) -> HeaderLayout {
        if self.fact.is_some() {
            HeaderLayout::Extended
        } else {
            HeaderLayout::Standard
        }
    }

    /// Bytes per sample of one channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame derived from channels and sample width.
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * usize::from(self.bytes_per_sample())
    }

    /// Samples per channel: `data_size / (channels * bytes_per_sample)`.
    pub fn sample_count(&self) -> u64 {
        match self.frame_size() {
            0 => 0,
            frame => u64::from(self.data_size) / frame as u64,
        }
    }

    /// Duration in seconds, unrounded.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count() as f64 / f64::from(self.sample_rate)
    }

    /// Checks the fields the derived values depend on.
    pub fn validate(&self) -> WavResult<()> {
        if self.channels == 0 {
            return Err(WavError::InvalidField {
                field: "channel count",
                value: 0,
            });
        }
        if self.sample_rate == 0 {
            return Err(WavError::InvalidField {
                field: "sample rate",
                value: 0,
            });
        }
        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(WavError::InvalidField {
                field: "bits per sample",
                value: u32::from(self.bits_per_sample),
            });
        }
        // G.711 samples are always one byte wide
        if self.encoding().is_companded() && self.bits_per_sample != 8 {
            return Err(WavError::InvalidField {
                field: "companded bits per sample",
                value: u32::from(self.bits_per_sample),
            });
        }
        Ok(())
    }

    /// Header describing the 16-bit PCM produced by expanding a companded payload.
    ///
    /// Sample width, byte rate and data size double. The format becomes PCM and
    /// the `fact` section is dropped.
    pub fn expanded_to_pcm16(&self) -> Self {
        let bits_per_sample = self.bits_per_sample.saturating_mul(2);
        Self {
            fmt_size: PCM_FMT_CHUNK_SIZE,
            audio_format: WAVE_FORMAT_PCM,
            byte_rate: self.byte_rate.saturating_mul(2),
            block_align: self.channels.wrapping_mul(bits_per_sample / 8),
            bits_per_sample,
            fact: None,
            ..self.with_data_size(self.data_size.saturating_mul(2))
        }
    }

    /// Copy of this header describing `data_size` bytes of payload.
    pub fn with_data_size(&self, data_size: u32) -> Self {
        Self {
            riff_size: (STANDARD_HEADER_LEN as u32 - 8).wrapping_add(data_size),
            data_size,
            ..self.clone()
        }
    }

    /// Copy of this header for one channel of `data_size` bytes.
    pub fn mono(&self, data_size: u32) -> Self {
        let block_align = self.bytes_per_sample();
        Self {
            channels: 1,
            block_align,
            byte_rate: self.sample_rate.wrapping_mul(u32::from(block_align)),
            ..self.with_data_size(data_size)
        }
    }
}
