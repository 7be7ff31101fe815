//! Loaded WAV file: parsed header plus raw payload.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::audio::DecodedAudio;
use crate::error::{WavError, WavResult};
use crate::format::{describe_format, Encoding};
use crate::header::{parse_header, WavHeader};

/// A WAV file read into memory.
///
/// The payload is kept exactly as stored. Decoding and de-interleaving happen
/// on first use through [`Container::decode`] and the result is cached.
#[derive(Debug, Clone)]
pub struct Container {
    path: PathBuf,
    header: WavHeader,
    payload: Vec<u8>,
    decoded: Option<DecodedAudio>,
}

impl Container {
    /// Reads and parses the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> WavResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| WavError::io(path, e))?;
        Self::from_bytes(path, bytes)
    }

    /// Parses an in-memory WAV file. `path` is only used for reporting.
    ///
    /// The header layout is chosen from the audio format code, the structural
    /// fields are checked, and the payload must hold at least the declared
    /// number of bytes. Anything after the payload is ignored.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> WavResult<Self> {
        let path = path.into();
        let header = parse_header(&bytes)?;
        header.validate()?;

        let offset = header.layout().len();
        let declared = header.data_size as usize;
        let available = bytes.len() - offset;
        if available < declared {
            return Err(WavError::TruncatedPayload {
                expected: declared,
                actual: available,
            });
        }

        debug!(
            path = %path.display(),
            layout = ?header.layout(),
            format = header.audio_format,
            channels = header.channels,
            sample_rate = header.sample_rate,
            data_size = header.data_size,
            "parsed header"
        );

        let mut payload = bytes;
        payload.truncate(offset + declared);
        payload.drain(..offset);

        Ok(Self {
            path,
            header,
            payload,
            decoded: None,
        })
    }

    /// Path the container was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw data chunk size in bytes.
    pub fn size(&self) -> u32 {
        self.header.data_size
    }

    /// Format code and label, e.g. `"1 (Linear PCM)"`.
    pub fn audio_format(&self) -> String {
        describe_format(self.header.audio_format)
    }

    /// Audio format code.
    pub fn format_code(&self) -> u16 {
        self.header.audio_format
    }

    /// Decode path for this file.
    pub fn encoding(&self) -> Encoding {
        self.header.encoding()
    }

    /// Label for the audio format code.
    pub fn format_label(&self) -> &'static str {
        self.encoding().label()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    /// Bits per sample as stored (8 for companded files).
    pub fn bits_per_sample(&self) -> u16 {
        self.header.bits_per_sample
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        self.header.channels
    }

    /// Samples per channel.
    pub fn sample_count(&self) -> u64 {
        self.header.sample_count()
    }

    /// Duration in seconds, unrounded.
    pub fn duration(&self) -> f64 {
        self.header.duration_seconds()
    }

    /// Header as read from the file.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// Sample count from the `fact` chunk, when the file has one.
    pub fn fact_sample_count(&self) -> Option<u32> {
        self.header.fact.map(|fact| fact.sample_count)
    }

    /// Raw payload bytes as stored.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decodes and de-interleaves the payload, caching the result.
    pub fn decode(&mut self) -> WavResult<&DecodedAudio> {
        let decoded = match self.decoded.take() {
            Some(decoded) => decoded,
            None => DecodedAudio::decode(&self.header, &self.payload)?,
        };
        Ok(self.decoded.insert(decoded))
    }
}
