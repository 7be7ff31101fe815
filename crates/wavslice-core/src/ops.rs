//! Top-level operations: inspect, split and slice a file on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::container::Container;
use crate::error::WavResult;
use crate::slice::{extract, SliceRequest};
use crate::split::split_channels_with;

/// Summary of a WAV file as reported by `info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioInfo {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Raw data chunk size in bytes.
    pub size_bytes: u32,
    /// Audio format code.
    pub format_code: u16,
    /// Code and label, e.g. `"1 (Linear PCM)"`.
    pub audio_format: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample as stored.
    pub bits_per_sample: u16,
    /// Number of channels.
    pub channel_count: u16,
    /// Samples per channel.
    pub sample_count: u64,
    /// Duration in seconds, unrounded.
    pub duration_seconds: f64,
}

impl AudioInfo {
    /// Collects the summary fields of a loaded container.
    pub fn from_container(container: &Container) -> Self {
        Self {
            path: container.path().to_path_buf(),
            size_bytes: container.size(),
            format_code: container.format_code(),
            audio_format: container.audio_format(),
            sample_rate: container.sample_rate(),
            bits_per_sample: container.bits_per_sample(),
            channel_count: container.channels(),
            sample_count: container.sample_count(),
            duration_seconds: container.duration(),
        }
    }
}

/// Reads the header of `path` and summarizes it.
pub fn info(path: impl AsRef<Path>) -> WavResult<AudioInfo> {
    let container = Container::open(path)?;
    Ok(AudioInfo::from_container(&container))
}

/// Splits `path` into one mono file per channel named `<prefix><i>.wav`.
pub fn split(path: impl AsRef<Path>, prefix: &str) -> WavResult<Vec<PathBuf>> {
    split_with(path, prefix, |_, _| {})
}

/// Like [`split`], calling `on_written(index, path)` as each file completes.
pub fn split_with<F>(
    path: impl AsRef<Path>,
    prefix: &str,
    on_written: F,
) -> WavResult<Vec<PathBuf>>
where
    F: FnMut(usize, &Path),
{
    let mut container = Container::open(path)?;
    split_channels_with(&mut container, prefix, on_written)
}

/// Writes each requested interval of `path` to its output file.
///
/// Requests are handled in order. A request that fails validation stops the
/// batch, but files already written for earlier requests are kept.
pub fn slice(path: impl AsRef<Path>, requests: &[SliceRequest]) -> WavResult<Vec<PathBuf>> {
    slice_with(path, requests, |_, _| {})
}

/// Like [`slice`], calling `on_written(request, path)` as each file completes.
pub fn slice_with<F>(
    path: impl AsRef<Path>,
    requests: &[SliceRequest],
    mut on_written: F,
) -> WavResult<Vec<PathBuf>>
where
    F: FnMut(&SliceRequest, &Path),
{
    let mut container = Container::open(path)?;
    let mut written = Vec::with_capacity(requests.len());
    for request in requests {
        let output = extract(&mut container, request)?;
        on_written(request, &output);
        written.push(output);
    }
    Ok(written)
}
