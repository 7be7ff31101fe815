//! Per-channel export into mono WAV files.

use std::path::{Path, PathBuf};

use crate::audio::DecodedAudio;
use crate::container::Container;
use crate::error::WavResult;
use crate::writer::{write_wav_file, write_wav_to_vec};

/// Output path for channel `index`: `<prefix><index>.wav`.
///
/// The prefix is used verbatim, so `"out/take_"` yields `out/take_0.wav`.
pub fn channel_output_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}{index}.wav"))
}

/// Renders channel `index` as a complete mono WAV file in memory.
pub fn render_channel(decoded: &DecodedAudio, index: usize) -> Option<Vec<u8>> {
    let channel = decoded.channel(index)?;
    let header = decoded.header().mono(channel.len() as u32);
    Some(write_wav_to_vec(&header, channel))
}

/// Writes every channel of `container` to its own mono file.
///
/// # Arguments
/// * `container` - Source file; decoded on first use
/// * `prefix` - Output path prefix, see [`channel_output_path`]
///
/// # Returns
/// Written paths in channel order
pub fn split_channels(container: &mut Container, prefix: &str) -> WavResult<Vec<PathBuf>> {
    split_channels_with(container, prefix, |_, _| {})
}

/// Like [`split_channels`], calling `on_written(index, path)` as each file
/// completes.
///
/// Files written before a failing channel stay on disk and have already been
/// reported through the callback.
pub fn split_channels_with<F>(
    container: &mut Container,
    prefix: &str,
    mut on_written: F,
) -> WavResult<Vec<PathBuf>>
where
    F: FnMut(usize, &Path),
{
    let decoded = container.decode()?;
    let mut written = Vec::with_capacity(decoded.channel_count());

    for (index, channel) in decoded.channels().iter().enumerate() {
        let path = channel_output_path(prefix, index);
        let header = decoded.header().mono(channel.len() as u32);
        write_wav_file(&path, &header, channel)?;

        on_written(index, &path);
        written.push(path);
    }

    Ok(written)
}
