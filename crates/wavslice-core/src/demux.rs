//! Channel de-interleaving and re-interleaving.

use crate::error::{WavError, WavResult};

/// Splits an interleaved payload into one buffer per channel.
///
/// Sample `i` (a group of `bytes_per_sample` bytes) goes to channel
/// `i % channels`.
///
/// # Arguments
/// * `data` - Interleaved sample bytes
/// * `channels` - Channel count
/// * `bytes_per_sample` - Width of one sample of one channel
///
/// # Returns
/// `channels` buffers of `data.len() / channels` bytes each, or
/// [`WavError::MisalignedPayload`] if `data` is not a whole number of frames.
pub fn deinterleave(
    data: &[u8],
    channels: usize,
    bytes_per_sample: usize,
) -> WavResult<Vec<Vec<u8>>> {
    let frame_size = channels * bytes_per_sample;
    if frame_size == 0 || data.len() % frame_size != 0 {
        return Err(WavError::MisalignedPayload {
            data_size: data.len(),
            frame_size,
        });
    }

    let per_channel = data.len() / channels;
    let mut buffers: Vec<Vec<u8>> = (0..channels)
        .map(|_| Vec::with_capacity(per_channel))
        .collect();

    for (index, sample) in data.chunks_exact(bytes_per_sample).enumerate() {
        buffers[index % channels].extend_from_slice(sample);
    }

    Ok(buffers)
}

/// Interleaves the byte range `start..end` of every channel buffer.
///
/// Both offsets are clamped to the shortest buffer, so the result always holds
/// whole frames of data that exists.
///
/// # Arguments
/// * `channels` - Per-channel buffers, in output order
/// * `bytes_per_sample` - Width of one sample of one channel
/// * `start` - First byte offset within each channel buffer
/// * `end` - Byte offset one past the last sample
///
/// # Returns
/// `channels.len() * (end - start)` interleaved bytes
pub fn interleave<B: AsRef<[u8]>>(
    channels: &[B],
    bytes_per_sample: usize,
    start: usize,
    end: usize,
) -> Vec<u8> {
    if channels.is_empty() || bytes_per_sample == 0 {
        return Vec::new();
    }

    let available = channels
        .iter()
        .map(|channel| channel.as_ref().len())
        .min()
        .unwrap_or(0);
    let end = end.min(available);
    let start = start.min(end);

    let mut out = Vec::with_capacity(channels.len() * (end - start));
    let mut offset = start;
    while offset + bytes_per_sample <= end {
        for channel in channels {
            out.extend_from_slice(&channel.as_ref()[offset..offset + bytes_per_sample]);
        }
        offset += bytes_per_sample;
    }
    out
}
