//! Time-range extraction into new WAV files.

use std::path::{Path, PathBuf};

use crate::audio::DecodedAudio;
use crate::container::Container;
use crate::demux::interleave;
use crate::error::{WavError, WavResult};
use crate::writer::{write_wav_file, write_wav_to_vec};

/// One `[start, end)` interval, in whole seconds, and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    /// First second included.
    pub start_seconds: i64,
    /// Second at which the slice stops.
    pub end_seconds: i64,
    /// Output file path.
    pub output: PathBuf,
}

impl SliceRequest {
    /// Creates a new slice request.
    pub fn new(start_seconds: i64, end_seconds: i64, output: impl Into<PathBuf>) -> Self {
        Self {
            start_seconds,
            end_seconds,
            output: output.into(),
        }
    }

    /// Zips parallel start/end/output lists into requests.
    ///
    /// Fails with [`WavError::MismatchedSliceArgs`] unless all three lists have
    /// the same length; no request is built in that case.
    pub fn from_lists<P: AsRef<Path>>(
        starts: &[i64],
        ends: &[i64],
        outputs: &[P],
    ) -> WavResult<Vec<Self>> {
        if starts.len() != ends.len() || starts.len() != outputs.len() {
            return Err(WavError::MismatchedSliceArgs {
                starts: starts.len(),
                ends: ends.len(),
                outputs: outputs.len(),
            });
        }

        Ok(starts
            .iter()
            .zip(ends)
            .zip(outputs)
            .map(|((&start, &end), output)| Self::new(start, end, output.as_ref()))
            .collect())
    }

    /// Checks the bounds against a file of `duration` seconds.
    ///
    /// The start must be non-negative and not after the end, and the end may
    /// reach at most one second past the last whole second.
    pub fn validate(&self, duration: f64) -> WavResult<()> {
        let max_end = max_end_seconds(duration);
        if self.start_seconds < 0 || self.end_seconds > max_end {
            return Err(WavError::InvalidSliceBounds {
                start: self.start_seconds,
                end: self.end_seconds,
                max_end,
            });
        }
        if self.start_seconds > self.end_seconds {
            return Err(WavError::SliceStartAfterEnd {
                start: self.start_seconds,
                end: self.end_seconds,
            });
        }
        Ok(())
    }
}

/// Largest end second accepted for a file of `duration` seconds.
pub fn max_end_seconds(duration: f64) -> i64 {
    duration.floor() as i64 + 1
}

/// Renders one slice of decoded audio as a complete WAV file in memory.
pub fn render_slice(decoded: &DecodedAudio, request: &SliceRequest) -> WavResult<Vec<u8>> {
    request.validate(decoded.header().duration_seconds())?;
    let payload = slice_payload(decoded, request);
    Ok(write_wav_to_vec(decoded.header(), &payload))
}

/// Validates, decodes and writes one slice of `container` to `request.output`.
///
/// Validation runs before the payload is decoded or any file is created.
pub fn extract(container: &mut Container, request: &SliceRequest) -> WavResult<PathBuf> {
    request.validate(container.duration())?;

    let decoded = container.decode()?;
    let payload = slice_payload(decoded, request);
    write_wav_file(&request.output, decoded.header(), &payload)?;
    Ok(request.output.clone())
}

/// Interleaved bytes for a validated request, clamped to the decoded data.
fn slice_payload(decoded: &DecodedAudio, request: &SliceRequest) -> Vec<u8> {
    let bytes_per_second =
        u64::from(decoded.header().sample_rate) * decoded.bytes_per_sample() as u64;
    let start = second_to_offset(request.start_seconds, bytes_per_second);
    let end = second_to_offset(request.end_seconds, bytes_per_second);
    interleave(decoded.channels(), decoded.bytes_per_sample(), start, end)
}

fn second_to_offset(seconds: i64, bytes_per_second: u64) -> usize {
    let seconds = u64::try_from(seconds).unwrap_or(0);
    usize::try_from(seconds.saturating_mul(bytes_per_second)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{parse_header, WavHeader};
    use pretty_assertions::assert_eq;

    /// Mono 16-bit ramp: sample `i` holds `i as i16`.
    fn ramp(sample_rate: u32, seconds: u32) -> (WavHeader, Vec<u8>) {
        let samples = sample_rate * seconds;
        let payload: Vec<u8> = (0..samples).flat_map(|i| (i as i16).to_le_bytes()).collect();
        (WavHeader::pcm(1, sample_rate, 16, payload.len() as u32), payload)
    }

    #[test]
    fn test_from_lists_zips_in_order() {
        let requests =
            SliceRequest::from_lists(&[0, 1], &[1, 2], &["a.wav", "b.wav"]).unwrap();
        assert_eq!(
            requests,
            vec![
                SliceRequest::new(0, 1, "a.wav"),
                SliceRequest::new(1, 2, "b.wav"),
            ]
        );
    }

    #[test]
    fn test_from_lists_rejects_mismatch() {
        let err = SliceRequest::from_lists(&[0, 1], &[1], &["a.wav", "b.wav"]).unwrap_err();
        assert!(matches!(
            err,
            WavError::MismatchedSliceArgs {
                starts: 2,
                ends: 1,
                outputs: 2
            }
        ));

        let err = SliceRequest::from_lists::<&str>(&[0], &[1], &[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_max_end_seconds() {
        assert_eq!(max_end_seconds(3.0), 4);
        assert_eq!(max_end_seconds(2.976), 3);
        assert_eq!(max_end_seconds(0.0), 1);
    }

    #[test]
    fn test_validate_bounds() {
        SliceRequest::new(0, 4, "x.wav").validate(3.0).unwrap();
        SliceRequest::new(2, 2, "x.wav").validate(3.0).unwrap();

        assert!(matches!(
            SliceRequest::new(0, 5, "x.wav").validate(3.0).unwrap_err(),
            WavError::InvalidSliceBounds { max_end: 4, .. }
        ));
        assert!(matches!(
            SliceRequest::new(-1, 1, "x.wav").validate(3.0).unwrap_err(),
            WavError::InvalidSliceBounds { start: -1, .. }
        ));
        assert!(matches!(
            SliceRequest::new(2, 1, "x.wav").validate(3.0).unwrap_err(),
            WavError::SliceStartAfterEnd { start: 2, end: 1 }
        ));
    }

    #[test]
    fn test_render_slice_matches_source_region() {
        let (header, payload) = ramp(22050, 3);
        let decoded = DecodedAudio::decode(&header, &payload).unwrap();

        let first = render_slice(&decoded, &SliceRequest::new(0, 1, "a.wav")).unwrap();
        let second = render_slice(&decoded, &SliceRequest::new(1, 2, "b.wav")).unwrap();

        assert_eq!(first.len(), 44 + 44100);
        assert_eq!(second.len(), 44 + 44100);
        assert_eq!(&first[44..], &payload[..44100]);
        assert_eq!(&second[44..], &payload[44100..88200]);
        assert_eq!(parse_header(&second).unwrap().data_size, 44100);
    }

    #[test]
    fn test_render_slice_clamps_last_second() {
        let (header, payload) = ramp(8000, 2);
        let decoded = DecodedAudio::decode(&header, &payload).unwrap();

        // End may be one second past the data; only the real bytes are written
        let bytes = render_slice(&decoded, &SliceRequest::new(1, 3, "tail.wav")).unwrap();
        assert_eq!(&bytes[44..], &payload[16000..]);
        assert_eq!(parse_header(&bytes).unwrap().data_size, 16000);
    }

    #[test]
    fn test_render_slice_stereo_keeps_interleaving() {
        let frames: Vec<u8> = (0..16u8).collect();
        let header = WavHeader::pcm(2, 4, 8, 16);
        let decoded = DecodedAudio::decode(&header, &frames).unwrap();

        let bytes = render_slice(&decoded, &SliceRequest::new(1, 2, "s.wav")).unwrap();
        assert_eq!(&bytes[44..], &frames[8..16]);
        assert_eq!(parse_header(&bytes).unwrap().channels, 2);
    }

    #[test]
    fn test_render_slice_recomputes_riff_size() {
        let (header, payload) = ramp(8000, 2);
        let mut bytes = write_wav_to_vec(&header, &payload);
        // Source declares a trailing chunk after the data
        bytes[4..8].copy_from_slice(&(36 + 32000 + 12u32).to_le_bytes());
        bytes.extend_from_slice(b"LIST\x04\0\0\0abcd");
        let mut container = Container::from_bytes("ramp.wav", bytes).unwrap();
        assert_eq!(container.header().riff_size, 32048);

        let decoded = container.decode().unwrap();
        let file = render_slice(decoded, &SliceRequest::new(0, 1, "a.wav")).unwrap();
        let sliced = parse_header(&file).unwrap();
        assert_eq!(sliced.riff_size, 36 + 16000);
        assert_eq!(sliced.data_size, 16000);
        assert_eq!(sliced.byte_rate, 16000);
        assert_eq!(sliced.block_align, 2);
    }

    #[test]
    fn test_empty_slice() {
        let (header, payload) = ramp(8000, 1);
        let decoded = DecodedAudio::decode(&header, &payload).unwrap();
        let bytes = render_slice(&decoded, &SliceRequest::new(1, 1, "e.wav")).unwrap();
        assert_eq!(bytes.len(), 44);
    }

    #[test]
    fn test_extract_validates_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let (header, payload) = ramp(8000, 1);
        let bytes = write_wav_to_vec(&header, &payload);
        let mut container = Container::from_bytes("ramp.wav", bytes).unwrap();

        let output = dir.path().join("never.wav");
        let err = extract(&mut container, &SliceRequest::new(0, 9, &output)).unwrap_err();
        assert!(err.is_validation());
        assert!(!output.exists());

        let output = dir.path().join("first.wav");
        let written = extract(&mut container, &SliceRequest::new(0, 1, &output)).unwrap();
        assert_eq!(written, output);
        assert_eq!(std::fs::read(&output).unwrap().len(), 44 + 16000);
    }
}
