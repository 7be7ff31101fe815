//! Error types for WAV parsing, decoding and export.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for wavslice operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while reading, decoding or writing WAV files.
#[derive(Debug, Error)]
pub enum WavError {
    /// File could not be opened, read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes than the fixed header layout requires.
    #[error("header too short: expected {expected} bytes, got {actual}")]
    HeaderTooShort {
        /// Size of the selected header layout.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// A chunk tag is not where the fixed layout puts it.
    #[error("invalid chunk tag at offset {offset}: expected '{expected}', found '{found}'")]
    InvalidTag {
        /// Byte offset of the tag.
        offset: usize,
        /// Tag required by the layout.
        expected: &'static str,
        /// Tag found in the file (lossy).
        found: String,
    },

    /// A header field holds a value the pipeline cannot work with.
    #[error("invalid {field}: {value}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: u32,
    },

    /// The file ends before the declared data chunk does.
    #[error("truncated payload: header declares {expected} bytes, file holds {actual}")]
    TruncatedPayload {
        /// Data chunk size from the header.
        expected: usize,
        /// Payload bytes present.
        actual: usize,
    },

    /// The payload does not split into whole frames.
    #[error("payload of {data_size} bytes is not a whole number of {frame_size}-byte frames")]
    MisalignedPayload {
        /// Payload size in bytes.
        data_size: usize,
        /// Bytes per frame (channels * bytes per sample).
        frame_size: usize,
    },

    /// Recognized audio format without a decoder.
    #[error("unsupported audio format {code} ({label})")]
    UnsupportedFormat {
        /// Audio format code.
        code: u16,
        /// Human-readable label for the code.
        label: &'static str,
    },

    /// Slice bounds outside the file.
    #[error("slice [{start}:{end}] is outside the file bounds [0:{max_end}]")]
    InvalidSliceBounds {
        /// Requested start (seconds).
        start: i64,
        /// Requested end (seconds).
        end: i64,
        /// Largest accepted end (seconds).
        max_end: i64,
    },

    /// Slice start after its end.
    #[error("slice start {start} is after end {end}")]
    SliceStartAfterEnd {
        /// Requested start (seconds).
        start: i64,
        /// Requested end (seconds).
        end: i64,
    },

    /// Parallel slice argument lists differ in length.
    #[error(
        "number of slice params should be same: {starts} starts, {ends} ends, {outputs} outputs"
    )]
    MismatchedSliceArgs {
        /// Number of start values.
        starts: usize,
        /// Number of end values.
        ends: usize,
        /// Number of output paths.
        outputs: usize,
    },
}

impl WavError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid tag error, rendering the found bytes lossily.
    pub fn invalid_tag(offset: usize, expected: &'static str, found: &[u8]) -> Self {
        Self::InvalidTag {
            offset,
            expected,
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::Io { .. } => "WAV_001",
            WavError::HeaderTooShort { .. } => "WAV_002",
            WavError::InvalidTag { .. } => "WAV_003",
            WavError::InvalidField { .. } => "WAV_004",
            WavError::TruncatedPayload { .. } => "WAV_005",
            WavError::MisalignedPayload { .. } => "WAV_006",
            WavError::UnsupportedFormat { .. } => "WAV_007",
            WavError::InvalidSliceBounds { .. } => "WAV_008",
            WavError::SliceStartAfterEnd { .. } => "WAV_009",
            WavError::MismatchedSliceArgs { .. } => "WAV_010",
        }
    }

    /// Error category: `io`, `format`, `unsupported` or `validation`.
    pub fn category(&self) -> &'static str {
        match self {
            WavError::Io { .. } => "io",
            WavError::HeaderTooShort { .. }
            | WavError::InvalidTag { .. }
            | WavError::InvalidField { .. }
            | WavError::TruncatedPayload { .. }
            | WavError::MisalignedPayload { .. } => "format",
            WavError::UnsupportedFormat { .. } => "unsupported",
            WavError::InvalidSliceBounds { .. }
            | WavError::SliceStartAfterEnd { .. }
            | WavError::MismatchedSliceArgs { .. } => "validation",
        }
    }

    /// Returns true for errors raised before any file is touched.
    pub fn is_validation(&self) -> bool {
        self.category() == "validation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = WavError::io(
            "missing/input.wav",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("missing/input.wav"));
        assert!(message.contains("no such file"));
        assert_eq!(err.category(), "io");
    }

    #[test]
    fn test_invalid_tag_helper_is_lossy() {
        let err = WavError::invalid_tag(36, "data", &[b'L', b'I', 0xFF, b'T']);
        assert!(err.to_string().contains("offset 36"));
        assert!(err.to_string().contains("'data'"));
        assert_eq!(err.category(), "format");
    }

    #[test]
    fn test_unsupported_format_names_label() {
        let err = WavError::UnsupportedFormat {
            code: 2,
            label: "Microsoft ADPCM",
        };
        assert_eq!(err.to_string(), "unsupported audio format 2 (Microsoft ADPCM)");
        assert_eq!(err.code(), "WAV_007");
        assert_eq!(err.category(), "unsupported");
    }

    #[test]
    fn test_validation_errors() {
        let err = WavError::MismatchedSliceArgs {
            starts: 2,
            ends: 1,
            outputs: 2,
        };
        assert!(err.is_validation());
        assert!(err
            .to_string()
            .starts_with("number of slice params should be same"));

        let err = WavError::InvalidSliceBounds {
            start: 0,
            end: 9,
            max_end: 4,
        };
        assert!(err.is_validation());
        assert_eq!(err.code(), "WAV_008");
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            WavError::io("a", std::io::Error::other("x")),
            WavError::HeaderTooShort {
                expected: 44,
                actual: 0,
            },
            WavError::invalid_tag(0, "RIFF", b"RIFX"),
            WavError::InvalidField {
                field: "channel count",
                value: 0,
            },
            WavError::TruncatedPayload {
                expected: 10,
                actual: 2,
            },
            WavError::MisalignedPayload {
                data_size: 3,
                frame_size: 2,
            },
            WavError::UnsupportedFormat {
                code: 3,
                label: "IEEE floating-point",
            },
            WavError::InvalidSliceBounds {
                start: 0,
                end: 1,
                max_end: 0,
            },
            WavError::SliceStartAfterEnd { start: 2, end: 1 },
            WavError::MismatchedSliceArgs {
                starts: 1,
                ends: 0,
                outputs: 0,
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(WavError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
