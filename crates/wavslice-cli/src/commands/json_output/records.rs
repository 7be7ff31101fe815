//! Output records for each command.

use serde::{Deserialize, Serialize};
use wavslice_core::AudioInfo;

use super::JsonError;

/// JSON output for the info command.
#[derive(Debug, Clone, Serialize)]
pub struct InfoOutput {
    /// Whether the file was read successfully
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// File summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InfoResult>,
}

/// File summary with load timing.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResult {
    /// Header fields and derived values
    #[serde(flatten)]
    pub info: AudioInfo,
    /// Load time in milliseconds
    pub duration_ms: u64,
}

impl InfoOutput {
    /// Creates a successful info output.
    pub fn success(info: AudioInfo, duration_ms: u64) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(InfoResult { info, duration_ms }),
        }
    }

    /// Creates a failed info output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// A file written by split or slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrittenFile {
    /// Output path as given on the command line
    pub path: String,
    /// Total file size in bytes
    pub size_bytes: u64,
    /// BLAKE3 hash of the file contents
    pub blake3: String,
}

/// Files produced by a split or slice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteResult {
    /// Source file
    pub input: String,
    /// Outputs in the order they were written
    pub files: Vec<WrittenFile>,
    /// Elapsed time in milliseconds
    pub duration_ms: u64,
}

/// JSON output for the split and slice commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteOutput {
    /// Whether every output was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Written files; present on failure too when some outputs were written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WriteResult>,
}

impl WriteOutput {
    /// Creates a successful write output.
    pub fn success(result: WriteResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed write output, keeping any files already written.
    pub fn failure(errors: Vec<JsonError>, partial: Option<WriteResult>) -> Self {
        Self {
            success: false,
            errors,
            result: partial.filter(|result| !result.files.is_empty()),
        }
    }
}
