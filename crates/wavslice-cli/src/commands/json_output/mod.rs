//! JSON output types for the `--json` flag.
//!
//! Every command prints exactly one pretty-printed document of the shape
//! `{ "success": ..., "errors": [...], "result": ... }`.

mod records;

pub use records::{InfoOutput, WriteOutput, WriteResult, WrittenFile};

use serde::{Deserialize, Serialize};
use wavslice_core::WavError;

/// Error codes raised by the CLI itself.
///
/// Library failures keep their own `WAV_XXX` codes.
pub mod error_codes {
    /// A written output could not be read back for hashing
    pub const OUTPUT_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "WAV_002", "CLI_001")
    pub code: String,
    /// Error category (io, format, unsupported, validation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            category: None,
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the category for this error.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Converts a library error into its JSON form.
///
/// I/O errors name the file they failed on; everything else is attributed
/// to `file`.
pub fn wav_error_to_json(error: &WavError, file: &str) -> JsonError {
    let file = match error {
        WavError::Io { path, .. } => path.display().to_string(),
        _ => file.to_string(),
    };
    JsonError::new(error.code(), error.to_string())
        .with_category(error.category())
        .with_file(file)
}
