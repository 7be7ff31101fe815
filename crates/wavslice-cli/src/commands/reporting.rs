use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use wavslice_core::WavError;

use super::json_output::{
    error_codes, wav_error_to_json, JsonError, WriteOutput, WriteResult, WrittenFile,
};

/// Milliseconds elapsed since `start`.
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Prints a `<label> time = N ms` line.
pub(crate) fn print_timing(label: &str, duration_ms: u64) {
    println!("{} {} ms", format!("{label} time =").dimmed(), duration_ms);
}

/// Prints a JSON document to stdout.
pub(crate) fn print_json<T: Serialize>(output: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

/// Reads back a written output to record its size and hash.
pub(crate) fn written_file(path: &Path) -> Result<WrittenFile, JsonError> {
    let data = fs::read(path).map_err(|e| {
        JsonError::new(
            error_codes::OUTPUT_READ,
            format!("Failed to read written file: {}", e),
        )
        .with_file(path.display().to_string())
    })?;

    Ok(WrittenFile {
        path: path.display().to_string(),
        size_bytes: data.len() as u64,
        blake3: blake3::hash(&data).to_hex().to_string(),
    })
}

/// Prints the JSON report of a split or slice run.
///
/// Every file in `written` is listed, including when `failure` stopped the
/// run part way.
///
/// # Returns
/// Exit code: 0 when every output was written and read back, 1 otherwise
pub(crate) fn print_write_report(
    input: &str,
    written: &[PathBuf],
    failure: Option<WavError>,
    start: Instant,
) -> Result<ExitCode> {
    let mut errors: Vec<JsonError> = failure
        .iter()
        .map(|e| wav_error_to_json(e, input))
        .collect();

    let mut files = Vec::with_capacity(written.len());
    for path in written {
        match written_file(path) {
            Ok(entry) => files.push(entry),
            Err(error) => {
                errors.push(error);
                break;
            }
        }
    }

    let result = WriteResult {
        input: input.to_string(),
        files,
        duration_ms: elapsed_ms(start),
    };
    if errors.is_empty() {
        print_json(&WriteOutput::success(result))?;
        Ok(ExitCode::SUCCESS)
    } else {
        print_json(&WriteOutput::failure(errors, Some(result)))?;
        Ok(ExitCode::from(1))
    }
}
