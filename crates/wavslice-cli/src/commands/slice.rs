//! Slice command implementation
//!
//! Extracts `[start:end]` second intervals of a WAV file into new files.
//! Slices are written in order; a failing slice stops the run but keeps the
//! files already written.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use wavslice_core::{ops, SliceRequest, WavError};

use super::json_output::{wav_error_to_json, WriteOutput};
use super::reporting::{elapsed_ms, print_json, print_timing, print_write_report};

/// Run the slice command
///
/// # Arguments
/// * `file` - Path to the WAV file
/// * `starts` - Start second of each slice
/// * `ends` - End second of each slice
/// * `outputs` - Output path of each slice
/// * `verbose` - Print one line per written file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    file: &str,
    starts: &[i64],
    ends: &[i64],
    outputs: &[String],
    verbose: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(file, starts, ends, outputs)
    } else {
        run_human(file, starts, ends, outputs, verbose)
    }
}

fn run_human(
    file: &str,
    starts: &[i64],
    ends: &[i64],
    outputs: &[String],
    verbose: bool,
) -> Result<ExitCode> {
    let requests = SliceRequest::from_lists(starts, ends, outputs).map_err(|e| match e {
        WavError::MismatchedSliceArgs {
            starts,
            ends,
            outputs,
        } => anyhow!(
            "Number of slice params should be same ({} starts, {} ends, {} outputs)",
            starts,
            ends,
            outputs
        ),
        other => other.into(),
    })?;

    println!("{}", "Loading...".cyan());
    let start = Instant::now();
    ops::slice_with(file, &requests, |request, path| {
        if verbose {
            println!(
                "{} interval [{}:{}] into '{}'",
                "Extracted".green(),
                request.start_seconds,
                request.end_seconds,
                path.display()
            );
        }
    })
    .with_context(|| format!("Failed to slice '{}'", file))?;

    print_timing("Extraction", elapsed_ms(start));
    Ok(ExitCode::SUCCESS)
}

fn run_json(file: &str, starts: &[i64], ends: &[i64], outputs: &[String]) -> Result<ExitCode> {
    let start = Instant::now();
    let requests = match SliceRequest::from_lists(starts, ends, outputs) {
        Ok(requests) => requests,
        Err(e) => {
            print_json(&WriteOutput::failure(vec![wav_error_to_json(&e, file)], None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let mut written = Vec::with_capacity(requests.len());
    let outcome = ops::slice_with(file, &requests, |_, path| written.push(path.to_path_buf()));
    print_write_report(file, &written, outcome.err(), start)
}
