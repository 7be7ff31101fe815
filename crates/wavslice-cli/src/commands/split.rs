//! Split command implementation
//!
//! Writes every channel of a WAV file to its own mono file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use wavslice_core::ops;

use super::reporting::{elapsed_ms, print_timing, print_write_report};

/// Run the split command
///
/// # Arguments
/// * `file` - Path to the WAV file
/// * `prefix` - Output prefix; channel `i` goes to `<prefix><i>.wav`
/// * `verbose` - Print one line per written file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(file: &str, prefix: &str, verbose: bool, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file, prefix)
    } else {
        run_human(file, prefix, verbose)
    }
}

fn run_human(file: &str, prefix: &str, verbose: bool) -> Result<ExitCode> {
    println!("{}", "Loading...".cyan());
    let start = Instant::now();
    ops::split_with(file, prefix, |index, path| {
        if verbose {
            println!(
                "{} channel {} into '{}'",
                "Extracted".green(),
                index,
                path.display()
            );
        }
    })
    .with_context(|| format!("Failed to split '{}'", file))?;

    print_timing("Split", elapsed_ms(start));
    Ok(ExitCode::SUCCESS)
}

fn run_json(file: &str, prefix: &str) -> Result<ExitCode> {
    let start = Instant::now();
    let mut written = Vec::new();
    let outcome = ops::split_with(file, prefix, |_, path| written.push(path.to_path_buf()));
    print_write_report(file, &written, outcome.err(), start)
}
