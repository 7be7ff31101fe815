//! Info command implementation
//!
//! Loads a WAV file and prints its header fields and derived values.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use wavslice_core::{ops, AudioInfo};

use super::json_output::{wav_error_to_json, InfoOutput};
use super::reporting::{elapsed_ms, print_json, print_timing};

/// Run the info command
///
/// # Arguments
/// * `file` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file)
    } else {
        run_human(file)
    }
}

fn run_human(file: &str) -> Result<ExitCode> {
    println!("{}", "Loading...".cyan());
    let start = Instant::now();
    let info = ops::info(file).with_context(|| format!("Failed to load '{}'", file))?;
    print_timing("Analysis", elapsed_ms(start));

    print_info(&info);
    Ok(ExitCode::SUCCESS)
}

fn run_json(file: &str) -> Result<ExitCode> {
    let start = Instant::now();
    match ops::info(file) {
        Ok(info) => {
            print_json(&InfoOutput::success(info, elapsed_ms(start)))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_json(&InfoOutput::failure(vec![wav_error_to_json(&e, file)]))?;
            Ok(ExitCode::from(1))
        }
    }
}

fn print_info(info: &AudioInfo) {
    println!("{} {}", "Filename:".dimmed(), info.path.display());
    println!("{} {}", "Size:".dimmed(), info.size_bytes);
    println!("{} {}", "Audio Format:".dimmed(), info.audio_format);
    println!("{} {}", "Sample rate:".dimmed(), info.sample_rate);
    println!("{} {}", "BitsPerSample:".dimmed(), info.bits_per_sample);
    println!("{} {}", "Channels:".dimmed(), info.channel_count);
    println!("{} {}", "Num samples:".dimmed(), info.sample_count);
    println!("{} {} sec", "Duration:".dimmed(), info.duration_seconds);
}
