//! wavslice CLI - Inspect, slice and split WAV files
//!
//! This binary reads PCM, µ-law and A-law WAV files and writes time slices or
//! per-channel mono files as 16-bit (or original-width) linear PCM.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavslice_cli::{commands, logging};

/// wavslice - WAV slicing and channel splitting
#[derive(Parser)]
#[command(name = "wavslice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print debug logs and one line per written file
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print header fields, sample count and duration of a WAV file
    Info {
        /// Path to the WAV file
        #[arg(short, long)]
        file: String,
    },

    /// Write each channel to its own mono file named <PREFIX><index>.wav
    Split {
        /// Path to the WAV file
        #[arg(short, long)]
        file: String,

        /// Output path prefix
        #[arg(short, long)]
        prefix: String,
    },

    /// Extract [start:end] second intervals into new files
    Slice {
        /// Path to the WAV file
        #[arg(short, long)]
        file: String,

        /// Start second of each slice
        #[arg(short, long = "start", num_args = 1.., required = true, allow_negative_numbers = true)]
        starts: Vec<i64>,

        /// End second of each slice
        #[arg(short, long = "end", num_args = 1.., required = true, allow_negative_numbers = true)]
        ends: Vec<i64>,

        /// Output path of each slice
        #[arg(short, long = "output", num_args = 1.., required = true)]
        outputs: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Info { file } => commands::info::run(&file, cli.json),
        Commands::Split { file, prefix } => {
            commands::split::run(&file, &prefix, cli.verbose, cli.json)
        }
        Commands::Slice {
            file,
            starts,
            ends,
            outputs,
        } => commands::slice::run(&file, &starts, &ends, &outputs, cli.verbose, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_info() {
        let cli = Cli::try_parse_from(["wavslice", "info", "-f", "in.wav"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.json);
        match cli.command {
            Commands::Info { file } => assert_eq!(file, "in.wav"),
            _ => panic!("expected info command"),
        }
    }

    #[test]
    fn test_cli_parses_split_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wavslice", "split", "--file", "in.wav", "--prefix", "out_", "--verbose", "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        match cli.command {
            Commands::Split { file, prefix } => {
                assert_eq!(file, "in.wav");
                assert_eq!(prefix, "out_");
            }
            _ => panic!("expected split command"),
        }
    }

    #[test]
    fn test_cli_parses_slice_lists() {
        let cli = Cli::try_parse_from([
            "wavslice", "-v", "slice", "-f", "in.wav", "-s", "0", "1", "-e", "1", "2", "-o",
            "a.wav", "b.wav",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Slice {
                file,
                starts,
                ends,
                outputs,
            } => {
                assert_eq!(file, "in.wav");
                assert_eq!(starts, vec![0, 1]);
                assert_eq!(ends, vec![1, 2]);
                assert_eq!(outputs, vec!["a.wav", "b.wav"]);
            }
            _ => panic!("expected slice command"),
        }
    }

    #[test]
    fn test_cli_slice_accepts_negative_start() {
        let cli = Cli::try_parse_from([
            "wavslice", "slice", "-f", "in.wav", "-s", "-1", "-e", "1", "-o", "a.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Slice { starts, .. } => assert_eq!(starts, vec![-1]),
            _ => panic!("expected slice command"),
        }
    }

    #[test]
    fn test_cli_parses_uneven_slice_lists() {
        // Length mismatch is reported by the command, not by the parser
        let cli = Cli::try_parse_from([
            "wavslice", "slice", "-f", "in.wav", "-s", "0", "1", "-e", "1", "-o", "a.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Slice { starts, ends, .. } => {
                assert_eq!(starts.len(), 2);
                assert_eq!(ends.len(), 1);
            }
            _ => panic!("expected slice command"),
        }
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["wavslice", "info"]).is_err());
        assert!(Cli::try_parse_from(["wavslice", "split", "-f", "in.wav"]).is_err());
    }
}
