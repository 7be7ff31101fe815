//! wavslice End-to-End Test Infrastructure
//!
//! Integration tests for the read, decode, slice and split flows:
//!
//! - **Fixtures**: synthetic PCM, µ-law and A-law files built in memory
//! - **Validators**: outputs re-read with hound, independent of wavslice
//! - **Determinism**: repeated runs must produce byte-identical files
//! - **Harness**: runs the `wavslice` binary through cargo
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavslice-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod harness;
pub mod validators;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
pub use fixtures::FixtureDir;
pub use harness::{CliResult, TestHarness};
pub use validators::{inspect_wav, read_pcm16, WavSummary};
