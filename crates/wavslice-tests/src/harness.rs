//! Test harness utilities for running the wavslice CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use crate::fixtures::FixtureDir;

/// Result of running the wavslice CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }

    /// Parse stdout as a JSON document (for `--json` runs).
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// A test harness for running wavslice CLI commands.
pub struct TestHarness {
    /// Working directory for fixtures and outputs.
    pub dir: FixtureDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            dir: FixtureDir::new(),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the wavslice CLI with the given arguments.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let manifest_path = wavslice_manifest_path();

        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "wavslice-cli", "--bin", "wavslice", "--"])
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Run `info` on a file.
    pub fn info(&self, file: &Path, json: bool) -> CliResult {
        let file = file.to_string_lossy();
        let mut args = vec!["info", "-f", &*file];
        if json {
            args.insert(0, "--json");
        }
        self.run_cli(&args)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn wavslice_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}
