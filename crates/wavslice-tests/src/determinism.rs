//! Determinism checks for decode and export.
//!
//! Runs an operation several times and compares the outputs byte-by-byte,
//! reporting the first difference.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// First byte difference found between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Byte offset of the difference (or the shorter length).
    pub offset: usize,
    /// Value from the first run, if it has a byte there.
    pub expected: Option<u8>,
    /// Value from the differing run, if it has a byte there.
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {:02X?}, got {:02X?} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\nRuns: {}\nHash: {}\n{}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hash of `data` as lowercase hex.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Run `generate_fn` `runs` times and verify all outputs are identical.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();
        if output == reference {
            continue;
        }

        let offset = reference
            .iter()
            .zip(output)
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| reference.len().min(output.len()));
        return DeterminismResult {
            is_deterministic: false,
            runs,
            hash,
            diff_info: Some(DiffInfo {
                offset,
                expected: reference.get(offset).copied(),
                actual: output.get(offset).copied(),
                run_index,
            }),
        };
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff_info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_outputs() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
        result.assert_deterministic();
    }

    #[test]
    fn test_detects_difference() {
        let counter = std::cell::Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0, counter.get()]
            },
            2,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.expected, Some(1));
        assert_eq!(diff.actual, Some(2));
    }

    #[test]
    fn test_detects_length_difference() {
        let counter = std::cell::Cell::new(0usize);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![7u8; counter.get()]
            },
            2,
        );
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.actual, Some(7));
        assert_eq!(diff.expected, None);
    }
}
