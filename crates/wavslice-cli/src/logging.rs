//! Diagnostic logging setup.
//!
//! Library events go to stderr through a `tracing` fmt subscriber. The level
//! comes from the `--verbose` flag only.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use wavslice_core::{ops, write_wav_file, WavHeader};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false), "warn");
        assert_eq!(filter_directive(true), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }

    #[test]
    fn test_verbose_log_leaves_written_files_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("stereo.wav");
        write_wav_file(&input, &WavHeader::pcm(2, 8000, 16, 0), &[0u8; 64]).unwrap();
        let prefix = format!("{}/ch", dir.path().display());

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter_directive(true)))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            ops::split(&input, &prefix).unwrap();
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("parsed header"));
        assert!(!log.contains("ch0.wav"));
        assert!(!log.contains("ch1.wav"));
    }
}
