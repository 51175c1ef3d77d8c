//! Testing utilities for dispatch strategies.
//!
//! - [`collect_lines`]: turn a captured `Vec<u8>` sink into its lines
//! - [`FailingSink`]: a writer that refuses every write, for exercising
//!   the sink error path

use std::io;

/// Split the bytes a dispatch run wrote into owned lines.
///
/// # Panics
///
/// Panics if the captured output is not UTF-8; dispatch output is label
/// text, so in tests that is always a bug worth failing loudly on.
pub fn collect_lines(bytes: Vec<u8>) -> Vec<String> {
    String::from_utf8(bytes)
        .expect("dispatch output is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// A writer that fails every write with `BrokenPipe`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FailingSink, collect_lines};
    use std::io::Write;

    #[test]
    fn collect_lines_splits_on_newlines() {
        let bytes = b"StartCommand\nStopCommand\n".to_vec();
        assert_eq!(collect_lines(bytes), vec!["StartCommand", "StopCommand"]);
    }

    #[test]
    fn collect_lines_of_empty_output_is_empty() {
        assert!(collect_lines(Vec::new()).is_empty());
    }

    #[test]
    fn failing_sink_rejects_writes() {
        let mut sink = FailingSink;
        assert!(sink.write(b"anything").is_err());
        assert!(sink.flush().is_ok());
    }
}
