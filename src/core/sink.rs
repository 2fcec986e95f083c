//! Output stream selection

use super::error::Result;
use std::io::{self, Write};

/// Destination stream for encoded records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sink {
    /// Standard output stream (default)
    #[default]
    Stdout,

    /// Standard error stream
    Stderr,
}

impl Sink {
    /// Resolve a configuration string to a sink.
    ///
    /// `"stderr"` selects the error stream; any other value, including the
    /// empty string, selects standard output. The non-stderr branch is the
    /// documented fallback, not an error.
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        match s {
            "stderr" => Sink::Stderr,
            _ => Sink::Stdout,
        }
    }

    /// Write one encoded record followed by a newline
    pub fn write_line(&self, line: &str) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)?;
            }
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{}", line)?;
            }
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        match self {
            Sink::Stdout => io::stdout().flush()?,
            Sink::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
