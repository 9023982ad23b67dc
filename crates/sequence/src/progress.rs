//! Periodic progress reporting for long-running loops.

use std::io::{self, Write};

use thiserror::Error;

/// Errors that can occur when configuring a [`Progress`] reporter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("report interval must be positive")]
    ZeroInterval,
}

/// Writes `current/total` lines at a fixed interval and at completion.
///
/// ```rust
/// use numkit_sequence::Progress;
///
/// let progress = Progress::new(5, 2).unwrap();
/// let mut out = Vec::new();
/// for step in 1..=5 {
///     progress.report(step, &mut out).unwrap();
/// }
/// assert_eq!(String::from_utf8(out).unwrap(), "2/5\n4/5\n5/5\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    total: usize,
    interval: usize,
}

impl Progress {
    /// Creates a reporter for a loop of `total` steps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInterval`] if `interval` is zero.
    pub fn new(total: usize, interval: usize) -> Result<Self, ConfigError> {
        if interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(Self { total, interval })
    }

    /// Returns the total number of steps.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the reporting interval.
    #[must_use]
    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Returns true if step `current` falls on the interval or completes the loop.
    #[must_use]
    pub fn is_due(&self, current: usize) -> bool {
        current % self.interval == 0 || current == self.total
    }

    /// Writes `current/total` to `out` when the step is due.
    ///
    /// Returns whether a line was written.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn report<W: Write>(&self, current: usize, out: &mut W) -> io::Result<bool> {
        if !self.is_due(current) {
            return Ok(false);
        }

        writeln!(out, "{current}/{}", self.total)?;
        Ok(true)
    }

    /// Prints `current/total` to standard output when the step is due.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to standard output.
    pub fn print(&self, current: usize) -> io::Result<bool> {
        self.report(current, &mut io::stdout().lock())
    }
}
