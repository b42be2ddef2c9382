//! Accumulated row validation.
//!
//! Readers push one message per offending row into a [`ValidationCollector`]
//! and report every problem in a single [`IoError::Validation`].

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    #[cfg(test)]
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record an error tied to a 1-based file line.
    pub(crate) fn push_line(&mut self, line: usize, msg: impl std::fmt::Display) {
        self.errors.push(format!("line {line}: {msg}"));
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_finishes_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn errors_are_joined() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push_line(4, "second");
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "first; line 4: second");
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
