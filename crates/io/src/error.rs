//! Error types for floodrisk-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the floodrisk-io crate.
///
/// Covers missing files, file-system failures, CSV and JSON encoding
/// problems, and row-level validation of input tables.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// A file-system operation failed.
    #[error("i/o error at {}: {reason}", path.display())]
    Io {
        /// Path being read, written or created.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from serde_json.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when one or more rows of an input table are invalid.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl IoError {
    pub(crate) fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        IoError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/out/results"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "i/o error at /out/results: permission denied"
        );
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_json() {
        let err = IoError::Json {
            reason: "key must be a string".to_string(),
        };
        assert_eq!(err.to_string(), "json error: key must be a string");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "line 3: bad depth; line 7: missing latitude".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): line 3: bad depth; line 7: missing latitude"
        );
    }

    #[test]
    fn from_io_error_keeps_path() {
        let e = std::io::Error::other("disk full");
        let err = IoError::io(std::path::Path::new("/x/y.csv"), e);
        assert!(matches!(err, IoError::Io { .. }));
        assert!(err.to_string().contains("/x/y.csv"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: IoError = json_err.into();
        assert!(matches!(err, IoError::Json { .. }));
        assert!(err.to_string().starts_with("json error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
