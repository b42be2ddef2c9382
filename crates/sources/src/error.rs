//! Error types for the floodrisk-sources crate.

/// Error type for all fallible operations in the floodrisk-sources crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// Returned when an input record is out of domain.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a generator or rating curve is misconfigured.
    #[error("invalid configuration: {reason}")]
    Configuration {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_input() {
        let e = SourceError::InvalidInput {
            reason: "negative discharge".to_string(),
        };
        assert_eq!(e.to_string(), "invalid input: negative discharge");
    }

    #[test]
    fn error_configuration() {
        let e = SourceError::Configuration {
            reason: "n_flood_reaches exceeds n_reaches".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: n_flood_reaches exceeds n_reaches"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SourceError>();
    }
}
