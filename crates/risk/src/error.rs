//! Error types for the floodrisk-risk crate.

/// Error type for all fallible operations in the floodrisk-risk crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RiskError {
    /// Returned when a record is malformed or out of domain.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a vulnerability score is outside 1..=16.
    #[error("invalid vulnerability score for location '{location_id}': {score} (must be 1..=16)")]
    InvalidScore {
        /// Identifier of the offending location.
        location_id: String,
        /// The rejected score.
        score: u8,
    },

    /// Returned when a stage needs at least one eligible record and got none.
    #[error("empty input: {reason}")]
    EmptyInput {
        /// Description of what was missing.
        reason: String,
    },
}
