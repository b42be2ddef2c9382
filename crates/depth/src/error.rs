//! Error types for the floodrisk-depth crate.

/// Error type for all fallible operations in the floodrisk-depth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DepthError {
    /// Returned when a depth record is out of domain (negative or non-finite).
    #[error("invalid depth for reach '{reach_id}': {depth_m} (must be finite and >= 0)")]
    InvalidInput {
        /// Identifier of the offending reach.
        reach_id: String,
        /// The rejected depth value.
        depth_m: f64,
    },

    /// Returned when a position is outside valid geographic bounds.
    #[error("invalid position: {reason}")]
    InvalidPosition {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the class table is malformed.
    #[error("invalid depth class table: {reason}")]
    Configuration {
        /// Description of the problem.
        reason: String,
    },
}
