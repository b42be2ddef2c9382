//! Flood risk coupling, quartile risk levels and summary statistics.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//!  │   combine    │────▶│ assign_levels  │────▶│  summarize   │
//!  │ (sev × SVI)  │     │  (quartiles)   │     │ (count, pct) │
//!  └──────────────┘     └────────────────┘     └──────────────┘
//! ```
//!
//! Only flooded reaches (severity class > 0) take part. Each one is paired
//! with exactly one vulnerability record through a deterministic [`Pairing`]
//! policy, and its coupled value is `severity_class × vulnerability_score`.
//! Risk levels come from the global quartiles of all coupled values.
//!
//! # Quick start
//!
//! ```
//! use floodrisk_depth::{DepthClassTable, DepthRecord, classify};
//! use floodrisk_risk::{Pairing, RiskLevel, VulnerabilityRecord, assign_levels, combine, summarize};
//!
//! let depths = classify(
//!     &[DepthRecord::new("a", 0.2), DepthRecord::new("b", 2.0)],
//!     &DepthClassTable::fema(),
//! )
//! .unwrap();
//! let svi = vec![
//!     VulnerabilityRecord::new("LOC_0000", -83.0, 35.5, 3),
//!     VulnerabilityRecord::new("LOC_0001", -82.5, 36.0, 9),
//! ];
//!
//! let coupled = combine(&depths, &svi, &Pairing::RoundRobin).unwrap();
//! let leveled = assign_levels(&coupled).unwrap();
//! let stats = summarize(&leveled).unwrap();
//!
//! assert_eq!(coupled[1].coupled_value, 36.0);
//! assert_eq!(leveled[1].risk_level, Some(RiskLevel::VeryHigh));
//! assert_eq!(stats.total_locations, 2);
//! ```

pub mod combine;
pub mod error;
pub mod level;
pub mod levels;
pub mod record;
pub mod summary;

pub(crate) mod pairing;

pub use combine::combine;
pub use error::RiskError;
pub use level::RiskLevel;
pub use levels::{QuartileCutPoints, assign_levels};
pub use pairing::Pairing;
pub use record::{
    CoupledRiskRecord, MAX_VULNERABILITY_SCORE, MIN_VULNERABILITY_SCORE, VulnerabilityRecord,
};
pub use summary::{RiskStatistics, summarize};
