//! Stand-in data sources for the flood risk pipeline.
//!
//! Production deployments feed the pipeline from a hydrologic model
//! (streamflow) and a demographic dataset (social vulnerability). Until those
//! feeds are wired in, this crate produces seeded synthetic equivalents with
//! the same shape:
//!
//! - [`synthetic_discharge`]: log-normal peak discharge per reach with a
//!   handful of amplified flood reaches,
//! - [`RatingCurve`]: power-law discharge → depth conversion,
//! - [`synthetic_vulnerability`]: scored point locations inside the study area.
//!
//! All generators take an explicit RNG, so a fixed seed reproduces a run.

mod bbox;
mod discharge;
mod error;
mod rating;
mod vulnerability;

pub use bbox::BoundingBox;
pub use discharge::{DischargeConfig, DischargeRecord, synthetic_discharge};
pub use error::SourceError;
pub use rating::RatingCurve;
pub use vulnerability::{SCORE_WEIGHTS, VulnerabilityConfig, synthetic_vulnerability};
