//! Power-law rating curve from discharge to flood depth.

use floodrisk_depth::DepthRecord;
use floodrisk_stats::{mean, min_max};
use tracing::info;

use crate::discharge::DischargeRecord;
use crate::error::SourceError;

/// Simplified stage-discharge relation:
///
/// ```text
/// depth = clamp((Q / divisor)^exponent, 0, max_depth_m)
/// ```
///
/// This stands in for HAND-FIM inundation depths; it has no terrain or
/// hydraulic geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingCurve {
    divisor: f64,
    exponent: f64,
    max_depth_m: f64,
}

impl RatingCurve {
    /// Creates a validated rating curve.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Configuration`] unless all three parameters are
    /// finite and positive.
    pub fn new(divisor: f64, exponent: f64, max_depth_m: f64) -> Result<Self, SourceError> {
        for (name, v) in [
            ("divisor", divisor),
            ("exponent", exponent),
            ("max_depth_m", max_depth_m),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SourceError::Configuration {
                    reason: format!("rating curve {name} must be finite and > 0, got {v}"),
                });
            }
        }
        Ok(Self {
            divisor,
            exponent,
            max_depth_m,
        })
    }

    /// Depth cap in metres.
    pub fn max_depth_m(&self) -> f64 {
        self.max_depth_m
    }

    /// Depth for one discharge value.
    ///
    /// # Precondition
    ///
    /// `discharge` must be finite and non-negative.
    #[inline]
    pub fn depth(&self, discharge: f64) -> f64 {
        (discharge / self.divisor)
            .powf(self.exponent)
            .clamp(0.0, self.max_depth_m)
    }

    /// Convert discharge records into depth records, keeping ids and
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidInput`] for the first negative or
    /// non-finite discharge.
    pub fn depths(&self, records: &[DischargeRecord]) -> Result<Vec<DepthRecord>, SourceError> {
        let mut out = Vec::with_capacity(records.len());
        for r in records {
            if !r.discharge_m3s.is_finite() || r.discharge_m3s < 0.0 {
                return Err(SourceError::InvalidInput {
                    reason: format!(
                        "discharge for reach '{}' must be finite and >= 0, got {}",
                        r.reach_id, r.discharge_m3s
                    ),
                });
            }
            out.push(DepthRecord {
                reach_id: r.reach_id.clone(),
                depth_m: self.depth(r.discharge_m3s),
                position: r.position,
            });
        }

        let depths: Vec<f64> = out.iter().map(|r| r.depth_m).collect();
        if let Some((_, max)) = min_max(&depths) {
            info!(
                n_reaches = out.len(),
                max_depth_m = max,
                mean_depth_m = mean(&depths),
                "estimated depths from rating curve"
            );
        }

        Ok(out)
    }
}

impl Default for RatingCurve {
    /// `depth = (Q / 50)^0.4`, capped at 5 m.
    fn default() -> Self {
        Self {
            divisor: 50.0,
            exponent: 0.4,
            max_depth_m: 5.0,
        }
    }
}
