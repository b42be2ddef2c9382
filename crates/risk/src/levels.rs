//! Quartile-based risk level assignment.
//!
//! Assignment is a two-phase reduction: the cut points are computed once
//! over the whole coupled-value population, then every record is binned
//! against those global cut points. The binning phase runs in parallel.

use floodrisk_stats::{quartiles, sorted};
use rayon::prelude::*;
use tracing::debug;

use crate::error::RiskError;
use crate::level::RiskLevel;
use crate::record::CoupledRiskRecord;

/// Empirical quartiles (Q1, Q2, Q3) of the positive coupled values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileCutPoints {
    cuts: [f64; 3],
}

impl QuartileCutPoints {
    /// Computes type-7 (linear interpolation) quartiles over all values
    /// strictly greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if any value is negative or
    /// non-finite and [`RiskError::EmptyInput`] if no value is positive.
    pub fn from_values(values: &[f64]) -> Result<Self, RiskError> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(RiskError::InvalidInput {
                reason: format!("coupled value {bad} must be finite and >= 0"),
            });
        }
        let positive: Vec<f64> = values.iter().copied().filter(|&v| v > 0.0).collect();
        if positive.is_empty() {
            return Err(RiskError::EmptyInput {
                reason: "no coupled values greater than zero to rank".to_string(),
            });
        }
        Ok(Self {
            cuts: quartiles(&sorted(&positive)),
        })
    }

    /// First quartile.
    pub fn q1(&self) -> f64 {
        self.cuts[0]
    }

    /// Median.
    pub fn q2(&self) -> f64 {
        self.cuts[1]
    }

    /// Third quartile.
    pub fn q3(&self) -> f64 {
        self.cuts[2]
    }

    /// Risk level for a coupled value.
    ///
    /// Right-inclusive bins: `≤ Q1` → Low, `(Q1, Q2]` → Moderate,
    /// `(Q2, Q3]` → High, `> Q3` → Very High. A value equal to a cut point
    /// stays in the lower level.
    #[inline]
    pub fn level_for(&self, value: f64) -> RiskLevel {
        let above = self.cuts.iter().filter(|&&cut| cut < value).count();
        let n = (above + 1).clamp(1, 4) as u8;
        RiskLevel::from_number(n).unwrap_or(RiskLevel::VeryHigh)
    }
}

/// Assign a quartile risk level to every coupled record.
///
/// Returns new records in input order with `risk_level` set; the input is
/// left untouched. Records with a coupled value of zero do not shape the
/// cut points and land in [`RiskLevel::Low`].
///
/// # Errors
///
/// See [`QuartileCutPoints::from_values`].
pub fn assign_levels(records: &[CoupledRiskRecord]) -> Result<Vec<CoupledRiskRecord>, RiskError> {
    let values: Vec<f64> = records.iter().map(|r| r.coupled_value).collect();
    let cuts = QuartileCutPoints::from_values(&values)?;
    debug!(
        q1 = cuts.q1(),
        q2 = cuts.q2(),
        q3 = cuts.q3(),
        n_records = records.len(),
        "computed risk quartiles"
    );

    Ok(records
        .par_iter()
        .map(|r| CoupledRiskRecord {
            risk_level: Some(cuts.level_for(r.coupled_value)),
            ..r.clone()
        })
        .collect())
}
