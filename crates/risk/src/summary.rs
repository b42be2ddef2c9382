//! Per-level counts and percentages.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RiskError;
use crate::level::RiskLevel;
use crate::record::CoupledRiskRecord;

/// Distribution of records over the four risk levels.
///
/// Both maps always hold keys 1..=4.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskStatistics {
    /// Number of leveled records.
    pub total_locations: usize,
    /// level number -> record count
    pub count_by_level: BTreeMap<u8, usize>,
    /// level number -> percentage of `total_locations`
    pub pct_by_level: BTreeMap<u8, f64>,
}

impl RiskStatistics {
    /// Statistics of an empty run: all counts and percentages zero.
    pub fn empty() -> Self {
        Self {
            total_locations: 0,
            count_by_level: RiskLevel::ALL.iter().map(|l| (l.number(), 0)).collect(),
            pct_by_level: RiskLevel::ALL.iter().map(|l| (l.number(), 0.0)).collect(),
        }
    }

    /// Record count for `level`.
    pub fn count(&self, level: RiskLevel) -> usize {
        self.count_by_level
            .get(&level.number())
            .copied()
            .unwrap_or(0)
    }

    /// Percentage of records at `level`.
    pub fn pct(&self, level: RiskLevel) -> f64 {
        self.pct_by_level
            .get(&level.number())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Count records per risk level and convert to percentages.
///
/// An empty input yields [`RiskStatistics::empty`].
///
/// # Errors
///
/// Returns [`RiskError::InvalidInput`] if any record has no risk level.
pub fn summarize(records: &[CoupledRiskRecord]) -> Result<RiskStatistics, RiskError> {
    let mut stats = RiskStatistics::empty();

    for r in records {
        let level = r.risk_level.ok_or_else(|| RiskError::InvalidInput {
            reason: format!("reach '{}' has no assigned risk level", r.reach_id),
        })?;
        *stats.count_by_level.entry(level.number()).or_insert(0) += 1;
    }

    let total: usize = stats.count_by_level.values().sum();
    stats.total_locations = total;
    if total > 0 {
        for (level, count) in &stats.count_by_level {
            stats
                .pct_by_level
                .insert(*level, *count as f64 / total as f64 * 100.0);
        }
    }

    Ok(stats)
}
