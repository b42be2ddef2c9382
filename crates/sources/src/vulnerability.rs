//! Synthetic social vulnerability locations.

use floodrisk_risk::VulnerabilityRecord;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use tracing::info;

use crate::bbox::BoundingBox;
use crate::error::SourceError;

/// Probability of each score 1..=16; low vulnerability is most common.
pub const SCORE_WEIGHTS: [f64; 16] = [
    0.15, 0.15, 0.12, 0.10, 0.08, 0.08, 0.07, 0.06, 0.05, 0.04, 0.03, 0.02, 0.02, 0.01, 0.01, 0.01,
];

/// Configuration for [`synthetic_vulnerability`].
#[derive(Debug, Clone)]
pub struct VulnerabilityConfig {
    n_locations: usize,
    bbox: BoundingBox,
}

impl VulnerabilityConfig {
    /// Creates a configuration with defaults: 200 locations in the default
    /// bounding box.
    pub fn new() -> Self {
        Self {
            n_locations: 200,
            bbox: BoundingBox::default(),
        }
    }

    /// Sets the number of locations.
    pub fn with_n_locations(mut self, n: usize) -> Self {
        self.n_locations = n;
        self
    }

    /// Sets the area in which locations are placed.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Number of locations.
    pub fn n_locations(&self) -> usize {
        self.n_locations
    }
}

impl Default for VulnerabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate scored vulnerability locations with ids `LOC_{index:04}`.
///
/// Coordinates are uniform inside the bounding box; scores follow
/// [`SCORE_WEIGHTS`].
///
/// # Errors
///
/// Returns [`SourceError::Configuration`] if the score distribution cannot
/// be built.
pub fn synthetic_vulnerability(
    config: &VulnerabilityConfig,
    rng: &mut impl Rng,
) -> Result<Vec<VulnerabilityRecord>, SourceError> {
    let n = config.n_locations;
    let scores = WeightedIndex::new(SCORE_WEIGHTS).map_err(|e| SourceError::Configuration {
        reason: format!("score weights: {e}"),
    })?;

    let lons: Vec<f64> = (0..n).map(|_| config.bbox.sample_lon(rng)).collect();
    let lats: Vec<f64> = (0..n).map(|_| config.bbox.sample_lat(rng)).collect();
    let records: Vec<VulnerabilityRecord> = lons
        .into_iter()
        .zip(lats)
        .enumerate()
        .map(|(i, (lon, lat))| {
            let score = scores.sample(rng) as u8 + 1;
            VulnerabilityRecord::new(format!("LOC_{i:04}"), lon, lat, score)
        })
        .collect();

    if !records.is_empty() {
        let values: Vec<f64> = records
            .iter()
            .map(|r| f64::from(r.vulnerability_score))
            .collect();
        let (lo, hi) = floodrisk_stats::min_max(&values).unwrap_or((0.0, 0.0));
        info!(
            n_locations = records.len(),
            min_score = lo,
            max_score = hi,
            mean_score = floodrisk_stats::mean(&values),
            "generated synthetic vulnerability"
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn weights_sum_to_one() {
        assert_relative_eq!(SCORE_WEIGHTS.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn records_are_valid() {
        let cfg = VulnerabilityConfig::new();
        let mut rng = StdRng::seed_from_u64(3);
        let out = synthetic_vulnerability(&cfg, &mut rng).unwrap();
        assert_eq!(out.len(), 200);
        assert_eq!(out[0].location_id, "LOC_0000");
        assert_eq!(out[199].location_id, "LOC_0199");
        for r in &out {
            assert!(r.validate().is_ok(), "{r:?}");
            assert!((-84.0..-82.0).contains(&r.longitude));
            assert!((35.0..37.0).contains(&r.latitude));
        }
    }

    #[test]
    fn low_scores_dominate() {
        let cfg = VulnerabilityConfig::new().with_n_locations(5000);
        let mut rng = StdRng::seed_from_u64(11);
        let out = synthetic_vulnerability(&cfg, &mut rng).unwrap();
        let low = out.iter().filter(|r| r.vulnerability_score <= 4).count();
        let high = out.iter().filter(|r| r.vulnerability_score >= 13).count();
        // Expected shares: 52% vs 5%
        assert!(low > high * 4, "low {low}, high {high}");
    }

    #[test]
    fn seeded_runs_match() {
        let cfg = VulnerabilityConfig::new().with_n_locations(25);
        let a = synthetic_vulnerability(&cfg, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = synthetic_vulnerability(&cfg, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_locations() {
        let cfg = VulnerabilityConfig::new().with_n_locations(0);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(synthetic_vulnerability(&cfg, &mut rng).unwrap().is_empty());
    }
}
