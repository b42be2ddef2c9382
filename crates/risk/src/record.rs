//! Vulnerability input records and coupled risk output records.

use floodrisk_depth::GeoPoint;

use crate::error::RiskError;
use crate::level::RiskLevel;

/// Lowest valid social vulnerability score.
pub const MIN_VULNERABILITY_SCORE: u8 = 1;

/// Highest valid social vulnerability score (sum of the 16 SVI flags).
pub const MAX_VULNERABILITY_SCORE: u8 = 16;

/// Social vulnerability score at a point location.
#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilityRecord {
    /// Location identifier.
    pub location_id: String,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Vulnerability score in 1..=16; higher is more vulnerable.
    pub vulnerability_score: u8,
}

impl VulnerabilityRecord {
    /// Creates a record. Call [`validate`](Self::validate) before use.
    pub fn new(
        location_id: impl Into<String>,
        longitude: f64,
        latitude: f64,
        vulnerability_score: u8,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            longitude,
            latitude,
            vulnerability_score,
        }
    }

    /// The record's coordinates as a validated point.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if the coordinates are out of range.
    pub fn position(&self) -> Result<GeoPoint, RiskError> {
        GeoPoint::new(self.longitude, self.latitude).map_err(|e| RiskError::InvalidInput {
            reason: format!("location '{}': {e}", self.location_id),
        })
    }

    /// Checks the score range and coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidScore`] for a score outside 1..=16 and
    /// [`RiskError::InvalidInput`] for invalid coordinates.
    pub fn validate(&self) -> Result<(), RiskError> {
        if !(MIN_VULNERABILITY_SCORE..=MAX_VULNERABILITY_SCORE).contains(&self.vulnerability_score)
        {
            return Err(RiskError::InvalidScore {
                location_id: self.location_id.clone(),
                score: self.vulnerability_score,
            });
        }
        self.position()?;
        Ok(())
    }
}

/// A flooded reach paired with one vulnerability location.
#[derive(Debug, Clone, PartialEq)]
pub struct CoupledRiskRecord {
    /// Reach identifier.
    pub reach_id: String,
    /// Water depth in metres.
    pub depth_m: f64,
    /// Severity class of the reach (always > 0 here).
    pub severity_class: u8,
    /// Severity class name.
    pub severity_name: String,
    /// Paired vulnerability location.
    pub location_id: String,
    /// Score of the paired location.
    pub vulnerability_score: u8,
    /// `severity_class × vulnerability_score`.
    pub coupled_value: f64,
    /// Quartile risk level; `None` until [`assign_levels`](crate::assign_levels) runs.
    pub risk_level: Option<RiskLevel>,
}

impl CoupledRiskRecord {
    /// Risk level as a number, with 0 meaning unassigned.
    pub fn risk_level_number(&self) -> u8 {
        self.risk_level.map_or(0, RiskLevel::number)
    }

    /// Risk level name, if assigned.
    pub fn risk_name(&self) -> Option<&'static str> {
        self.risk_level.map(RiskLevel::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupled(level: Option<RiskLevel>) -> CoupledRiskRecord {
        CoupledRiskRecord {
            reach_id: "r".to_string(),
            depth_m: 1.0,
            severity_class: 3,
            severity_name: "High".to_string(),
            location_id: "LOC_0000".to_string(),
            vulnerability_score: 5,
            coupled_value: 15.0,
            risk_level: level,
        }
    }

    #[test]
    fn validate_ok() {
        assert!(
            VulnerabilityRecord::new("a", -83.0, 35.0, 1)
                .validate()
                .is_ok()
        );
        assert!(
            VulnerabilityRecord::new("a", -83.0, 35.0, 16)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn validate_score_range() {
        let zero = VulnerabilityRecord::new("a", -83.0, 35.0, 0).validate();
        assert!(matches!(zero, Err(RiskError::InvalidScore { score: 0, .. })));
        let high = VulnerabilityRecord::new("a", -83.0, 35.0, 17).validate();
        assert!(matches!(high, Err(RiskError::InvalidScore { score: 17, .. })));
    }

    #[test]
    fn validate_coordinates() {
        let bad = VulnerabilityRecord::new("x", f64::NAN, 35.0, 4).validate();
        match bad {
            Err(RiskError::InvalidInput { reason }) => assert!(reason.contains("location 'x'")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn risk_level_accessors() {
        assert_eq!(coupled(None).risk_level_number(), 0);
        assert_eq!(coupled(None).risk_name(), None);
        let leveled = coupled(Some(RiskLevel::High));
        assert_eq!(leveled.risk_level_number(), 3);
        assert_eq!(leveled.risk_name(), Some("High Risk"));
    }
}
