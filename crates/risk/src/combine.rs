//! Coupling flood severity with social vulnerability.

use floodrisk_depth::ClassifiedDepthRecord;
use tracing::{debug, info};

use crate::error::RiskError;
use crate::pairing::{Pairer, Pairing};
use crate::record::{CoupledRiskRecord, VulnerabilityRecord};

/// Pair each flooded reach with a vulnerability record and compute its
/// coupled value `severity_class × vulnerability_score`.
///
/// Reaches with severity class 0 are dropped. Output order follows the
/// flooded reaches in input order; `risk_level` is left unset.
///
/// # Errors
///
/// - [`RiskError::InvalidScore`] / [`RiskError::InvalidInput`] if any
///   vulnerability record is malformed.
/// - [`RiskError::EmptyInput`] if there are flooded reaches but no
///   vulnerability records to pair them with.
/// - [`RiskError::InvalidInput`] if the pairing policy cannot resolve a
///   reach (missing position or key).
///
/// No flooded reaches is not an error: the result is empty.
pub fn combine(
    classified: &[ClassifiedDepthRecord],
    vulnerability: &[VulnerabilityRecord],
    pairing: &Pairing,
) -> Result<Vec<CoupledRiskRecord>, RiskError> {
    for v in vulnerability {
        v.validate()?;
    }

    let flooded: Vec<&ClassifiedDepthRecord> =
        classified.iter().filter(|r| r.is_flooded()).collect();

    if flooded.is_empty() {
        info!(
            n_reaches = classified.len(),
            "no flooded reaches, nothing to couple"
        );
        return Ok(Vec::new());
    }
    if vulnerability.is_empty() {
        return Err(RiskError::EmptyInput {
            reason: format!(
                "{} flooded reach(es) but no vulnerability records to pair with",
                flooded.len()
            ),
        });
    }

    let pairer = Pairer::new(pairing, vulnerability)?;

    let mut coupled = Vec::with_capacity(flooded.len());
    for (ordinal, reach) in flooded.into_iter().enumerate() {
        let paired = &vulnerability[pairer.select(ordinal, reach)?];
        coupled.push(CoupledRiskRecord {
            reach_id: reach.reach_id.clone(),
            depth_m: reach.depth_m,
            severity_class: reach.severity_class,
            severity_name: reach.severity_name.clone(),
            location_id: paired.location_id.clone(),
            vulnerability_score: paired.vulnerability_score,
            coupled_value: f64::from(reach.severity_class) * f64::from(paired.vulnerability_score),
            risk_level: None,
        });
    }

    debug!(
        pairing = pairing.name(),
        n_coupled = coupled.len(),
        n_locations = vulnerability.len(),
        "coupled flooded reaches with vulnerability"
    );

    Ok(coupled)
}
