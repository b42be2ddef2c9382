//! Core assessment shared by the `run` and `assess` commands.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use floodrisk_depth::{
    ClassifiedDepthRecord, DepthClassTable, DepthRecord, classify, severity_distribution,
};
use floodrisk_io::{OutputLayout, write_depth_csv, write_risk_csv, write_statistics_json};
use floodrisk_risk::{
    CoupledRiskRecord, Pairing, RiskLevel, RiskStatistics, VulnerabilityRecord, assign_levels,
    combine, summarize,
};

use crate::config::FloodRiskConfig;

/// Read and parse a TOML config file.
///
/// A missing file yields the defaults when `allow_missing` is set.
pub fn load_config(path: &Path, allow_missing: bool) -> Result<FloodRiskConfig> {
    if allow_missing && !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return toml::from_str("").context("failed to build default config");
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Output of one assessment.
pub struct Assessment {
    pub classified: Vec<ClassifiedDepthRecord>,
    pub risk: Vec<CoupledRiskRecord>,
    pub stats: RiskStatistics,
}

/// Nearest pairing needs a position on every flooded reach. Without one,
/// only an explicitly configured fallback may take its place.
fn effective_pairing(
    pairing: &Pairing,
    fallback: Option<&Pairing>,
    classified: &[ClassifiedDepthRecord],
) -> Result<Pairing> {
    let unplaced = classified
        .iter()
        .filter(|r| r.is_flooded() && r.position.is_none())
        .count();
    if *pairing != Pairing::Nearest || unplaced == 0 {
        return Ok(pairing.clone());
    }
    match fallback {
        Some(f) => {
            warn!(
                unplaced,
                fallback = f.name(),
                "flooded reaches without positions, using configured fallback pairing"
            );
            Ok(f.clone())
        }
        None => bail!(
            "{unplaced} flooded reach(es) have no position for nearest pairing; \
             add coordinates or set [pairing].fallback"
        ),
    }
}

/// Classify depths, pair flooded reaches with vulnerability, assign risk
/// levels and summarize.
pub fn assess(
    depths: &[DepthRecord],
    vulnerability: &[VulnerabilityRecord],
    table: &DepthClassTable,
    pairing: &Pairing,
    fallback: Option<&Pairing>,
) -> Result<Assessment> {
    let classified = classify(depths, table).context("depth classification failed")?;
    for (name, count) in severity_distribution(&classified) {
        info!(name = %name, count, "severity class");
    }

    let pairing = effective_pairing(pairing, fallback, &classified)?;
    info!(pairing = pairing.name(), "combining depth severity and vulnerability");
    let coupled =
        combine(&classified, vulnerability, &pairing).context("risk combination failed")?;

    if coupled.is_empty() {
        warn!("no flooded reaches, risk map is empty");
        return Ok(Assessment {
            classified,
            risk: Vec::new(),
            stats: RiskStatistics::empty(),
        });
    }

    let risk = assign_levels(&coupled).context("risk level assignment failed")?;
    let stats = summarize(&risk).context("risk summary failed")?;
    info!(locations = stats.total_locations, "risk map generated");

    Ok(Assessment {
        classified,
        risk,
        stats,
    })
}

/// Write the depth map, risk map and statistics.
pub fn write_outputs(layout: &OutputLayout, assessment: &Assessment) -> Result<()> {
    let path = layout.depth_map_path();
    write_depth_csv(&path, &assessment.classified)
        .with_context(|| format!("failed to write depth map: {}", path.display()))?;

    let path = layout.risk_map_path();
    write_risk_csv(&path, &assessment.risk)
        .with_context(|| format!("failed to write risk map: {}", path.display()))?;

    let path = layout.statistics_path();
    write_statistics_json(&path, &assessment.stats)
        .with_context(|| format!("failed to write statistics: {}", path.display()))?;
    Ok(())
}

/// Per-level percentage lines for the terminal summary.
pub fn summary_lines(stats: &RiskStatistics) -> Vec<String> {
    RiskLevel::ALL
        .iter()
        .map(|&level| format!("  {}: {:.1}%", level.name(), stats.pct(level)))
        .collect()
}
