//! CSV and JSON writers for pipeline tables.

use std::path::Path;

use floodrisk_depth::{ClassifiedDepthRecord, GeoPoint};
use floodrisk_risk::{CoupledRiskRecord, RiskLevel, RiskStatistics, VulnerabilityRecord};
use floodrisk_sources::DischargeRecord;
use serde::Serialize;
use tracing::info;

use crate::error::IoError;

#[derive(Serialize)]
struct DischargeRow<'a> {
    feature_id: &'a str,
    discharge: f64,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

#[derive(Serialize)]
struct DepthRow<'a> {
    feature_id: &'a str,
    depth_m: f64,
    severity_class: u8,
    severity_name: &'a str,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

#[derive(Serialize)]
struct VulnerabilityRow<'a> {
    location_id: &'a str,
    longitude: f64,
    latitude: f64,
    svi_score: u8,
}

#[derive(Serialize)]
struct RiskRow<'a> {
    feature_id: &'a str,
    depth_m: f64,
    severity_class: u8,
    depth_severity: &'a str,
    location_id: &'a str,
    svi_score: u8,
    coupled_risk_value: f64,
    risk_level: u8,
    risk_name: &'a str,
}

/// Statistics document: the nested maps plus one flat count/percentage pair
/// per level.
#[derive(Serialize)]
struct StatisticsDocument<'a> {
    #[serde(flatten)]
    stats: &'a RiskStatistics,
    low_risk_count: usize,
    moderate_risk_count: usize,
    high_risk_count: usize,
    very_high_risk_count: usize,
    low_risk_pct: f64,
    moderate_risk_pct: f64,
    high_risk_pct: f64,
    very_high_risk_pct: f64,
}

fn lon_lat(p: Option<GeoPoint>) -> (Option<f64>, Option<f64>) {
    match p {
        Some(p) => (Some(p.longitude()), Some(p.latitude())),
        None => (None, None),
    }
}

fn write_rows<T: Serialize>(
    path: &Path,
    rows: impl IntoIterator<Item = T>,
) -> Result<usize, IoError> {
    let mut wtr = csv::Writer::from_path(path)?;
    let mut n = 0;
    for row in rows {
        wtr.serialize(row)?;
        n += 1;
    }
    wtr.flush().map_err(|e| IoError::io(path, e))?;
    Ok(n)
}

/// Write peak discharge per reach.
///
/// Columns: `feature_id, discharge, longitude, latitude` (coordinates empty
/// when the reach has no position).
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if the file cannot be written.
pub fn write_discharge_csv(path: &Path, records: &[DischargeRecord]) -> Result<(), IoError> {
    let n = write_rows(
        path,
        records.iter().map(|r| {
            let (longitude, latitude) = lon_lat(r.position);
            DischargeRow {
                feature_id: &r.reach_id,
                discharge: r.discharge_m3s,
                longitude,
                latitude,
            }
        }),
    )?;
    info!(path = %path.display(), rows = n, "wrote discharge table");
    Ok(())
}

/// Write classified depths.
///
/// Columns: `feature_id, depth_m, severity_class, severity_name, longitude,
/// latitude`. The file can be read back with
/// [`read_depth_csv`](crate::read_depth_csv).
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if the file cannot be written.
pub fn write_depth_csv(path: &Path, records: &[ClassifiedDepthRecord]) -> Result<(), IoError> {
    let n = write_rows(
        path,
        records.iter().map(|r| {
            let (longitude, latitude) = lon_lat(r.position);
            DepthRow {
                feature_id: &r.reach_id,
                depth_m: r.depth_m,
                severity_class: r.severity_class,
                severity_name: &r.severity_name,
                longitude,
                latitude,
            }
        }),
    )?;
    info!(path = %path.display(), rows = n, "wrote depth map");
    Ok(())
}

/// Write vulnerability scores.
///
/// Columns: `location_id, longitude, latitude, svi_score`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if the file cannot be written.
pub fn write_vulnerability_csv(
    path: &Path,
    records: &[VulnerabilityRecord],
) -> Result<(), IoError> {
    let n = write_rows(
        path,
        records.iter().map(|r| VulnerabilityRow {
            location_id: &r.location_id,
            longitude: r.longitude,
            latitude: r.latitude,
            svi_score: r.vulnerability_score,
        }),
    )?;
    info!(path = %path.display(), rows = n, "wrote vulnerability table");
    Ok(())
}

/// Write the coupled risk map.
///
/// Columns: `feature_id, depth_m, severity_class, depth_severity,
/// location_id, svi_score, coupled_risk_value, risk_level, risk_name`.
/// Records without a level are written with `risk_level` 0 and an empty name.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if the file cannot be written.
pub fn write_risk_csv(path: &Path, records: &[CoupledRiskRecord]) -> Result<(), IoError> {
    let n = write_rows(
        path,
        records.iter().map(|r| RiskRow {
            feature_id: &r.reach_id,
            depth_m: r.depth_m,
            severity_class: r.severity_class,
            depth_severity: &r.severity_name,
            location_id: &r.location_id,
            svi_score: r.vulnerability_score,
            coupled_risk_value: r.coupled_value,
            risk_level: r.risk_level_number(),
            risk_name: r.risk_name().unwrap_or(""),
        }),
    )?;
    info!(path = %path.display(), rows = n, "wrote risk map");
    Ok(())
}

/// Write risk statistics as pretty-printed JSON.
///
/// Besides `total_locations`, `count_by_level` and `pct_by_level` the
/// document carries flat `low_risk_count` … `very_high_risk_pct` fields.
///
/// # Errors
///
/// Returns [`IoError::Json`] on serialization failure or [`IoError::Io`] if
/// the file cannot be written.
pub fn write_statistics_json(path: &Path, stats: &RiskStatistics) -> Result<(), IoError> {
    let doc = StatisticsDocument {
        stats,
        low_risk_count: stats.count(RiskLevel::Low),
        moderate_risk_count: stats.count(RiskLevel::Moderate),
        high_risk_count: stats.count(RiskLevel::High),
        very_high_risk_count: stats.count(RiskLevel::VeryHigh),
        low_risk_pct: stats.pct(RiskLevel::Low),
        moderate_risk_pct: stats.pct(RiskLevel::Moderate),
        high_risk_pct: stats.pct(RiskLevel::High),
        very_high_risk_pct: stats.pct(RiskLevel::VeryHigh),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, json).map_err(|e| IoError::io(path, e))?;
    info!(
        path = %path.display(),
        total = stats.total_locations,
        "wrote risk statistics"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lon_lat_splits_point() {
        let p = GeoPoint::new(-83.25, 35.5).unwrap();
        assert_eq!(lon_lat(Some(p)), (Some(-83.25), Some(35.5)));
        assert_eq!(lon_lat(None), (None, None));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("d.csv");
        let err = write_discharge_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, IoError::Csv { .. } | IoError::Io { .. }));
    }

    #[test]
    fn statistics_document_has_flat_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        write_statistics_json(&path, &RiskStatistics::empty()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_locations"], 0);
        assert_eq!(value["very_high_risk_count"], 0);
        assert_eq!(value["low_risk_pct"], 0.0);
        assert_eq!(value["count_by_level"]["4"], 0);
    }
}
