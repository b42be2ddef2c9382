//! CSV readers for externally supplied depth and vulnerability tables.
//!
//! Both readers are header-based: columns may appear in any order and extra
//! columns are ignored. Every invalid row is reported, not only the first.

use std::path::Path;

use floodrisk_depth::{DepthRecord, GeoPoint};
use floodrisk_risk::VulnerabilityRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::ValidationCollector;

#[derive(Debug, Deserialize)]
struct DepthRow {
    feature_id: String,
    depth_m: f64,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct VulnerabilityRow {
    location_id: String,
    longitude: f64,
    latitude: f64,
    svi_score: u8,
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::Reader::from_path(path)?)
}

fn position(row: &DepthRow) -> Result<Option<GeoPoint>, String> {
    match (row.longitude, row.latitude) {
        (None, None) => Ok(None),
        (Some(lon), Some(lat)) => GeoPoint::new(lon, lat).map(Some).map_err(|e| e.to_string()),
        _ => Err("longitude and latitude must be given together".to_string()),
    }
}

/// Read reach depths.
///
/// Required columns: `feature_id`, `depth_m`. Optional columns `longitude`
/// and `latitude` give the reach position; a row must fill both or neither.
/// Depth values are not range-checked here; classification rejects negative
/// or non-finite depths.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Csv`] if the header cannot be read.
/// - [`IoError::Validation`] listing every malformed row.
pub fn read_depth_csv(path: &Path) -> Result<Vec<DepthRecord>, IoError> {
    let mut rdr = open(path)?;
    let mut records = Vec::new();
    let mut errors = ValidationCollector::new();

    // Line 1 is the header.
    for (i, row) in rdr.deserialize::<DepthRow>().enumerate() {
        let line = i + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                errors.push_line(line, e);
                continue;
            }
        };
        match position(&row) {
            Ok(pos) => {
                let mut record = DepthRecord::new(row.feature_id, row.depth_m);
                record.position = pos;
                records.push(record);
            }
            Err(msg) => errors.push_line(line, format!("reach '{}': {msg}", row.feature_id)),
        }
    }
    errors.finish()?;

    let positioned = records.iter().filter(|r| r.position.is_some()).count();
    info!(
        path = %path.display(),
        rows = records.len(),
        positioned,
        "read depth table"
    );
    Ok(records)
}

/// Read vulnerability scores.
///
/// Required columns: `location_id`, `longitude`, `latitude`, `svi_score`.
/// Scores must lie in 1..=16 and coordinates must be valid WGS84 degrees.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Csv`] if the header cannot be read.
/// - [`IoError::Validation`] listing every malformed or out-of-range row.
pub fn read_vulnerability_csv(path: &Path) -> Result<Vec<VulnerabilityRecord>, IoError> {
    let mut rdr = open(path)?;
    let mut records = Vec::new();
    let mut errors = ValidationCollector::new();

    for (i, row) in rdr.deserialize::<VulnerabilityRow>().enumerate() {
        let line = i + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                errors.push_line(line, e);
                continue;
            }
        };
        let record =
            VulnerabilityRecord::new(row.location_id, row.longitude, row.latitude, row.svi_score);
        match record.validate() {
            Ok(()) => records.push(record),
            Err(e) => errors.push_line(line, e),
        }
    }
    errors.finish()?;

    debug!(rows = records.len(), "vulnerability rows validated");
    info!(path = %path.display(), rows = records.len(), "read vulnerability table");
    Ok(records)
}
