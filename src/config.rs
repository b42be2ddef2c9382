use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level floodrisk configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloodRiskConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Study area metadata and extent.
    #[serde(default)]
    pub study_area: StudyAreaToml,

    /// Forecast metadata.
    #[serde(default)]
    pub nwm: NwmToml,

    /// Synthetic streamflow settings.
    #[serde(default)]
    pub discharge: DischargeToml,

    /// Discharge-to-depth rating curve.
    #[serde(default)]
    pub rating: RatingToml,

    /// Synthetic vulnerability settings.
    #[serde(default)]
    pub vulnerability: VulnerabilityToml,

    /// Custom depth classes; the FEMA table when absent.
    #[serde(default)]
    pub depth_classes: Option<Vec<DepthClassToml>>,

    /// Reach-to-location pairing.
    #[serde(default)]
    pub pairing: PairingToml,

    /// Output settings.
    #[serde(default)]
    pub io: IoToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudyAreaToml {
    #[serde(default = "default_huc_id")]
    pub huc_id: String,
    #[serde(default = "default_area_name")]
    pub name: String,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    #[serde(default = "default_bbox")]
    pub bbox: [f64; 4],
}

impl Default for StudyAreaToml {
    fn default() -> Self {
        Self {
            huc_id: default_huc_id(),
            name: default_area_name(),
            bbox: default_bbox(),
        }
    }
}

fn default_huc_id() -> String {
    "06010105".to_string()
}
fn default_area_name() -> String {
    "Upper French Broad".to_string()
}
fn default_bbox() -> [f64; 4] {
    [-84.0, 35.0, -82.0, 37.0]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NwmToml {
    #[serde(default = "default_forecast_range")]
    pub forecast_range: String,
    #[serde(default)]
    pub real_time_hour: u8,
}

impl Default for NwmToml {
    fn default() -> Self {
        Self {
            forecast_range: default_forecast_range(),
            real_time_hour: 0,
        }
    }
}

fn default_forecast_range() -> String {
    "short_range".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DischargeToml {
    #[serde(default = "default_n_reaches")]
    pub n_reaches: usize,
    #[serde(default = "default_n_flood_reaches")]
    pub n_flood_reaches: usize,
    #[serde(default = "default_log_mean")]
    pub log_mean: f64,
    #[serde(default = "default_log_sd")]
    pub log_sd: f64,
    #[serde(default = "default_flood_factor")]
    pub flood_factor: [f64; 2],
}

impl Default for DischargeToml {
    fn default() -> Self {
        Self {
            n_reaches: default_n_reaches(),
            n_flood_reaches: default_n_flood_reaches(),
            log_mean: default_log_mean(),
            log_sd: default_log_sd(),
            flood_factor: default_flood_factor(),
        }
    }
}

fn default_n_reaches() -> usize {
    150
}
fn default_n_flood_reaches() -> usize {
    15
}
fn default_log_mean() -> f64 {
    2.0
}
fn default_log_sd() -> f64 {
    1.5
}
fn default_flood_factor() -> [f64; 2] {
    [3.0, 8.0]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingToml {
    #[serde(default = "default_divisor")]
    pub divisor: f64,
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    #[serde(default = "default_max_depth_m")]
    pub max_depth_m: f64,
}

impl Default for RatingToml {
    fn default() -> Self {
        Self {
            divisor: default_divisor(),
            exponent: default_exponent(),
            max_depth_m: default_max_depth_m(),
        }
    }
}

fn default_divisor() -> f64 {
    50.0
}
fn default_exponent() -> f64 {
    0.4
}
fn default_max_depth_m() -> f64 {
    5.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VulnerabilityToml {
    #[serde(default = "default_n_locations")]
    pub n_locations: usize,
}

impl Default for VulnerabilityToml {
    fn default() -> Self {
        Self {
            n_locations: default_n_locations(),
        }
    }
}

fn default_n_locations() -> usize {
    200
}

/// One `[[depth_classes]]` entry. Omit `max` for an unbounded top class.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepthClassToml {
    pub name: String,
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairingToml {
    #[serde(default = "default_pairing_method")]
    pub method: String,
    /// `reach_id -> location_id`, only for the "keyed" method.
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
    /// Method used when "nearest" is configured but a flooded reach has no
    /// position. Unset means such a run fails.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl Default for PairingToml {
    fn default() -> Self {
        Self {
            method: default_pairing_method(),
            keys: BTreeMap::new(),
            fallback: None,
        }
    }
}

fn default_pairing_method() -> String {
    "nearest".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub results_dir: Option<PathBuf>,
    /// File-name stamp; today's `YYYYMMDD` when absent.
    #[serde(default)]
    pub stamp: Option<String>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            data_dir: None,
            output_dir: None,
            results_dir: None,
            stamp: None,
        }
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}
