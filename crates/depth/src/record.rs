//! Depth records before and after severity classification.

use crate::error::DepthError;

/// Mean Earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS84 longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Creates a validated point.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidPosition`] if either coordinate is
    /// non-finite, the longitude is outside `[-180, 180]` or the latitude is
    /// outside `[-90, 90]`.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DepthError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DepthError::InvalidPosition {
                reason: format!("longitude {longitude} outside [-180, 180]"),
            });
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DepthError::InvalidPosition {
                reason: format!("latitude {latitude} outside [-90, 90]"),
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_phi = phi2 - phi1;
        let d_lambda = (other.longitude - self.longitude).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}

/// Simulated maximum water depth for one river reach.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthRecord {
    /// Reach identifier (NWM `feature_id`).
    pub reach_id: String,
    /// Water depth in metres.
    pub depth_m: f64,
    /// Representative location of the reach, if known.
    pub position: Option<GeoPoint>,
}

impl DepthRecord {
    /// Creates a record without a position.
    pub fn new(reach_id: impl Into<String>, depth_m: f64) -> Self {
        Self {
            reach_id: reach_id.into(),
            depth_m,
            position: None,
        }
    }

    /// Attaches a reach position.
    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }
}

/// A [`DepthRecord`] annotated with its severity class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedDepthRecord {
    /// Reach identifier (NWM `feature_id`).
    pub reach_id: String,
    /// Water depth in metres.
    pub depth_m: f64,
    /// Representative location of the reach, if known.
    pub position: Option<GeoPoint>,
    /// Ordinal severity class; 0 means no flood impact.
    pub severity_class: u8,
    /// Human-readable class name ("None" for class 0).
    pub severity_name: String,
}

impl ClassifiedDepthRecord {
    /// Returns `true` if the reach falls into any flood class.
    pub fn is_flooded(&self) -> bool {
        self.severity_class > 0
    }
}
