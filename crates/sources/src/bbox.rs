//! Study-area bounding box.

use floodrisk_depth::GeoPoint;
use rand::Rng;

use crate::error::SourceError;

/// Axis-aligned longitude/latitude box, `[min_lon, min_lat, max_lon, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl BoundingBox {
    /// Creates a validated box.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Configuration`] if a corner is not a valid
    /// coordinate or a side has zero or negative extent.
    pub fn new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<Self, SourceError> {
        for (lon, lat) in [(min_lon, min_lat), (max_lon, max_lat)] {
            GeoPoint::new(lon, lat).map_err(|e| SourceError::Configuration {
                reason: format!("bounding box corner: {e}"),
            })?;
        }
        if min_lon >= max_lon || min_lat >= max_lat {
            return Err(SourceError::Configuration {
                reason: format!(
                    "bounding box [{min_lon}, {min_lat}, {max_lon}, {max_lat}] has no extent"
                ),
            });
        }
        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// Builds a box from `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn from_array(b: [f64; 4]) -> Result<Self, SourceError> {
        Self::new(b[0], b[1], b[2], b[3])
    }

    /// Corners as `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Returns `true` if `p` lies inside the box (edges included).
    pub fn contains(&self, p: &GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.longitude())
            && (self.min_lat..=self.max_lat).contains(&p.latitude())
    }

    /// Draws a uniformly distributed longitude.
    pub(crate) fn sample_lon(&self, rng: &mut impl Rng) -> f64 {
        rng.random_range(self.min_lon..self.max_lon)
    }

    /// Draws a uniformly distributed latitude.
    pub(crate) fn sample_lat(&self, rng: &mut impl Rng) -> f64 {
        rng.random_range(self.min_lat..self.max_lat)
    }

    /// Draws a uniformly distributed point.
    pub(crate) fn sample_point(&self, rng: &mut impl Rng) -> Result<GeoPoint, SourceError> {
        let lon = self.sample_lon(rng);
        let lat = self.sample_lat(rng);
        GeoPoint::new(lon, lat).map_err(|e| SourceError::InvalidInput {
            reason: e.to_string(),
        })
    }
}

impl Default for BoundingBox {
    /// Western North Carolina / eastern Tennessee study area.
    fn default() -> Self {
        Self {
            min_lon: -84.0,
            min_lat: 35.0,
            max_lon: -82.0,
            max_lat: 37.0,
        }
    }
}
