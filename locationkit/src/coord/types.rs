//! Coordinate types and constants.

use thiserror::Error;

/// Northernmost latitude representable in Web Mercator.
pub const MAX_LAT: f64 = 85.05112878;

/// Southernmost latitude representable in Web Mercator.
pub const MIN_LAT: f64 = -85.05112878;

/// Westernmost longitude.
pub const MIN_LON: f64 = -180.0;

/// Easternmost longitude.
pub const MAX_LON: f64 = 180.0;

/// Lowest map tile zoom level.
pub const MIN_ZOOM: u8 = 0;

/// Highest map tile zoom level served by map resources.
pub const MAX_ZOOM: u8 = 22;

/// Errors from coordinate conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),

    #[error("Invalid zoom level: {0} (must be between {MIN_ZOOM} and {MAX_ZOOM})")]
    InvalidZoom(u8),
}

/// XYZ map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Column, 0 = west.
    pub x: u32,
    /// Row, 0 = north.
    pub y: u32,
    /// Zoom level.
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Number of tiles along one axis at this tile's zoom.
    pub fn tiles_per_axis(&self) -> u32 {
        1u32 << self.z
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Axis-aligned geographic rectangle, the shape of `FilterBBox` and
/// `RouteBBox` members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Reads the wire form `[min_lon, min_lat, max_lon, max_lat]`.
    ///
    /// Returns `None` unless the slice has exactly four values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [min_lon, min_lat, max_lon, max_lat] => {
                Some(Self::new(min_lon, min_lat, max_lon, max_lat))
            }
            _ => None,
        }
    }

    /// Wire form `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Whether a position lies inside the box, edges included.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon) && (self.min_lat..=self.max_lat).contains(&lat)
    }
}
