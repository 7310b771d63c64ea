//! Position helpers.
//!
//! Positions travel on the wire as `[longitude, latitude]` arrays and
//! bounding boxes as `[min_lon, min_lat, max_lon, max_lat]`. Map tiles are
//! addressed in the Web Mercator XYZ scheme used by `GetMapTile`.

mod types;

pub use types::{
    BoundingBox, CoordError, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
};

use std::f64::consts::PI;

/// Builds a wire position. Note the longitude comes first.
#[inline]
pub fn position(lon: f64, lat: f64) -> Vec<f64> {
    vec![lon, lat]
}

/// Converts geographic coordinates to the map tile containing them.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 22)
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let n = 2.0_f64.powi(zoom as i32);
    let last = (1u32 << zoom) - 1;

    // The east and south edges belong to the last column and row.
    let x = (((lon + 180.0) / 360.0 * n) as u32).min(last);

    let lat_rad = lat * PI / 180.0;
    let y = (((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32).min(last);

    Ok(TileCoord { x, y, z: zoom })
}

/// Converts a tile back to geographic coordinates.
///
/// Returns `(lat, lon)` of the tile's north-west corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileCoord) -> (f64, f64) {
    let n = 2.0_f64.powi(tile.z as i32);

    let lon = tile.x as f64 / n * 360.0 - 180.0;

    let y = tile.y as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let lat = lat_rad * 180.0 / PI;

    (lat, lon)
}
