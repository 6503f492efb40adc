//! Distance-based QSO scoring.
//!
//! Resolves both stations' grid squares, computes the short-path
//! great-circle distance between the cell centers, and applies the contest
//! formula: one base point plus one point for every started 500 km.

use tracing::debug;

use crate::constants::{BASE_POINTS, EARTH_RADIUS_KM, KM_PER_POINT_STEP};
use crate::error::Result;
use crate::locator;
use crate::models::GeoPoint;

/// Score a single QSO from the two stations' grid squares.
///
/// Returns the point value and the distance in kilometers. Either grid
/// failing to resolve propagates an invalid-grid error.
pub fn score(my_grid: &str, peer_grid: &str) -> Result<(u32, f64)> {
    let own = locator::locate(my_grid)?;
    let peer = locator::locate(peer_grid)?;

    let distance_km = haversine_km(own, peer);
    let points = points_for_distance(distance_km);

    debug!(
        "Scored {} -> {}: {:.1} km, {} points",
        my_grid, peer_grid, distance_km, points
    );
    Ok((points, distance_km))
}

/// Short-path great-circle distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // Clamp against rounding drift for near-antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Contest points for a QSO distance.
///
/// Ceiling, never ordinary rounding: exactly 500.0 km is one full step
/// (2 points total) while 500.01 km starts a second step (3 points). The
/// base point guarantees a same-grid contact still scores 1.
pub fn points_for_distance(distance_km: f64) -> u32 {
    BASE_POINTS + (distance_km / KM_PER_POINT_STEP).ceil() as u32
}
