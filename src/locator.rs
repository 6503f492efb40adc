//! Maidenhead grid-square resolution.
//!
//! Resolves 2-8 character Maidenhead locators to the geographic center of
//! the encoded cell. Scoring always uses cell centers, not southwest
//! corners, so distances follow the contest's midpoint convention.

use tracing::debug;

use crate::constants::SENTINEL_GRID;
use crate::error::{Result, ScoreError};
use crate::models::GeoPoint;

/// Cell size in degrees (longitude, latitude) at each locator precision
/// level: field (A-R), square (0-9), subsquare (A-X), extended square (0-9).
const PAIR_SIZES: [(f64, f64); 4] = [
    (20.0, 10.0),
    (2.0, 1.0),
    (2.0 / 24.0, 1.0 / 24.0),
    (2.0 / 240.0, 1.0 / 240.0),
];

/// True when the grid carries the "unset" sentinel used by logging
/// software for QSOs where no grid was exchanged.
pub fn is_sentinel(grid: &str) -> bool {
    grid.trim().to_ascii_uppercase().starts_with(SENTINEL_GRID)
}

/// Resolve a Maidenhead locator to the center of its cell.
///
/// Accepts even lengths from 2 to 8 characters, case-insensitive.
/// Malformed codes return [`ScoreError::InvalidGrid`]; callers treat this
/// as a skip condition rather than a fatal error.
pub fn locate(grid: &str) -> Result<GeoPoint> {
    let code = grid.trim().to_ascii_uppercase();
    if code.is_empty() || code.len() % 2 != 0 || code.len() > 8 {
        return Err(invalid(grid, "locator must be 2, 4, 6 or 8 characters"));
    }

    let mut lon = -180.0_f64;
    let mut lat = -90.0_f64;
    let mut last_level = 0;

    for (level, pair) in code.as_bytes().chunks(2).enumerate() {
        let (lon_size, lat_size) = PAIR_SIZES[level];
        lon += pair_value(pair[0], level, grid)? as f64 * lon_size;
        lat += pair_value(pair[1], level, grid)? as f64 * lat_size;
        last_level = level;
    }

    // Shift from the southwest corner to the center of the smallest
    // encoded cell.
    let (lon_size, lat_size) = PAIR_SIZES[last_level];
    lon += lon_size / 2.0;
    lat += lat_size / 2.0;

    debug!("Resolved grid {} to ({:.5}, {:.5})", code, lat, lon);
    Ok(GeoPoint { lat, lon })
}

/// Decode one locator character at the given precision level.
fn pair_value(c: u8, level: usize, grid: &str) -> Result<u32> {
    let value = match level {
        0 => (b'A'..=b'R').contains(&c).then(|| (c - b'A') as u32),
        1 | 3 => c.is_ascii_digit().then(|| (c - b'0') as u32),
        2 => (b'A'..=b'X').contains(&c).then(|| (c - b'A') as u32),
        _ => None,
    };

    value.ok_or_else(|| {
        invalid(
            grid,
            format!("character '{}' not valid at position {}", c as char, level * 2 + 1),
        )
    })
}

fn invalid(grid: &str, reason: impl Into<String>) -> ScoreError {
    ScoreError::InvalidGrid {
        grid: grid.trim().to_string(),
        reason: reason.into(),
    }
}
