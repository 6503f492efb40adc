//! Shared constants for grid resolution and contest scoring.

/// Prefix marking an unset grid square in WSJT-X style logs.
pub const SENTINEL_GRID: &str = "ZZ00";

/// Mean Earth radius in kilometers, as used for haversine distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Points awarded for making any contact at all.
pub const BASE_POINTS: u32 = 1;

/// Distance step that earns one additional point once started.
pub const KM_PER_POINT_STEP: f64 = 500.0;
