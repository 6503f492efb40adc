//! Core data structures for contest log scoring.
//!
//! Defines the contact record, scored-contact and aggregate report types
//! used throughout the library.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single logged contact, as read from the ADIF log.
///
/// Absent callsign/band fields carry the `"ERROR"` label and absent grid
/// squares the unset-grid sentinel, so every record is representable.
/// Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub callsign: String,
    pub band: String,
    pub my_grid: String,
    pub grid: String,
}

/// Geographic point in decimal degrees. Always a grid-cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A contact that passed validation and deduplication and has been scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredContact {
    pub callsign: String,
    pub band: String,
    pub distance_km: f64,
    pub points: u32,
}

/// Per-band running totals, created lazily on the first contact for a band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSummary {
    pub contacts: u64,
    pub points: u64,
}

impl BandSummary {
    /// Average points per contact on this band, zero when empty.
    pub fn average_points(&self) -> f64 {
        if self.contacts == 0 {
            0.0
        } else {
            self.points as f64 / self.contacts as f64
        }
    }
}

/// Final aggregate state for a scoring run.
///
/// `bands` is a `BTreeMap` so iteration yields bands in the ascending
/// lexicographic order the report requires.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub unique_qsos: u64,
    pub total_score: u64,
    pub average_score: f64,
    pub total_distance_km: f64,
    pub shortest: Option<ScoredContact>,
    pub longest: Option<ScoredContact>,
    pub bands: BTreeMap<String, BandSummary>,
}

/// Record-level counters for a scoring run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Total number of records read from the log
    pub records_read: u64,

    /// Records accepted and scored
    pub accepted: u64,

    /// Records rejected as already worked on their band
    pub dupes: u64,

    /// Records rejected for an unset peer grid square
    pub missing_grid: u64,

    /// Records rejected for a malformed grid square
    pub invalid_grid: u64,
}

impl RunStats {
    /// Records excluded from all aggregates.
    pub fn skipped(&self) -> u64 {
        self.dupes + self.missing_grid + self.invalid_grid
    }
}
