//! Worked-station tracking for dupe detection.
//!
//! Contest rules credit a station once per band for the entire run,
//! regardless of mode. The first (callsign, band) occurrence is credited;
//! every later occurrence of the same pair is a dupe.

use std::collections::HashSet;

/// Tracks which (callsign, band) pairs have already been credited.
///
/// One instance is owned per scoring run; there is no process-global
/// state to reset between runs.
#[derive(Debug, Default)]
pub struct Deduplicator {
    worked: HashSet<(String, String)>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the (callsign, band) pair has not yet been credited.
    pub fn should_process(&self, callsign: &str, band: &str) -> bool {
        !self
            .worked
            .contains(&(callsign.to_string(), band.to_string()))
    }

    /// Record a credited pair so later occurrences are flagged as dupes.
    pub fn mark_processed(&mut self, callsign: &str, band: &str) {
        self.worked.insert((callsign.to_string(), band.to_string()));
    }

    /// Number of unique (callsign, band) pairs credited so far.
    pub fn unique_count(&self) -> usize {
        self.worked.len()
    }
}
