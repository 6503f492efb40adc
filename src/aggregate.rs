//! Running aggregation of scored contacts.
//!
//! Accumulates score and distance totals, lazily-created per-band
//! summaries, and shortest/longest extremes over one sequential run, then
//! finalizes into a [`RunReport`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{BandSummary, RunReport, ScoredContact};

/// Accumulates run totals one accepted contact at a time.
///
/// One instance is owned per scoring run and updated strictly
/// sequentially, so no locking discipline is needed.
#[derive(Debug, Default)]
pub struct Aggregator {
    accepted: u64,
    total_score: u64,
    total_distance_km: f64,
    shortest: Option<ScoredContact>,
    longest: Option<ScoredContact>,
    bands: BTreeMap<String, BandSummary>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted contact into the running state.
    ///
    /// The first contact seeds both extremes. Extremes only move on strict
    /// distance inequality, so ties keep the earliest-recorded contact.
    pub fn record(&mut self, contact: ScoredContact) {
        self.accepted += 1;
        self.total_score += u64::from(contact.points);
        self.total_distance_km += contact.distance_km;

        let summary = self.bands.entry(contact.band.clone()).or_default();
        summary.contacts += 1;
        summary.points += u64::from(contact.points);

        match &self.shortest {
            Some(current) if contact.distance_km >= current.distance_km => {}
            _ => self.shortest = Some(contact.clone()),
        }
        match &self.longest {
            Some(current) if contact.distance_km <= current.distance_km => {}
            _ => self.longest = Some(contact),
        }

        debug!(
            "Aggregated contact {}: running score {}",
            self.accepted, self.total_score
        );
    }

    /// Finalize the run into a report.
    ///
    /// Averages are defined as zero when nothing was accepted, so an empty
    /// log never divides by zero.
    pub fn finalize(self) -> RunReport {
        let average_score = if self.accepted == 0 {
            0.0
        } else {
            self.total_score as f64 / self.accepted as f64
        };

        RunReport {
            unique_qsos: self.accepted,
            total_score: self.total_score,
            average_score,
            total_distance_km: self.total_distance_km,
            shortest: self.shortest,
            longest: self.longest,
            bands: self.bands,
        }
    }
}
