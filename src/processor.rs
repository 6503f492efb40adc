//! Sequential scoring run over a contest log.
//!
//! Orchestrates the per-record pipeline: missing-grid check, dupe check,
//! distance scoring, aggregation, and the per-QSO console line. One
//! Deduplicator/Aggregator pair is owned per run; there is no global
//! state to reset between runs.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::adif;
use crate::aggregate::Aggregator;
use crate::dedupe::Deduplicator;
use crate::error::Result;
use crate::locator;
use crate::models::{ContactRecord, RunReport, RunStats, ScoredContact};
use crate::scorer;

/// Outcome of processing a single log record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Credited and folded into the aggregates.
    Accepted(ScoredContact),
    /// Station already credited on this band.
    Duplicate,
    /// Peer grid square carries the unset sentinel.
    MissingGrid,
    /// A grid square was present but would not resolve.
    InvalidGrid { reason: String },
}

/// Scores one contest log, one record at a time.
pub struct LogScorer {
    log_path: PathBuf,
    dedupe: Deduplicator,
    aggregator: Aggregator,
    stats: RunStats,
}

impl LogScorer {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            dedupe: Deduplicator::new(),
            aggregator: Aggregator::new(),
            stats: RunStats::default(),
        }
    }

    /// Run the full log and return the finalized report with run counters.
    ///
    /// Per-record console lines go to stdout as records are processed.
    /// Only an unreadable or malformed log aborts the run; per-record
    /// problems skip that record and continue.
    pub fn run(mut self) -> Result<(RunReport, RunStats)> {
        let records = adif::read_log(&self.log_path)?;
        info!(
            "Read {} records from {}",
            records.len(),
            self.log_path.display()
        );

        for record in &records {
            let contact = record.to_contact();
            let outcome = self.process_record(&contact);
            println!("{}", console_line(&contact, &outcome));
        }

        let stats = self.stats;
        let report = self.aggregator.finalize();
        info!(
            "Run complete: {} unique QSOs, {} skipped, total score {}",
            report.unique_qsos,
            stats.skipped(),
            report.total_score
        );
        Ok((report, stats))
    }

    /// Validate, dedupe, score and aggregate one contact.
    ///
    /// Check order matches the contest pipeline: the missing-grid check
    /// and the dupe check both run before any resolution or scoring.
    pub fn process_record(&mut self, contact: &ContactRecord) -> RecordOutcome {
        self.stats.records_read += 1;

        if locator::is_sentinel(&contact.grid) {
            self.stats.missing_grid += 1;
            warn!(
                "Missing grid square for {} on {}",
                contact.callsign, contact.band
            );
            return RecordOutcome::MissingGrid;
        }

        if !self.dedupe.should_process(&contact.callsign, &contact.band) {
            self.stats.dupes += 1;
            warn!("{} already worked on {}", contact.callsign, contact.band);
            return RecordOutcome::Duplicate;
        }

        match scorer::score(&contact.my_grid, &contact.grid) {
            Ok((points, distance_km)) => {
                let scored = ScoredContact {
                    callsign: contact.callsign.clone(),
                    band: contact.band.clone(),
                    distance_km,
                    points,
                };
                self.dedupe.mark_processed(&contact.callsign, &contact.band);
                self.aggregator.record(scored.clone());
                self.stats.accepted += 1;
                debug!(
                    "Accepted {} on {}: {:.1} km",
                    scored.callsign, scored.band, scored.distance_km
                );
                RecordOutcome::Accepted(scored)
            }
            // A malformed, non-sentinel grid skips the record rather than
            // aborting the run, matching the missing-grid policy.
            Err(err) => {
                self.stats.invalid_grid += 1;
                warn!(
                    "Skipping {} on {}: {}",
                    contact.callsign, contact.band, err
                );
                RecordOutcome::InvalidGrid {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Counters so far; final values come back from [`LogScorer::run`].
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Unique (callsign, band) pairs credited so far.
    pub fn unique_count(&self) -> usize {
        self.dedupe.unique_count()
    }
}

/// Per-record console line for an outcome.
pub fn console_line(contact: &ContactRecord, outcome: &RecordOutcome) -> String {
    match outcome {
        RecordOutcome::Accepted(scored) => format!(
            "{}: {}, {}, {:.0} km, {} points",
            scored.callsign, scored.band, contact.grid, scored.distance_km, scored.points
        ),
        RecordOutcome::Duplicate => {
            format!("{}: DUPE on {}", contact.callsign, contact.band)
        }
        RecordOutcome::MissingGrid => format!(
            "Missing GRIDSQUARE for {} on {}, skipping QSO!",
            contact.callsign, contact.band
        ),
        RecordOutcome::InvalidGrid { reason } => format!(
            "Bad grid square for {} on {}, skipping QSO! ({})",
            contact.callsign, contact.band, reason
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(callsign: &str, band: &str, my_grid: &str, grid: &str) -> ContactRecord {
        ContactRecord {
            callsign: callsign.to_string(),
            band: band.to_string(),
            my_grid: my_grid.to_string(),
            grid: grid.to_string(),
        }
    }

    fn scorer_for_test() -> LogScorer {
        LogScorer::new("unused.adi")
    }

    #[test]
    fn test_accepts_and_scores_contact() {
        let mut scorer = scorer_for_test();
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));

        match outcome {
            RecordOutcome::Accepted(scored) => {
                assert_eq!(scored.callsign, "K1ABC");
                assert_eq!(scored.points, 6);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(scorer.stats().accepted, 1);
        assert_eq!(scorer.unique_count(), 1);
    }

    #[test]
    fn test_same_pair_twice_is_dupe() {
        let mut scorer = scorer_for_test();
        scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));

        assert_eq!(outcome, RecordOutcome::Duplicate);
        assert_eq!(scorer.stats().dupes, 1);
        assert_eq!(scorer.unique_count(), 1);
    }

    #[test]
    fn test_same_call_on_other_band_is_credited() {
        let mut scorer = scorer_for_test();
        scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));
        let outcome = scorer.process_record(&contact("K1ABC", "40m", "EM12", "FN31"));

        assert!(matches!(outcome, RecordOutcome::Accepted(_)));
        assert_eq!(scorer.unique_count(), 2);
    }

    #[test]
    fn test_sentinel_grid_is_skipped_before_scoring() {
        let mut scorer = scorer_for_test();
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "EM12", "ZZ00"));

        assert_eq!(outcome, RecordOutcome::MissingGrid);
        assert_eq!(scorer.stats().missing_grid, 1);
        assert_eq!(scorer.stats().accepted, 0);
        assert_eq!(scorer.unique_count(), 0);
    }

    #[test]
    fn test_sentinel_repeat_counts_missing_not_dupe() {
        // The grid check runs first, so a repeated sentinel record is
        // never reported as a dupe.
        let mut scorer = scorer_for_test();
        scorer.process_record(&contact("K1ABC", "20m", "EM12", "ZZ00"));
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "EM12", "ZZ00"));

        assert_eq!(outcome, RecordOutcome::MissingGrid);
        assert_eq!(scorer.stats().missing_grid, 2);
        assert_eq!(scorer.stats().dupes, 0);
    }

    #[test]
    fn test_malformed_grid_soft_skips() {
        let mut scorer = scorer_for_test();
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "EM12", "99XX"));

        assert!(matches!(outcome, RecordOutcome::InvalidGrid { .. }));
        assert_eq!(scorer.stats().invalid_grid, 1);
        assert_eq!(scorer.stats().accepted, 0);
        // The pair stays creditable if a later record carries a good grid.
        assert_eq!(scorer.unique_count(), 0);
    }

    #[test]
    fn test_malformed_own_grid_soft_skips() {
        let mut scorer = scorer_for_test();
        let outcome = scorer.process_record(&contact("K1ABC", "20m", "ZZ00", "FN31"));

        assert!(matches!(outcome, RecordOutcome::InvalidGrid { .. }));
        assert_eq!(scorer.stats().invalid_grid, 1);
    }

    #[test]
    fn test_console_lines() {
        let rec = contact("K1ABC", "20m", "EM12", "FN31");

        let accepted = RecordOutcome::Accepted(ScoredContact {
            callsign: "K1ABC".to_string(),
            band: "20m".to_string(),
            distance_km: 2344.3,
            points: 6,
        });
        assert_eq!(
            console_line(&rec, &accepted),
            "K1ABC: 20m, FN31, 2344 km, 6 points"
        );
        assert_eq!(console_line(&rec, &RecordOutcome::Duplicate), "K1ABC: DUPE on 20m");
        assert_eq!(
            console_line(&rec, &RecordOutcome::MissingGrid),
            "Missing GRIDSQUARE for K1ABC on 20m, skipping QSO!"
        );
    }

    #[test]
    fn test_stats_partition_records() {
        let mut scorer = scorer_for_test();
        scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));
        scorer.process_record(&contact("K1ABC", "20m", "EM12", "FN31"));
        scorer.process_record(&contact("W5XYZ", "40m", "EM12", "ZZ00"));
        scorer.process_record(&contact("G0AAA", "40m", "EM12", "bogus!"));

        let stats = scorer.stats();
        assert_eq!(stats.records_read, 4);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.skipped(), 3);
        assert_eq!(stats.records_read - stats.accepted, stats.skipped());
    }
}
