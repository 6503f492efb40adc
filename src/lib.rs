//! Gridscore Library
//!
//! A Rust library for scoring amateur-radio contest logs where points are
//! based on Maidenhead grid-square distance.
//!
//! This library provides tools for:
//! - Reading ADIF (.adi) logs as exported by WSJT-X and similar loggers
//! - Resolving Maidenhead grid squares to cell-center coordinates
//! - Short-path great-circle scoring: 1 base point plus 1 per started 500 km
//! - Once-per-band deduplication regardless of mode
//! - Band summaries, run totals and shortest/longest QSO tracking
//! - Human-readable end-of-run reporting

pub mod adif;
pub mod aggregate;
pub mod cli;
pub mod constants;
pub mod dedupe;
pub mod error;
pub mod locator;
pub mod models;
pub mod processor;
pub mod report;
pub mod scorer;

// Re-export commonly used types
pub use error::{Result, ScoreError};
pub use models::{BandSummary, ContactRecord, GeoPoint, RunReport, RunStats, ScoredContact};
pub use processor::{LogScorer, RecordOutcome};
