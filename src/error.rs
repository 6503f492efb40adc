//! Error handling for contest log scoring operations.
//!
//! Provides error types with context for log reading, ADIF format
//! problems, and grid-square resolution failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log not found at path: {path}")]
    LogNotFound { path: PathBuf },

    #[error("Invalid ADIF log in file: {path} - {reason}")]
    InvalidLog { path: PathBuf, reason: String },

    #[error("Invalid grid square '{grid}': {reason}")]
    InvalidGrid { grid: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScoreError>;
