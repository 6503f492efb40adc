//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridscore")]
#[command(about = "Score an amateur-radio contest log by grid-square distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the ADIF log to score (defaults to the WSJT-X log name)
    #[arg(value_name = "LOG_PATH", default_value = "wsjtx_log.adi")]
    pub log_path: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Tracing level implied by the flags.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "error" }
    }
}
