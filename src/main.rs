use anyhow::Context;
use clap::Parser;
use gridscore::cli::Args;
use gridscore::processor::LogScorer;
use gridscore::report;
use std::process;

fn main() {
    if let Err(error) = run() {
        // Error occurred - print to stderr and exit with error code
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    let (run_report, stats) = LogScorer::new(&args.log_path)
        .run()
        .with_context(|| format!("failed to score log {}", args.log_path.display()))?;

    println!("{}", report::render(&run_report, &stats));
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gridscore={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
