//! Final report rendering.
//!
//! Pure formatting over the finalized aggregate state: overall totals,
//! shortest/longest QSO details, total distance, then a band-by-band
//! breakdown in ascending band order.

use colored::*;

use crate::models::{RunReport, RunStats, ScoredContact};

/// Render the end-of-run summary as display-ready text.
pub fn render(report: &RunReport, stats: &RunStats) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "Unique QSOs:".bright_cyan(),
        report.unique_qsos
    ));
    lines.push(format!(
        "{} {}",
        "Dupe/Skipped QSOs:".bright_cyan(),
        stats.skipped()
    ));
    lines.push(format!(
        "{} {}",
        "Total Score:".bright_cyan(),
        report.total_score.to_string().bright_white().bold()
    ));
    lines.push(format!(
        "{} {:.2}",
        "Average Score per QSO:".bright_cyan(),
        report.average_score
    ));

    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        "Shortest QSO:".bright_cyan(),
        qso_details(report.shortest.as_ref())
    ));
    lines.push(format!(
        "{} {}",
        "Longest QSO:".bright_cyan(),
        qso_details(report.longest.as_ref())
    ));
    lines.push(format!(
        "{} {:.0} km",
        "Total distance of all QSOs:".bright_cyan(),
        report.total_distance_km
    ));

    lines.push(String::new());
    lines.push("Band Breakdown".bright_green().bold().to_string());
    for (band, summary) in &report.bands {
        lines.push(format!(
            "Band {}: {} contact(s), {} total points, {:.2} points average",
            band,
            summary.contacts,
            summary.points,
            summary.average_points()
        ));
    }

    lines.join("\n")
}

fn qso_details(contact: Option<&ScoredContact>) -> String {
    match contact {
        Some(c) => format!(
            "{}, {}, {:.0} km, {} points",
            c.callsign, c.band, c.distance_km, c.points
        ),
        None => "none".to_string(),
    }
}
