//! Terminal output.
//!
//! Formatting lives here so the pipeline stays free of presentation concerns.

use crate::domain::{CityOutcome, Reading};

/// One progress line for a processed city.
pub fn format_outcome(outcome: &CityOutcome) -> String {
    match &outcome.reading {
        Reading::Included { temperature } => format!(
            "Adding item {} ({}) with woeid {} with temperature of {temperature:.7} to list",
            outcome.index,
            outcome.city.label(),
            outcome.woeid,
        ),
        Reading::Skipped { reason } => format!(
            "Skipping item {} ({}) with woeid {}: {reason}",
            outcome.index,
            outcome.city.label(),
            outcome.woeid,
        ),
    }
}

/// Final summary line.
pub fn format_summary(count: usize, average: f64) -> String {
    format!("The average temperature of the {count} largest cities is {average}")
}
