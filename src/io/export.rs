//! Export a run record to JSON.
//!
//! The record is meant for downstream scripts: the date queried, every city's
//! outcome (included or skipped), and the resulting average.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::app::pipeline::RunOutput;
use crate::domain::{CityOutcome, ObservationDate};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    pub tool: &'static str,
    pub date: ObservationDate,
    pub cities_processed: usize,
    pub cities_included: usize,
    pub average: f64,
    pub cities: &'a [CityOutcome],
}

impl<'a> From<&'a RunOutput> for RunRecord<'a> {
    fn from(run: &'a RunOutput) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            date: run.date,
            cities_processed: run.outcomes.len(),
            cities_included: run.series.len(),
            average: run.average,
            cities: &run.outcomes,
        }
    }
}

/// Write the run record as pretty-printed JSON.
pub fn write_run_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let io_err = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    serde_json::to_writer_pretty(file, &RunRecord::from(run))
        .map_err(|e| io_err(std::io::Error::other(e)))?;
    Ok(())
}
