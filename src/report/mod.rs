//! Reduction and reporting: the average and its terminal output.

pub mod format;

pub use format::{format_outcome, format_summary};

use crate::domain::TemperatureSeries;
use crate::error::AppError;

/// Arithmetic mean of the retrieved temperatures.
///
/// An empty series has no mean and yields [`AppError::NoData`].
pub fn average(series: &TemperatureSeries) -> Result<f64, AppError> {
    if series.is_empty() {
        return Err(AppError::NoData);
    }
    let sum: f64 = series.as_slice().iter().sum();
    Ok(sum / series.len() as f64)
}
