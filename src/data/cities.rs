//! City-list parsing.
//!
//! The list is a JSON array of records. Only the first `limit` records are
//! looked at; each of those must carry numeric `latitude` and `longitude`.
//! A malformed record is a data-integrity fault and aborts the run.

use serde_json::Value;

use crate::domain::{City, Coordinate};
use crate::error::AppError;

const WHAT: &str = "city list";

/// Parse the first `limit` city records, in source order.
pub fn extract_cities(body: &[u8], limit: usize) -> Result<Vec<City>, AppError> {
    let records: Vec<Value> =
        serde_json::from_slice(body).map_err(|source| AppError::Parse { what: WHAT, source })?;

    records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| {
            let coordinate = Coordinate {
                latitude: numeric_field(record, "latitude", i)?,
                longitude: numeric_field(record, "longitude", i)?,
            };
            Ok(City {
                name: text_field(record, "city"),
                state: text_field(record, "state"),
                coordinate,
            })
        })
        .collect()
}

/// Coordinates of the first `limit` city records, in source order.
pub fn extract_coordinates(body: &[u8], limit: usize) -> Result<Vec<Coordinate>, AppError> {
    Ok(extract_cities(body, limit)?
        .into_iter()
        .map(|c| c.coordinate)
        .collect())
}

fn numeric_field(record: &Value, key: &str, index: usize) -> Result<f64, AppError> {
    match record.get(key) {
        Some(v) => v.as_f64().ok_or_else(|| {
            AppError::data(WHAT, format!("record {index} has non-numeric {key}: {v}"))
        }),
        None => Err(AppError::data(WHAT, format!("record {index} has no {key}"))),
    }
}

fn text_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
