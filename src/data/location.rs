//! Coordinate → location identifier.
//!
//! The search endpoint is assumed to return its best match first and to return
//! at least one match for any real coordinate, so anything else is fatal.

use serde_json::Value;

use crate::domain::{Coordinate, LocationId};
use crate::error::AppError;

const WHAT: &str = "location search response";

/// Build the search URL for a coordinate.
pub fn search_url(base: &str, coordinate: Coordinate) -> String {
    format!(
        "{base}?lattlong={:.6},{:.6}",
        coordinate.latitude, coordinate.longitude
    )
}

/// Read the `woeid` of the first search match.
///
/// Fractional identifiers are truncated toward zero.
pub fn resolve_location(body: &[u8]) -> Result<LocationId, AppError> {
    let matches: Vec<Value> =
        serde_json::from_slice(body).map_err(|source| AppError::Parse { what: WHAT, source })?;

    let first = matches
        .first()
        .ok_or_else(|| AppError::data(WHAT, "no matching locations"))?;

    let woeid = first
        .get("woeid")
        .ok_or_else(|| AppError::data(WHAT, "first match has no woeid"))?;

    if let Some(id) = woeid.as_i64() {
        return Ok(LocationId(id));
    }
    let value = woeid
        .as_f64()
        .ok_or_else(|| AppError::data(WHAT, format!("non-numeric woeid: {woeid}")))?;

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(AppError::data(WHAT, format!("woeid out of range: {woeid}")));
    }
    Ok(LocationId(truncated as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_woeid_of_first_match() {
        let body = br#"[
            {
                "distance": 1836,
                "title": "Santa Cruz",
                "location_type": "City",
                "woeid": 2488853,
                "latt_long": "36.974018,-122.030952"
            },
            {
                "distance": 40210,
                "title": "San Jose",
                "location_type": "City",
                "woeid": 2488042,
                "latt_long": "37.338581,-121.885567"
            }
        ]"#;
        assert_eq!(resolve_location(body).unwrap(), LocationId(2488853));
    }

    #[test]
    fn truncates_fractional_woeid() {
        assert_eq!(
            resolve_location(br#"[{"woeid": 2488853.9}]"#).unwrap(),
            LocationId(2488853)
        );
        assert_eq!(
            resolve_location(br#"[{"woeid": 2.488853e6}]"#).unwrap(),
            LocationId(2488853)
        );
    }

    #[test]
    fn empty_or_incomplete_results_are_fatal() {
        let err = resolve_location(b"[]").unwrap_err();
        assert!(matches!(err, AppError::Data { .. }));
        assert!(err.to_string().contains("no matching locations"));

        let err = resolve_location(br#"[{"title": "Santa Cruz"}]"#).unwrap_err();
        assert!(err.to_string().contains("no woeid"));

        let err = resolve_location(br#"[{"woeid": "2488853"}]"#).unwrap_err();
        assert!(err.to_string().contains("non-numeric woeid"));

        let err = resolve_location(b"<html>").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }

    #[test]
    fn out_of_range_woeid_is_fatal() {
        for body in [
            &br#"[{"woeid": 9223372036854775808}]"#[..],
            &br#"[{"woeid": 1e300}]"#[..],
            &br#"[{"woeid": -1e19}]"#[..],
        ] {
            let err = resolve_location(body).unwrap_err();
            assert!(matches!(err, AppError::Data { .. }));
            assert!(err.to_string().contains("out of range"), "{err}");
        }
    }

    #[test]
    fn search_url_uses_six_decimals() {
        let url = search_url(
            "https://www.metaweather.com/api/location/search/",
            Coordinate {
                latitude: 40.7127837,
                longitude: -74.0059413,
            },
        );
        assert_eq!(
            url,
            "https://www.metaweather.com/api/location/search/?lattlong=40.712784,-74.005941"
        );
    }
}
