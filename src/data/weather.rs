//! Location + date → latest temperature.
//!
//! Readings come back newest first, so element 0 is the current temperature.
//! A reading without a temperature is recoverable: the caller drops that city.

use serde_json::Value;

use crate::domain::{LocationId, ObservationDate};
use crate::error::AppError;

const WHAT: &str = "weather response";

/// Build the weather URL for a location on a given day.
pub fn weather_url(base: &str, woeid: LocationId, date: ObservationDate) -> String {
    format!(
        "{}/{woeid}/{}/{}/{}",
        base.trim_end_matches('/'),
        date.year,
        date.month,
        date.day
    )
}

/// Read `the_temp` of the first reading.
///
/// Returns [`AppError::MissingTemperature`] when the value is null, absent,
/// or non-numeric, and when there are no readings at all. A well-formed body
/// that is not an array (e.g. `{"detail": "Not found."}` for an unknown
/// woeid) counts as no readings.
pub fn read_temperature(body: &[u8]) -> Result<f64, AppError> {
    let parsed: Value =
        serde_json::from_slice(body).map_err(|source| AppError::Parse { what: WHAT, source })?;

    let Some(latest) = parsed.as_array().and_then(|readings| readings.first()) else {
        return Err(AppError::missing_temperature("no readings"));
    };

    match latest.get("the_temp") {
        None => Err(AppError::missing_temperature("the_temp is absent")),
        Some(Value::Null) => Err(AppError::missing_temperature("the_temp is null")),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| AppError::missing_temperature(format!("the_temp is not a number: {v}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exact_temperature() {
        let cases: [(&str, f64); 3] = [
            (
                r#"[{"id": 429009, "the_temp": 27.67, "wind_speed": 9.2608902}]"#,
                27.67,
            ),
            (
                r#"[{"id": 429009, "the_temp": 34.5, "wind_speed": 9.2608902}]"#,
                34.5,
            ),
            (r#"[{"the_temp": -3}]"#, -3.0),
        ];
        for (body, want) in cases {
            assert_eq!(read_temperature(body.as_bytes()).unwrap(), want);
        }
    }

    #[test]
    fn uses_first_reading_only() {
        let body = br#"[{"the_temp": 12.25}, {"the_temp": 99.0}]"#;
        assert_eq!(read_temperature(body).unwrap(), 12.25);
    }

    #[test]
    fn null_temperature_is_recoverable() {
        let body = br#"[{"id": 429009, "the_temp": null, "wind_speed": 9.2608902}]"#;
        let err = read_temperature(body).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("the_temp is null"));
    }

    #[test]
    fn absent_or_odd_temperature_is_recoverable() {
        for body in [
            &br#"[{"id": 429009}]"#[..],
            &br#"[]"#[..],
            &br#"[{"the_temp": "warm"}]"#[..],
        ] {
            let err = read_temperature(body).unwrap_err();
            assert!(err.is_recoverable(), "expected recoverable error, got {err}");
        }
    }

    #[test]
    fn not_found_object_is_recoverable() {
        let err = read_temperature(br#"{"detail": "Not found."}"#).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("no readings"));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let err = read_temperature(b"[{\"the_temp\": ").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn repeated_reads_agree() {
        let body = br#"[{"the_temp": 18.125}]"#;
        assert_eq!(read_temperature(body).unwrap(), read_temperature(body).unwrap());
    }

    #[test]
    fn weather_url_has_unpadded_date() {
        let date = ObservationDate {
            year: 2024,
            month: 3,
            day: 7,
        };
        assert_eq!(
            weather_url("https://www.metaweather.com/api/location", LocationId(2488853), date),
            "https://www.metaweather.com/api/location/2488853/2024/3/7"
        );
        assert_eq!(
            weather_url("http://localhost/api/location/", LocationId(1), date),
            "http://localhost/api/location/1/2024/3/7"
        );
    }
}
