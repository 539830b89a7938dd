//! Shared domain types.
//!
//! These are short-lived values: each is created once during a run, consumed
//! by the next stage, and dropped. The outcome types are serializable so a run
//! can be exported as JSON.

use std::fmt;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AppError;

pub const DEFAULT_CITIES_URL: &str = "https://gist.githubusercontent.com/Miserlou/c5cd8364bf9b2420bb29/raw/2bf258763cdddd704f8ffd3ea9a3e81d25e2c6f6/cities.json";
pub const DEFAULT_SEARCH_URL: &str = "https://www.metaweather.com/api/location/search/";
pub const DEFAULT_WEATHER_URL: &str = "https://www.metaweather.com/api/location";

/// Number of cities processed when nothing else is configured.
pub const DEFAULT_CITIES_LIMIT: usize = 100;

/// A point on the globe, exactly as the city list reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One city-list record: its coordinate plus optional display fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: Option<String>,
    pub state: Option<String>,
    pub coordinate: Coordinate,
}

impl City {
    /// Human-readable label, falling back to the coordinate.
    pub fn label(&self) -> String {
        match (&self.name, &self.state) {
            (Some(name), Some(state)) => format!("{name}, {state}"),
            (Some(name), None) => name.clone(),
            _ => format!(
                "{:.4}, {:.4}",
                self.coordinate.latitude, self.coordinate.longitude
            ),
        }
    }
}

/// The calendar day whose readings are requested from the weather endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservationDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ObservationDate {
    /// Today's date on the local wall clock.
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }
}

impl From<NaiveDate> for ObservationDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Weather-service location handle ("woeid").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Successfully retrieved temperatures, in the order the cities were visited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemperatureSeries(Vec<f64>);

impl TemperatureSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for TemperatureSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// What happened to one city during the per-city loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityOutcome {
    /// 1-based position in the processed city list.
    pub index: usize,
    pub city: City,
    pub woeid: LocationId,
    #[serde(flatten)]
    pub reading: Reading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Reading {
    Included { temperature: f64 },
    Skipped { reason: String },
}

impl CityOutcome {
    pub fn temperature(&self) -> Option<f64> {
        match self.reading {
            Reading::Included { temperature } => Some(temperature),
            Reading::Skipped { .. } => None,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, environment variables, and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub cities_url: String,
    /// Location-search endpoint; `?lattlong=` is appended per query.
    pub search_url: String,
    /// Weather endpoint; `/{woeid}/{year}/{month}/{day}` is appended per query.
    pub weather_url: String,
    pub cities_limit: usize,
    /// `None` means requests may block indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cities_url: DEFAULT_CITIES_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            cities_limit: DEFAULT_CITIES_LIMIT,
            timeout: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cities_limit == 0 {
            return Err(AppError::config("City limit must be > 0."));
        }
        for (name, url) in [
            ("cities URL", &self.cities_url),
            ("search URL", &self.search_url),
            ("weather URL", &self.weather_url),
        ] {
            reqwest::Url::parse(url)
                .map_err(|e| AppError::config(format!("Invalid {name} '{url}': {e}")))?;
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(AppError::config("Timeout must be > 0 seconds."));
        }
        Ok(())
    }
}
