//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - city inputs (`Coordinate`, `City`)
//! - per-run values (`ObservationDate`, `LocationId`, `TemperatureSeries`)
//! - run configuration and per-city outcomes (`RunConfig`, `CityOutcome`)

pub mod types;

pub use types::*;
