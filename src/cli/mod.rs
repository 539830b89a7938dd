//! Command-line parsing.
//!
//! Every option can also come from the environment (or a `.env` file), so the
//! binary runs with no flags at all against the default endpoints.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::{
    DEFAULT_CITIES_LIMIT, DEFAULT_CITIES_URL, DEFAULT_SEARCH_URL, DEFAULT_WEATHER_URL,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "avgtemp",
    version,
    about = "Average current temperature across the largest US cities"
)]
pub struct Cli {
    /// Number of cities (from the top of the list) to process.
    #[arg(short = 'n', long, env = "AVGTEMP_CITIES_LIMIT", default_value_t = DEFAULT_CITIES_LIMIT)]
    pub limit: usize,

    /// City list endpoint (JSON array with `latitude`/`longitude`).
    #[arg(long, env = "AVGTEMP_CITIES_URL", default_value = DEFAULT_CITIES_URL)]
    pub cities_url: String,

    /// Location search endpoint; `?lattlong=LAT,LON` is appended.
    #[arg(long, env = "AVGTEMP_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Weather endpoint; `/WOEID/YEAR/MONTH/DAY` is appended.
    #[arg(long, env = "AVGTEMP_WEATHER_URL", default_value = DEFAULT_WEATHER_URL)]
    pub weather_url: String,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long, env = "AVGTEMP_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Write the run record (per-city outcomes + average) to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
