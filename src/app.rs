//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the temperature pipeline against the live endpoints
//! - prints progress and the summary
//! - writes the optional export

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::data::HttpFetcher;
use crate::domain::{ObservationDate, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `avgtemp` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = run_config_from_args(&cli);
    config.validate()?;

    let fetcher = HttpFetcher::new(config.timeout)?;
    let date = ObservationDate::today();

    let run = pipeline::run_pipeline(&fetcher, &config, date, |outcome| {
        println!("{}", crate::report::format_outcome(outcome));
    })?;

    println!(
        "{}",
        crate::report::format_summary(run.series.len(), run.average)
    );

    if let Some(path) = &cli.export {
        crate::io::write_run_json(path, &run)?;
        tracing::info!(path = %path.display(), "wrote run record");
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        cities_url: cli.cities_url.clone(),
        search_url: cli.search_url.clone(),
        weather_url: cli.weather_url.clone(),
        cities_limit: cli.limit,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    }
}

/// Log to stderr so stdout carries only the report.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={default_level}", env!("CARGO_CRATE_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_mirrors_args() {
        let cli = Cli::try_parse_from([
            "avgtemp",
            "--limit",
            "2",
            "--cities-url",
            "http://localhost/cities.json",
            "--search-url",
            "http://localhost/search/",
            "--weather-url",
            "http://localhost/location",
            "--timeout-secs",
            "30",
        ])
        .unwrap();
        let config = run_config_from_args(&cli);

        assert_eq!(config.cities_limit, 2);
        assert_eq!(config.cities_url, "http://localhost/cities.json");
        assert_eq!(config.search_url, "http://localhost/search/");
        assert_eq!(config.weather_url, "http://localhost/location");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected_after_parsing() {
        let cli = Cli::try_parse_from(["avgtemp", "--limit", "0"]).unwrap();
        let err = run_config_from_args(&cli).validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
