//! The acquisition-and-reduction pipeline:
//! city list -> coordinates -> (woeid -> temperature)* -> average
//!
//! Cities are visited strictly one after another, in list order. Any fatal
//! error stops the run and is returned to the caller. A missing temperature
//! only drops the city it belongs to.

use tracing::{debug, info};

use crate::data::{
    Fetch, extract_cities, read_temperature, resolve_location, search_url, weather_url,
};
use crate::domain::{CityOutcome, ObservationDate, Reading, RunConfig, TemperatureSeries};
use crate::error::AppError;
use crate::report::average;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub date: ObservationDate,
    pub outcomes: Vec<CityOutcome>,
    pub series: TemperatureSeries,
    pub average: f64,
}

/// Execute the full pipeline against `fetcher`.
///
/// `on_outcome` is called once per city as soon as its outcome is known, so
/// callers can report progress while later cities are still being fetched.
pub fn run_pipeline<F>(
    fetcher: &F,
    config: &RunConfig,
    date: ObservationDate,
    mut on_outcome: impl FnMut(&CityOutcome),
) -> Result<RunOutput, AppError>
where
    F: Fetch + ?Sized,
{
    let body = fetcher.get(&config.cities_url)?;
    let cities = extract_cities(&body, config.cities_limit)?;
    info!(count = cities.len(), %date, "processing cities");

    let mut series = TemperatureSeries::new();
    let mut outcomes = Vec::with_capacity(cities.len());

    for (i, city) in cities.into_iter().enumerate() {
        let matches = fetcher.get(&search_url(&config.search_url, city.coordinate))?;
        let woeid = resolve_location(&matches)?;
        debug!(city = %city.label(), %woeid, "resolved location");

        let readings = fetcher.get(&weather_url(&config.weather_url, woeid, date))?;
        let reading = match read_temperature(&readings) {
            Ok(temperature) => {
                series.push(temperature);
                Reading::Included { temperature }
            }
            Err(err) if err.is_recoverable() => {
                // The skip is already reported on stdout by the caller.
                info!(city = %city.label(), %woeid, "{err}");
                Reading::Skipped {
                    reason: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };

        let outcome = CityOutcome {
            index: i + 1,
            city,
            woeid,
            reading,
        };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let average = average(&series)?;
    info!(count = series.len(), average, "run complete");

    Ok(RunOutput {
        date,
        outcomes,
        series,
        average,
    })
}
