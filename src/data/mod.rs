//! Data acquisition: the HTTP fetcher and the three response readers.
//!
//! Each reader is a pure function of the response bytes, so the pipeline can
//! be exercised without a network.

pub mod cities;
pub mod http;
pub mod location;
pub mod weather;

pub use cities::{extract_cities, extract_coordinates};
pub use http::{Fetch, HttpFetcher};
pub use location::{resolve_location, search_url};
pub use weather::{read_temperature, weather_url};
