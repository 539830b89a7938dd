//! Error taxonomy for a run.
//!
//! Every variant except [`AppError::MissingTemperature`] ends the run: it is
//! propagated to `main`, printed, and mapped to a process exit code.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid CLI/env configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Connection failure or failure while reading a response body.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response body that is not valid JSON (or not the expected shape).
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON missing a field the run cannot continue without.
    #[error("Invalid {what}: {detail}")]
    Data { what: &'static str, detail: String },

    /// The weather reading for a location carries no usable temperature.
    #[error("failed to retrieve temperature ({reason}), omitting from temperature average")]
    MissingTemperature { reason: String },

    /// No city produced a temperature, so there is nothing to average.
    #[error("No temperatures were retrieved; the average is undefined.")]
    NoData,

    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn data(what: &'static str, detail: impl Into<String>) -> Self {
        Self::Data {
            what,
            detail: detail.into(),
        }
    }

    pub fn missing_temperature(reason: impl Into<String>) -> Self {
        Self::MissingTemperature {
            reason: reason.into(),
        }
    }

    /// Whether the pipeline may skip the current city and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingTemperature { .. })
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Parse { .. } | Self::Data { .. } | Self::MissingTemperature { .. } => 3,
            Self::Transport { .. } => 4,
            Self::NoData => 5,
            Self::Io { .. } => 6,
        }
    }
}
