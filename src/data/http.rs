//! Blocking HTTP GET.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::AppError;

/// Something that can turn a URL into a response body.
///
/// The pipeline only depends on this trait, which lets tests substitute
/// canned responses for the real endpoints.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher. With `timeout = None` a hung request blocks forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, AppError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().map_err(|source| AppError::Transport {
            url: url.to_string(),
            source,
        })?;

        // Non-2xx bodies are handed to the readers like any other response.
        let status = resp.status();
        if !status.is_success() {
            warn!(url, %status, "non-success status");
        }

        let body = resp.bytes().map_err(|source| AppError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!(url, bytes = body.len(), "response read");
        Ok(body.to_vec())
    }
}
