//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with user agent and timeouts
//! - GET requests for sitemap documents
//! - Error classification

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Failure while retrieving a sitemap document
///
/// None of these are retried; the harvester aborts the run on the first one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. } => url,
        }
    }

    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect { url, source: error }
        } else if let Some(status) = error.status() {
            Self::Status {
                url,
                status: status.as_u16(),
            }
        } else {
            Self::Request { url, source: error }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use sitemap_harvest::config::FetchConfig;
/// use sitemap_harvest::sitemap::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a document and returns its body as text
///
/// Redirects are followed by the client. Any status outside 2xx is an error.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Network failure, timeout, or non-success status
pub async fn fetch_document(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::classify(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::classify(url, e))?;

    tracing::trace!("Fetched {} ({} bytes)", url, body.len());

    Ok(body)
}
