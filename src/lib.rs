//! Sitemap-Harvest: a sitemap index URL exporter
//!
//! This crate fetches a site's sitemap index, expands every child sitemap it
//! lists, and writes the collected page URLs to a newline-delimited file.

pub mod config;
pub mod output;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemap-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] sitemap::FetchError),

    #[error("Malformed XML in {url}: {source}")]
    MalformedXml {
        url: String,
        source: sitemap::XmlError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for Sitemap-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use output::{HarvestReport, SitemapSummary};
pub use sitemap::{run_harvest, Harvester};
pub use crate::url::build_index_url;
