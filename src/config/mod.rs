//! Configuration module for Sitemap-Harvest
//!
//! This module handles built-in defaults, loading an optional TOML file,
//! `.env` and environment overrides, layered resolution, and validation.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Harvesting from: {}", config.site.base_url);
//! ```

mod env;
mod parser;
mod resolve;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, ParseConfig, SiteConfig, DEFAULT_INDEX_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_SITE_URL,
};

// Re-export parser functions
pub use env::{apply_env_overrides, load_dotenv, SITE_URL_VARS};
pub use parser::{compute_config_hash, load_config, read_config, read_config_with_hash};
pub use resolve::{resolve_config, ConfigOverrides, ResolvedConfig};
pub use validation::validate;
