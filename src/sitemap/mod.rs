//! Sitemap module: fetching, parsing, and harvesting
//!
//! This module contains the core harvest logic:
//! - HTTP fetching with typed failures
//! - `<loc>` extraction from sitemap XML
//! - The sequential index-then-children harvest loop

mod fetcher;
mod harvester;
mod parser;

pub use fetcher::{build_http_client, fetch_document, FetchError};
pub use harvester::{run_harvest, Harvester};
pub use parser::{extract_locations, XmlError};
