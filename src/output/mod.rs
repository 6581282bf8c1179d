//! Output module for harvested URLs
//!
//! This module handles:
//! - Writing the newline-delimited URL list
//! - The per-run report returned to the caller

mod report;
mod writer;

pub use report::{HarvestReport, SitemapSummary};
pub use writer::{render_url_list, write_url_list};
