//! Harvest orchestration
//!
//! Fetches the sitemap index, then each child sitemap in index order, one
//! request at a time. The first fetch failure ends the run.

use crate::config::{validate, Config};
use crate::output::HarvestReport;
use crate::sitemap::fetcher::{build_http_client, fetch_document};
use crate::sitemap::parser::extract_locations;
use crate::url::build_index_url;
use crate::HarvestError;
use reqwest::Client;

/// Sequential sitemap harvester
pub struct Harvester {
    config: Config,
    client: Client,
    index_url: String,
}

impl Harvester {
    /// Creates a harvester for the configured site
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Index URL resolved and HTTP client built
    /// * `Err(HarvestError)` - Bad base URL or client construction failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let index_url = build_index_url(&config.site.base_url, &config.site.index_path)?;
        let client = build_http_client(&config.fetch)?;

        Ok(Self {
            config,
            client,
            index_url,
        })
    }

    /// The sitemap index URL this harvester will fetch
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Fetches the index and every child sitemap, collecting page URLs
    ///
    /// Nothing is written to disk here; see [`run_harvest`].
    pub async fn harvest(&self) -> Result<HarvestReport, HarvestError> {
        tracing::info!("Fetching sitemap index: {}", self.index_url);
        let sitemaps = self.fetch_locations(&self.index_url).await?;
        tracing::info!("Sitemap index lists {} sitemaps", sitemaps.len());

        let mut report = HarvestReport::new(self.index_url.clone());

        for (position, sitemap_url) in sitemaps.iter().enumerate() {
            tracing::debug!(
                "Fetching sitemap {}/{}: {}",
                position + 1,
                sitemaps.len(),
                sitemap_url
            );

            let urls = self.fetch_locations(sitemap_url).await?;

            tracing::debug!("{} URLs in {}", urls.len(), sitemap_url);
            report.record_sitemap(sitemap_url, urls);
        }

        tracing::info!(
            "Collected {} URLs from {} sitemaps",
            report.url_count(),
            report.sitemaps.len()
        );

        Ok(report)
    }

    /// Fetches one document and extracts its `<loc>` values
    async fn fetch_locations(&self, url: &str) -> Result<Vec<String>, HarvestError> {
        let body = fetch_document(&self.client, url).await?;
        self.parse_document(url, &body)
    }

    /// Applies the malformed-XML policy to a fetched document
    fn parse_document(&self, url: &str, body: &str) -> Result<Vec<String>, HarvestError> {
        match extract_locations(body) {
            Ok(locations) => Ok(locations),
            Err(source) if self.config.parse.strict => Err(HarvestError::MalformedXml {
                url: url.to_string(),
                source,
            }),
            Err(source) => {
                tracing::warn!("Malformed XML in {}, treating as empty: {}", url, source);
                Ok(Vec::new())
            }
        }
    }
}

/// Runs a complete harvest and writes the output file
///
/// The output file is only touched after every fetch has succeeded, so a
/// failed run leaves any previous export in place.
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(HarvestReport)` - URLs collected and written
/// * `Err(HarvestError)` - Invalid config, fetch, strict-mode parse, or write failure
pub async fn run_harvest(config: &Config) -> Result<HarvestReport, HarvestError> {
    validate(config)?;

    let harvester = Harvester::new(config.clone())?;
    let report = harvester.harvest().await?;

    crate::output::write_url_list(std::path::Path::new(&config.output.path), &report.urls)?;
    tracing::info!(
        "Wrote {} URLs to {}",
        report.url_count(),
        config.output.path
    );

    Ok(report)
}
