//! Summary of a single harvest run

/// Page URL count for one child sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSummary {
    /// URL of the child sitemap, as listed in the index
    pub url: String,

    /// Number of page URLs it contributed
    pub url_count: usize,
}

/// Everything collected during one run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    /// The sitemap index that was fetched
    pub index_url: String,

    /// Child sitemaps in index order
    pub sitemaps: Vec<SitemapSummary>,

    /// Page URLs in discovery order, duplicates included
    pub urls: Vec<String>,
}

impl HarvestReport {
    /// Creates an empty report for the given index
    pub fn new(index_url: impl Into<String>) -> Self {
        Self {
            index_url: index_url.into(),
            ..Self::default()
        }
    }

    /// Appends the page URLs of one child sitemap
    pub fn record_sitemap(&mut self, sitemap_url: &str, urls: Vec<String>) {
        self.sitemaps.push(SitemapSummary {
            url: sitemap_url.to_string(),
            url_count: urls.len(),
        });
        self.urls.extend(urls);
    }

    /// Total number of page URLs collected
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    /// The message printed after a successful export
    pub fn completion_message(&self) -> String {
        format!("Exported {} URLs!", self.url_count())
    }
}
