use serde::Deserialize;

/// Site used when neither the config file nor the environment names one
pub const DEFAULT_SITE_URL: &str = "https://strspecialist.com";

/// Path of the sitemap index relative to the site root
pub const DEFAULT_INDEX_PATH: &str = "seo_generator_sitemap_index.xml";

/// File the harvested URLs are written to
pub const DEFAULT_OUTPUT_PATH: &str = "seo_generator_urls.csv";

/// Main configuration structure for Sitemap-Harvest
///
/// Every section is optional in the TOML file; missing keys fall back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub parse: ParseConfig,
}

/// Which site to harvest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the site (e.g., "https://example.com")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Sitemap index path appended to the base URL
    #[serde(rename = "index-path")]
    pub index_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_URL.to_string(),
            index_path: DEFAULT_INDEX_PATH.to_string(),
        }
    }
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total timeout per request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout per request (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("sitemap-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the newline-delimited URL list
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// XML handling configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Fail the run on malformed XML instead of treating the document as empty
    pub strict: bool,
}
