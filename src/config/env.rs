use crate::config::types::Config;
use std::path::Path;

/// Environment variables consulted for the site URL, highest priority first
pub const SITE_URL_VARS: [&str; 2] = ["SITE_URL", "NEXT_PUBLIC_SITE_URL"];

/// Applies environment overrides to the configuration
///
/// The first variable in [`SITE_URL_VARS`] holding a non-empty value
/// replaces `site.base_url`. Lookup is injected so callers can pass
/// `std::env::var` or a fixed map.
///
/// # Example
///
/// ```
/// use sitemap_harvest::config::{apply_env_overrides, Config};
///
/// let mut config = Config::default();
/// apply_env_overrides(&mut config, |key| {
///     (key == "SITE_URL").then(|| "https://example.com".to_string())
/// });
/// assert_eq!(config.site.base_url, "https://example.com");
/// ```
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let site_url = SITE_URL_VARS
        .iter()
        .filter_map(|key| lookup(key).map(|value| (*key, value)))
        .find(|(_, value)| !value.trim().is_empty());

    if let Some((key, value)) = site_url {
        tracing::debug!("Site URL taken from ${}", key);
        config.site.base_url = value.trim().to_string();
    }
}

/// Loads variables from a dotenv file into the process environment
///
/// Variables already set are left alone. A missing file is not an error;
/// an unreadable or malformed one is logged and skipped.
///
/// # Returns
///
/// `true` when the file was found and loaded
pub fn load_dotenv(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            false
        }
    }
}
