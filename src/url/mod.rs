//! URL handling module for Sitemap-Harvest
//!
//! Builds the sitemap index URL from the configured site and index path.

use crate::{UrlError, UrlResult};
use url::Url;

/// Builds the sitemap index URL by path concatenation
///
/// Trailing slashes on `base_url` and leading slashes on `index_path` are
/// dropped and the two are joined with a single `/`. Unlike
/// [`Url::join`], any path already on the base URL is kept.
///
/// # Arguments
///
/// * `base_url` - The site URL (must be http or https)
/// * `index_path` - Path of the sitemap index below the site
///
/// # Returns
///
/// * `Ok(String)` - The absolute index URL
/// * `Err(UrlError)` - The base URL does not parse or is not http(s)
///
/// # Examples
///
/// ```
/// use sitemap_harvest::url::build_index_url;
///
/// let url = build_index_url("https://example.com/", "/sitemap_index.xml").unwrap();
/// assert_eq!(url, "https://example.com/sitemap_index.xml");
///
/// let url = build_index_url("https://example.com/blog", "sitemap_index.xml").unwrap();
/// assert_eq!(url, "https://example.com/blog/sitemap_index.xml");
/// ```
pub fn build_index_url(base_url: &str, index_path: &str) -> UrlResult<String> {
    let base = base_url.trim().trim_end_matches('/');
    let joined = format!("{}/{}", base, index_path.trim_start_matches('/'));

    let url = Url::parse(&joined).map_err(|e| UrlError::Parse(format!("{}: {}", joined, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(joined),
        other => Err(UrlError::InvalidScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_base() {
        assert_eq!(
            build_index_url("https://example.com", "seo_generator_sitemap_index.xml").unwrap(),
            "https://example.com/seo_generator_sitemap_index.xml"
        );
    }

    #[test]
    fn test_multiple_trailing_slashes() {
        assert_eq!(
            build_index_url("https://example.com///", "/index.xml").unwrap(),
            "https://example.com/index.xml"
        );
    }

    #[test]
    fn test_base_with_port() {
        assert_eq!(
            build_index_url("http://127.0.0.1:4000/", "index.xml").unwrap(),
            "http://127.0.0.1:4000/index.xml"
        );
    }

    #[test]
    fn test_nested_index_path() {
        assert_eq!(
            build_index_url("https://example.com", "sitemaps/index.xml").unwrap(),
            "https://example.com/sitemaps/index.xml"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            build_index_url("not a url", "index.xml"),
            Err(UrlError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_scheme() {
        assert!(matches!(
            build_index_url("ftp://example.com", "index.xml"),
            Err(UrlError::InvalidScheme(_))
        ));
    }
}
