//! Newline-delimited URL list writer

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders URLs one per line, each line terminated by `\n`
pub fn render_url_list(urls: &[String]) -> String {
    let mut content = String::with_capacity(urls.iter().map(|u| u.len() + 1).sum());
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }
    content
}

/// Writes the URL list to `path`, replacing any previous content
///
/// The list is written to a temporary file in the same directory and
/// renamed over `path`, so readers never see a partially written file.
/// Missing parent directories are created.
///
/// # Arguments
///
/// * `path` - Destination file
/// * `urls` - URLs in output order
pub fn write_url_list(path: &Path, urls: &[String]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(render_url_list(urls).as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} URLs to {}", urls.len(), path.display());

    Ok(())
}
