//! XML parser for sitemap documents
//!
//! Sitemap indexes and sitemaps share one extraction rule: collect the text
//! of every `<loc>` element in document order. Whether a document lists
//! child sitemaps or pages is decided by the caller, not by the root
//! element.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use thiserror::Error;

/// Local name of the location element
const LOC_TAG: &[u8] = b"loc";

/// Namespaces whose `loc` elements are sitemap locations
const SITEMAP_NAMESPACES: [&[u8]; 2] = [
    b"http://www.sitemaps.org/schemas/sitemap/0.9",
    b"http://www.google.com/schemas/sitemap/0.84",
];

/// A document that could not be read as XML
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {position})")]
pub struct XmlError {
    /// Parser message
    pub message: String,

    /// Byte offset where parsing stopped
    pub position: u64,
}

/// Extracts the text of every `<loc>` element, in document order
///
/// A `loc` element counts when it is in the sitemap namespace, under any
/// prefix, or in no namespace at all. Extension tags such as
/// `<image:loc>` are skipped. Surrounding whitespace is trimmed, entities
/// are unescaped, and CDATA content is taken verbatim. Nothing else is
/// filtered: empty and duplicate locations are returned as found.
///
/// # Arguments
///
/// * `xml` - The document body
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Location values; empty when the document has none
/// * `Err(XmlError)` - The document is not well-formed
///
/// # Example
///
/// ```
/// use sitemap_harvest::sitemap::extract_locations;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/a</loc></url>
///   <url><loc>https://example.com/b</loc></url>
/// </urlset>"#;
///
/// let locations = extract_locations(xml).unwrap();
/// assert_eq!(locations, vec!["https://example.com/a", "https://example.com/b"]);
/// ```
pub fn extract_locations(xml: &str) -> Result<Vec<String>, XmlError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locations = Vec::new();
    let mut current: Option<String> = None;

    loop {
        let step = match reader.read_resolved_event() {
            Ok((ns, event)) => Ok((is_sitemap_namespace(&ns), event)),
            Err(err) => Err(err),
        };
        let (in_sitemap_ns, event) = step.map_err(|err| XmlError {
            message: err.to_string(),
            position: reader.error_position(),
        })?;

        match event {
            Event::Start(e) if in_sitemap_ns && e.local_name().as_ref() == LOC_TAG => {
                current = Some(String::new());
            }
            Event::Empty(e) if in_sitemap_ns && e.local_name().as_ref() == LOC_TAG => {
                locations.push(String::new());
            }
            Event::Text(e) => {
                if let Some(text) = current.as_mut() {
                    let unescaped = e.unescape().map_err(|err| XmlError {
                        message: err.to_string(),
                        position: reader.buffer_position(),
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) if in_sitemap_ns && e.local_name().as_ref() == LOC_TAG => {
                if let Some(text) = current.take() {
                    locations.push(text.trim().to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(XmlError {
            message: "unexpected end of document inside <loc>".to_string(),
            position: reader.buffer_position(),
        });
    }

    Ok(locations)
}

fn is_sitemap_namespace(ns: &ResolveResult) -> bool {
    match ns {
        ResolveResult::Unbound => true,
        ResolveResult::Bound(Namespace(uri)) => {
            SITEMAP_NAMESPACES.iter().any(|known| *known == *uri)
        }
        ResolveResult::Unknown(_) => false,
    }
}
