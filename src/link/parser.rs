//! Link header parser
//!
//! Pure functions turning a raw header string into a [`LinkHeaderResult`].

use super::types::{LinkDescriptor, LinkHeaderResult};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::HeaderMap;
use tracing::debug;

/// Matches one `name="value"` attribute inside a link segment
static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z0-9_-]+)\s*=\s*"([^"]*)""#).expect("valid attribute regex"));

/// Parse a link header string into a [`LinkHeaderResult`].
///
/// - `None` or an empty string yields both directions disabled.
/// - Segments are comma-separated; each segment is `<url>` followed by
///   `;`-separated `name="value"` attributes.
/// - A segment without a `rel` attribute is skipped; a `rel` other than
///   `previous` or `next` is ignored. Unknown attributes are ignored.
/// - `results` is read as boolean text: `"true"` is true, anything else
///   (including absence) is false.
///
/// Never panics and never fails; malformed input degrades to disabled
/// directions.
pub fn parse_link_header(input: Option<&str>) -> LinkHeaderResult {
    let Some(header) = input else {
        return LinkHeaderResult::disabled();
    };
    if header.trim().is_empty() {
        return LinkHeaderResult::disabled();
    }

    let mut result = LinkHeaderResult::disabled();

    for segment in header.split(',') {
        let Some((rel, descriptor)) = parse_segment(segment) else {
            continue;
        };
        match rel.as_str() {
            "previous" => result.previous = descriptor,
            "next" => result.next = descriptor,
            other => {
                debug!(rel = other, "ignoring link segment with unknown rel");
            }
        }
    }

    result
}

/// Parse one comma-separated segment into its rel and descriptor.
///
/// Returns `None` when the segment has no `rel` attribute.
fn parse_segment(segment: &str) -> Option<(String, LinkDescriptor)> {
    let segment = segment.trim();

    let mut href = String::new();
    let mut rel = None;
    let mut results = false;
    let mut cursor = String::new();

    for part in segment.split(';') {
        let part = part.trim();

        if part.starts_with('<') && part.ends_with('>') {
            href = part[1..part.len() - 1].to_string();
            continue;
        }

        if let Some(caps) = ATTR_RE.captures(part) {
            let name = &caps[1];
            let value = &caps[2];
            match name {
                "rel" => rel = Some(value.to_string()),
                "results" => results = value == "true",
                "cursor" => cursor = value.to_string(),
                _ => {}
            }
        }
    }

    let rel = rel?;
    Some((rel, LinkDescriptor::new(cursor, results, href)))
}

/// Read and parse the `Link` header from a response header map.
///
/// A missing header, or one whose value is not valid UTF-8, yields both
/// directions disabled.
pub fn from_header_map(headers: &HeaderMap) -> LinkHeaderResult {
    parse_link_header(headers.get("link").and_then(|v| v.to_str().ok()))
}
