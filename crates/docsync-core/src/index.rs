//! Link extraction from the index document
//!
//! The index is not parsed as structured markdown; it is scanned flat for
//! the link pattern, matching the behavior of the mirrored origin's own
//! index format.

use std::sync::LazyLock;

use regex::Regex;

/// Markdown links whose target is an https URL ending in `.md`.
static DOC_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((https://[^)]+\.md)\)").unwrap());

/// Collect documentation URLs from the raw index text.
///
/// Order of first appearance is preserved and duplicates are kept; the
/// reconciliation pass handles repeated names.
pub fn extract_doc_urls(index: &str) -> Vec<String> {
    DOC_LINK
        .captures_iter(index)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Final path segment of a documentation URL, used as the local file name.
pub fn doc_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
