//! Template splitter.
//!
//! Separates a raw description into a header and row templates. Rows are the
//! bodies of `<row>...</row>` and `<expandRow>...</expandRow>` regions; each
//! one is rendered once per tier. Whatever remains outside those regions is
//! the header.

use regex_lite::Regex;
use std::sync::LazyLock;

// Row bodies may span lines
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<row>(.*?)</row>|<expandRow>(.*?)</expandRow>").expect("valid regex")
});

/// A description split into its header and row templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitTemplate {
    /// Text outside any row region, trimmed
    pub header: String,
    /// Row bodies in order of appearance
    pub rows: Vec<String>,
}

impl SplitTemplate {
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// Split `description` into a header and row templates.
///
/// Unbalanced or unmatched row tags are not rows; they stay in the header
/// as literal text.
pub fn split_description(description: &str) -> SplitTemplate {
    let rows: Vec<String> = ROW_RE
        .captures_iter(description)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|body| body.as_str().to_string())
        .collect();

    let header = ROW_RE.replace_all(description, "").trim().to_string();

    tracing::trace!(rows = rows.len(), header_len = header.len(), "Split description");

    SplitTemplate { header, rows }
}
