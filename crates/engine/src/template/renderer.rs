//! Tier renderer.
//!
//! Drives the resolver over every tier and row template:
//! - the header is resolved once against the first tier
//! - each tier resolves every row template in order, sanitizes the valid
//!   ones and collapses duplicate lines within that tier
//! - tiers that produce no lines are omitted
//!
//! Tiers are rendered in the order given; nothing is re-sorted.

use std::collections::HashSet;
use std::fmt;

use traitscribe_domain::{range_label, TierEffect, TraitDescription};

use super::resolver::VariableResolver;
use super::sanitizer::sanitize;
use super::splitter::split_description;

/// Insertion-ordered set of rendered lines
#[derive(Debug, Clone, Default)]
pub struct OrderedLines {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `line` unless an identical line is already present.
    ///
    /// Returns `true` when the line was added.
    pub fn insert(&mut self, line: String) -> bool {
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);
        true
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// The rendered lines of one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTier {
    pub min_units: u32,
    pub max_units: Option<u32>,
    /// Sanitized, de-duplicated lines in row template order
    pub lines: Vec<String>,
}

impl RenderedTier {
    /// Activation range, e.g. `"2-3"` or `"6+"`
    pub fn range_label(&self) -> String {
        range_label(self.min_units, self.max_units)
    }

    fn block(&self) -> String {
        self.lines.join("\n")
    }
}

/// A fully rendered description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDescription {
    /// Header text resolved against the first tier, if any
    pub header: Option<String>,
    /// Tiers that produced at least one line
    pub tiers: Vec<RenderedTier>,
}

impl RenderedDescription {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.tiers.is_empty()
    }

    /// Text form with each tier block preceded by its range label line
    pub fn to_text_with_ranges(&self) -> String {
        let blocks: Vec<String> = self
            .tiers
            .iter()
            .map(|tier| format!("[{}]\n{}", tier.range_label(), tier.block()))
            .collect();
        join_blocks(self.header.as_deref(), &blocks)
    }
}

/// Header first, separated from the tier blocks by one blank line
fn join_blocks(header: Option<&str>, blocks: &[String]) -> String {
    let body = blocks.join("\n");
    match header {
        Some(header) if body.is_empty() => header.to_string(),
        Some(header) => format!("{}\n\n{}", header, body),
        None => body,
    }
}

impl fmt::Display for RenderedDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self.tiers.iter().map(RenderedTier::block).collect();
        f.write_str(&join_blocks(self.header.as_deref(), &blocks))
    }
}

/// Renders description templates across tiers.
#[derive(Default)]
pub struct TierRenderer {
    resolver: VariableResolver,
}

impl TierRenderer {
    pub fn new(resolver: VariableResolver) -> Self {
        Self { resolver }
    }

    /// Render `description` for every tier in `effects`.
    ///
    /// A missing or empty description, or missing or empty tiers, renders as
    /// an empty result.
    pub fn render(
        &self,
        description: Option<&str>,
        effects: Option<&[TierEffect]>,
    ) -> RenderedDescription {
        let (Some(description), Some(effects)) = (description, effects) else {
            return RenderedDescription::default();
        };
        let Some(first) = effects.first() else {
            return RenderedDescription::default();
        };
        if description.is_empty() {
            return RenderedDescription::default();
        }

        let template = split_description(description);

        let header = self
            .resolver
            .resolve(&template.header, first)
            .map(|text| sanitize(&text))
            .filter(|text| !text.is_empty());

        let tiers = effects
            .iter()
            .filter_map(|effect| {
                let mut lines = OrderedLines::new();
                for row in &template.rows {
                    let Some(text) = self.resolver.resolve(row, effect) else {
                        continue;
                    };
                    let line = sanitize(&text);
                    if !line.is_empty() {
                        lines.insert(line);
                    }
                }

                tracing::debug!(
                    min_units = effect.min_units,
                    lines = lines.len(),
                    "Rendered tier"
                );

                (!lines.is_empty()).then(|| RenderedTier {
                    min_units: effect.min_units,
                    max_units: effect.max_units,
                    lines: lines.into_lines(),
                })
            })
            .collect();

        RenderedDescription { header, tiers }
    }

    /// Render a trait record's template against its own tiers
    pub fn render_trait(&self, record: &TraitDescription) -> RenderedDescription {
        self.render(record.template(), record.tiers())
    }
}

/// Render `description` across `effects` with the default lookup chain.
pub fn render_tiers(
    description: Option<&str>,
    effects: Option<&[TierEffect]>,
) -> RenderedDescription {
    TierRenderer::default().render(description, effects)
}

/// Render `description` across `effects` into display text.
///
/// Returns an empty string when either input is missing or empty.
pub fn render_templated_description(
    description: Option<&str>,
    effects: Option<&[TierEffect]>,
) -> String {
    render_tiers(description, effects).to_string()
}
