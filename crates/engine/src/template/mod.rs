//! Description template pipeline.
//!
//! `splitter` → `resolver` (per tier, per row) → `sanitizer` → `renderer`.
//! Every stage is a pure function of its inputs.

pub mod renderer;
pub mod resolver;
pub mod sanitizer;
pub mod splitter;

pub use renderer::{
    render_templated_description, render_tiers, OrderedLines, RenderedDescription, RenderedTier,
    TierRenderer,
};
pub use resolver::{
    placeholders, render_value, MatchLookup, MaxUnitsLookup, MinUnitsLookup, Placeholder,
    VariableLookup, VariableResolver, VariablesLookup, MAX_UNITS, MIN_UNITS,
};
pub use sanitizer::sanitize;
pub use splitter::{split_description, SplitTemplate};
