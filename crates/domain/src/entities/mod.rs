//! Domain entities - Game data records consumed by the renderer

mod tier_effect;
mod trait_description;

pub use tier_effect::{range_label, TierEffect, VariableMatch};
pub use trait_description::TraitDescription;
