//! Traitscribe domain types.
//!
//! Plain data for trait/ability descriptions and the per-tier effect records
//! that fill them. Everything here is pure data; the rendering pipeline lives
//! in `traitscribe-engine`.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{range_label, TierEffect, TraitDescription, VariableMatch};
pub use error::DomainError;
pub use value_objects::{format_number, VariableValue};
