//! Traitscribe engine library.
//!
//! Renders trait/ability description templates into per-tier display text.
//!
//! ## Structure
//!
//! - `template/` - The rendering pipeline (split, resolve, sanitize, render)
//! - `infrastructure/` - Configuration and trait data loading for the binary
//!
//! ```
//! use traitscribe_domain::TierEffect;
//! use traitscribe_engine::render_templated_description;
//!
//! let effects = vec![
//!     TierEffect::new(2).with_match("Bonus", 10),
//!     TierEffect::new(4).with_match("Bonus", 20),
//! ];
//! let text = render_templated_description(
//!     Some("Grants @MinUnits@ units<row>+@Bonus@ Armor</row>"),
//!     Some(effects.as_slice()),
//! );
//! assert_eq!(text, "Grants 2 units\n\n+10 Armor\n+20 Armor");
//! ```

pub mod infrastructure;
pub mod template;

pub use template::{
    render_templated_description, render_tiers, sanitize, split_description, RenderedDescription,
    RenderedTier, TierRenderer, VariableLookup, VariableResolver,
};
