//! Tier effect entity - Per-tier variable data for a trait or ability
//!
//! A trait activates in tiers keyed by unit count (e.g. 2/4/6 units). Each
//! tier carries the numbers substituted into the trait's description
//! template. Values are looked up by name in two places:
//! - `variable_matches`: ordered records, first record with a matching name wins
//! - `variables`: plain name/value map, consulted when no match record answers
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "minUnits": 2,
//!   "maxUnits": 3,
//!   "variables": { "Armor": 20 },
//!   "variableMatches": [{ "match": "Armor", "value": 25 }]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::VariableValue;

/// A named value record; the first record matching a variable name wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableMatch {
    /// Variable name this record answers for
    #[serde(rename = "match", default)]
    pub name: String,
    /// The value, `None` when the data carries `null`
    #[serde(default)]
    pub value: Option<VariableValue>,
}

impl VariableMatch {
    pub fn new(name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A record that names a variable but carries no value
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// One activation tier of a trait and the variable data it substitutes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEffect {
    /// Minimum unit count activating this tier
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_units: u32,
    /// Upper bound of the tier, `None` when unbounded
    #[serde(default)]
    pub max_units: Option<u32>,
    /// Fallback name/value map
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: HashMap<String, Option<VariableValue>>,
    /// Primary ordered lookup records
    #[serde(default, deserialize_with = "null_as_default")]
    pub variable_matches: Vec<VariableMatch>,
}

impl TierEffect {
    /// Create an empty tier activating at `min_units`
    pub fn new(min_units: u32) -> Self {
        Self {
            min_units,
            ..Self::default()
        }
    }

    pub fn with_max(mut self, max_units: u32) -> Self {
        self.max_units = Some(max_units);
        self
    }

    /// Add an entry to the fallback `variables` map
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Self {
        self.variables.insert(name.into(), Some(value.into()));
        self
    }

    /// Append a record to `variable_matches`
    pub fn with_match(mut self, name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        self.variable_matches.push(VariableMatch::new(name, value));
        self
    }

    /// Value of the first match record named `name`.
    ///
    /// Only the first record with that name is considered; if it carries
    /// `null` the result is `None` even when a later record has a value.
    pub fn matched_value(&self, name: &str) -> Option<&VariableValue> {
        self.variable_matches
            .iter()
            .find(|record| record.name == name)
            .and_then(|record| record.value.as_ref())
    }

    /// Value from the fallback `variables` map
    pub fn variable(&self, name: &str) -> Option<&VariableValue> {
        self.variables.get(name).and_then(Option::as_ref)
    }

    /// Human-readable activation range: `"2-3"`, `"4"` or `"6+"`
    pub fn range_label(&self) -> String {
        range_label(self.min_units, self.max_units)
    }

    /// Check the tier bounds.
    ///
    /// Rendering never requires a valid range; this is for callers that want
    /// to flag suspicious data.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.max_units {
            Some(max) if max < self.min_units => Err(DomainError::validation(format!(
                "tier max units {} is below min units {}",
                max, self.min_units
            ))),
            _ => Ok(()),
        }
    }
}

/// Format a unit range the way tier labels are displayed
pub fn range_label(min_units: u32, max_units: Option<u32>) -> String {
    match max_units {
        Some(max) if max == min_units => min_units.to_string(),
        Some(max) => format!("{}-{}", min_units, max),
        None => format!("{}+", min_units),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
