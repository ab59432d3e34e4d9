//! Raw variable values carried by tier effect records
//!
//! Game data stores effect variables as loosely typed JSON. Most entries are
//! numbers, but some data sets ship numeric strings or flags. A JSON `null`
//! is represented by the absence of a value (`Option::None`) wherever a
//! `VariableValue` is stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw value attached to an effect variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Numeric value (integers are stored as whole floats)
    Number(f64),
    /// Boolean flag
    Flag(bool),
    /// Text value, rendered verbatim
    Text(String),
}

impl VariableValue {
    /// Numeric view of this value.
    ///
    /// Flags count as 1/0. Text is parsed as a decimal number; text that is
    /// not numeric (or not finite) has no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Flag(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
        }
    }
}

/// Format a number in its natural form: whole values without a decimal
/// point, everything else in shortest round-trip decimal form.
pub fn format_number(value: f64) -> String {
    // Covers negative zero too
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for VariableValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for VariableValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_render_without_decimal_point() {
        assert_eq!(VariableValue::Number(10.0).to_string(), "10");
        assert_eq!(VariableValue::Number(-3.0).to_string(), "-3");
        assert_eq!(VariableValue::Number(0.0).to_string(), "0");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(VariableValue::Number(-0.0).to_string(), "0");
    }

    #[test]
    fn test_fractional_numbers_render_in_shortest_form() {
        assert_eq!(VariableValue::Number(0.25).to_string(), "0.25");
        assert_eq!(VariableValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_text_and_flags_render_verbatim() {
        assert_eq!(VariableValue::from("Bruiser").to_string(), "Bruiser");
        assert_eq!(VariableValue::Flag(true).to_string(), "true");
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(VariableValue::Number(0.3).as_number(), Some(0.3));
        assert_eq!(VariableValue::from(" 0.5 ").as_number(), Some(0.5));
        assert_eq!(VariableValue::Flag(false).as_number(), Some(0.0));
        assert_eq!(VariableValue::from("Bruiser").as_number(), None);
        assert_eq!(VariableValue::from("inf").as_number(), None);
    }

    #[test]
    fn test_deserializes_untagged_json() {
        let values: Vec<Option<VariableValue>> =
            serde_json::from_str(r#"[10, 0.3, "text", true, null]"#).expect("valid json");
        assert_eq!(
            values,
            vec![
                Some(VariableValue::Number(10.0)),
                Some(VariableValue::Number(0.3)),
                Some(VariableValue::Text("text".to_string())),
                Some(VariableValue::Flag(true)),
                None,
            ]
        );
    }
}
