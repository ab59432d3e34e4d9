//! Variable resolver.
//!
//! Substitutes `@Name@` and `@Name*100@` placeholders in a template fragment
//! with values from one tier. Names are answered by an ordered chain of
//! lookup strategies; the first strategy returning a value wins:
//!
//! 1. `MinUnitsLookup` - the reserved `MinUnits` name, answered from the tier count
//! 2. `MatchLookup` - the tier's `variable_matches` records
//! 3. `VariablesLookup` - the tier's `variables` map
//!
//! A fragment resolves completely or not at all. When any placeholder has no
//! value the fragment is invalid for that tier, but every remaining
//! placeholder is still looked up so lookups stay observable across the
//! whole fragment.

use regex_lite::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;

use traitscribe_domain::{format_number, TierEffect, VariableValue};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)(\*100)?@").expect("valid regex"));

/// Reserved placeholder name for the tier's minimum unit count
pub const MIN_UNITS: &str = "MinUnits";
/// Placeholder name answered by the optional `MaxUnitsLookup`
pub const MAX_UNITS: &str = "MaxUnits";

/// One strategy in the lookup chain.
#[cfg_attr(test, mockall::automock)]
pub trait VariableLookup: Send + Sync {
    /// Value for `name` in `effect`, or `None` to defer to the next strategy
    fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue>;
}

/// Answers `MinUnits` with the tier's minimum unit count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinUnitsLookup;

impl VariableLookup for MinUnitsLookup {
    fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue> {
        (name == MIN_UNITS).then(|| VariableValue::from(effect.min_units))
    }
}

/// Answers `MaxUnits` with the tier's upper bound, when it has one.
///
/// Not part of the default chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxUnitsLookup;

impl VariableLookup for MaxUnitsLookup {
    fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue> {
        if name != MAX_UNITS {
            return None;
        }
        effect.max_units.map(VariableValue::from)
    }
}

/// First `variable_matches` record with the requested name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchLookup;

impl VariableLookup for MatchLookup {
    fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue> {
        effect.matched_value(name).cloned()
    }
}

/// Entry in the `variables` map.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariablesLookup;

impl VariableLookup for VariablesLookup {
    fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue> {
        effect.variable(name).cloned()
    }
}

/// A placeholder token found in a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Variable name between the `@` delimiters
    pub name: &'a str,
    /// Whether the token carries the `*100` percentage suffix
    pub percent: bool,
}

/// List the placeholders in `fragment`, in order.
pub fn placeholders(fragment: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER_RE
        .captures_iter(fragment)
        .filter_map(|caps| {
            caps.get(1).map(|name| Placeholder {
                name: name.as_str(),
                percent: caps.get(2).is_some(),
            })
        })
        .collect()
}

/// Resolves template fragments against tier data through a lookup chain.
pub struct VariableResolver {
    chain: Vec<Box<dyn VariableLookup>>,
}

impl Default for VariableResolver {
    fn default() -> Self {
        Self::new(vec![
            Box::new(MinUnitsLookup),
            Box::new(MatchLookup),
            Box::new(VariablesLookup),
        ])
    }
}

impl VariableResolver {
    /// Build a resolver from an explicit chain, consulted in order
    pub fn new(chain: Vec<Box<dyn VariableLookup>>) -> Self {
        Self { chain }
    }

    /// Append a strategy at the end of the chain
    pub fn with_lookup(mut self, lookup: impl VariableLookup + 'static) -> Self {
        self.chain.push(Box::new(lookup));
        self
    }

    /// Ask each strategy in turn for `name`
    pub fn lookup(&self, name: &str, effect: &TierEffect) -> Option<VariableValue> {
        self.chain
            .iter()
            .find_map(|strategy| strategy.lookup(name, effect))
    }

    /// Substitute every placeholder in `fragment` with values from `effect`.
    ///
    /// Returns `None` when any placeholder cannot be resolved; no partially
    /// substituted text is ever returned.
    pub fn resolve(&self, fragment: &str, effect: &TierEffect) -> Option<String> {
        let mut output = String::with_capacity(fragment.len());
        let mut valid = true;
        let mut last_end = 0;

        for caps in PLACEHOLDER_RE.captures_iter(fragment) {
            let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let percent = caps.get(2).is_some();

            output.push_str(&fragment[last_end..token.start()]);
            last_end = token.end();

            let rendered = self
                .lookup(name.as_str(), effect)
                .and_then(|value| render_value(&value, percent));

            match rendered {
                Some(text) => output.push_str(&text),
                None => {
                    tracing::debug!(
                        placeholder = name.as_str(),
                        min_units = effect.min_units,
                        "Unresolved placeholder, dropping fragment for tier"
                    );
                    valid = false;
                }
            }
        }

        if !valid {
            return None;
        }

        output.push_str(&fragment[last_end..]);
        Some(output)
    }
}

/// Render a resolved value, applying the `*100` percentage transform.
///
/// Returns `None` when a percentage is requested for a value with no
/// numeric view.
pub fn render_value(value: &VariableValue, percent: bool) -> Option<String> {
    if !percent {
        return Some(value.to_string());
    }
    value.as_number().map(scale_percent)
}

/// Multiply by 100 and round to two decimals, half away from zero.
///
/// Works on the shortest decimal form of the input so that values such as
/// `0.12345` round as written rather than as their binary approximation.
fn scale_percent(value: f64) -> String {
    let scaled = Decimal::from_str(&value.to_string())
        .ok()
        .and_then(|decimal| decimal.checked_mul(Decimal::ONE_HUNDRED))
        .map(|decimal| {
            decimal
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        });

    match scaled {
        Some(decimal) if decimal.is_zero() => "0".to_string(),
        Some(decimal) => decimal.to_string(),
        // Out of decimal range; plain float rounding is the best we can do
        None => format_number((value * 10_000.0).round() / 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn tier() -> TierEffect {
        TierEffect::new(2)
            .with_max(3)
            .with_match("Bonus", 10)
            .with_variable("Bonus", 99)
            .with_variable("Ratio", 0.3)
            .with_variable("Name", "Bruiser")
    }

    #[test]
    fn substitutes_all_placeholders() {
        let resolver = VariableResolver::default();
        assert_eq!(
            resolver.resolve("+@Bonus@ Armor and @Ratio*100@% @Name@", &tier()),
            Some("+10 Armor and 30% Bruiser".to_string())
        );
    }

    #[test]
    fn fragment_without_placeholders_resolves_verbatim() {
        let resolver = VariableResolver::default();
        assert_eq!(
            resolver.resolve("plain text", &tier()),
            Some("plain text".to_string())
        );
        assert_eq!(resolver.resolve("", &tier()), Some(String::new()));
    }

    #[test]
    fn unresolved_placeholder_invalidates_fragment() {
        let resolver = VariableResolver::default();
        assert_eq!(resolver.resolve("+@Bonus@ and @Missing@", &tier()), None);
        assert_eq!(resolver.resolve("@Missing@ then @Bonus@", &tier()), None);
    }

    #[test]
    fn null_values_are_unresolved() {
        let mut effect = TierEffect::new(1);
        effect.variables.insert("Empty".to_string(), None);
        assert_eq!(VariableResolver::default().resolve("@Empty@", &effect), None);
    }

    #[test]
    fn min_units_uses_tier_count() {
        let resolver = VariableResolver::default();
        let effect = TierEffect::new(4)
            .with_match(MIN_UNITS, 100)
            .with_variable(MIN_UNITS, 200);
        assert_eq!(
            resolver.resolve("@MinUnits@ units", &effect),
            Some("4 units".to_string())
        );
        assert_eq!(
            resolver.resolve("@MinUnits@", &TierEffect::default()),
            Some("0".to_string())
        );
    }

    #[test]
    fn match_records_take_precedence_over_variables() {
        let resolver = VariableResolver::default();
        assert_eq!(
            resolver.lookup("Bonus", &tier()),
            Some(VariableValue::Number(10.0))
        );
    }

    #[test]
    fn null_match_record_falls_back_to_variables() {
        let mut effect = TierEffect::new(2).with_variable("Bonus", 7);
        effect
            .variable_matches
            .push(traitscribe_domain::VariableMatch::null("Bonus"));
        assert_eq!(
            VariableResolver::default().resolve("@Bonus@", &effect),
            Some("7".to_string())
        );
    }

    #[test]
    fn percent_suffix_scales_and_rounds() {
        let number = |n: f64| VariableValue::Number(n);
        assert_eq!(render_value(&number(0.3), true), Some("30".to_string()));
        assert_eq!(render_value(&number(0.12345), true), Some("12.35".to_string()));
        assert_eq!(render_value(&number(0.07), true), Some("7".to_string()));
        assert_eq!(render_value(&number(0.155), true), Some("15.5".to_string()));
        assert_eq!(render_value(&number(-0.12345), true), Some("-12.35".to_string()));
        assert_eq!(render_value(&number(-0.000001), true), Some("0".to_string()));
        assert_eq!(render_value(&number(2.0), true), Some("200".to_string()));
    }

    #[test]
    fn percent_suffix_on_text_values() {
        assert_eq!(
            render_value(&VariableValue::from("0.25"), true),
            Some("25".to_string())
        );
        assert_eq!(render_value(&VariableValue::from("Bruiser"), true), None);
        assert_eq!(
            VariableResolver::default().resolve("@Name*100@", &tier()),
            None
        );
    }

    #[test]
    fn unscaled_values_render_naturally() {
        assert_eq!(
            render_value(&VariableValue::Number(0.1 + 0.2), false),
            Some("0.30000000000000004".to_string())
        );
        assert_eq!(
            render_value(&VariableValue::Number(15.0), false),
            Some("15".to_string())
        );
    }

    #[test]
    fn lists_placeholders() {
        assert_eq!(
            placeholders("@A@ x @B_2*100@ @bad @"),
            vec![
                Placeholder {
                    name: "A",
                    percent: false
                },
                Placeholder {
                    name: "B_2",
                    percent: true
                },
            ]
        );
    }

    #[test]
    fn max_units_lookup_is_opt_in() {
        let effect = TierEffect::new(2).with_max(3);
        assert_eq!(
            VariableResolver::default().resolve("@MinUnits@-@MaxUnits@", &effect),
            None
        );

        let resolver = VariableResolver::default().with_lookup(MaxUnitsLookup);
        assert_eq!(
            resolver.resolve("@MinUnits@-@MaxUnits@", &effect),
            Some("2-3".to_string())
        );
        assert_eq!(
            resolver.resolve("@MaxUnits@", &TierEffect::new(6)),
            None
        );
    }

    #[test]
    fn scanning_continues_after_a_failed_lookup() {
        let mut lookup = MockVariableLookup::new();
        lookup
            .expect_lookup()
            .with(eq("Missing"), mockall::predicate::always())
            .times(1)
            .returning(|_, _| None);
        lookup
            .expect_lookup()
            .with(eq("Bonus"), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Some(VariableValue::Number(10.0)));

        let resolver = VariableResolver::new(vec![Box::new(lookup)]);
        assert_eq!(resolver.resolve("@Missing@ then @Bonus@", &tier()), None);
    }

    #[test]
    fn chain_stops_at_first_answer() {
        let mut first = MockVariableLookup::new();
        first
            .expect_lookup()
            .times(1)
            .returning(|_, _| Some(VariableValue::Number(1.0)));
        let mut second = MockVariableLookup::new();
        second.expect_lookup().never();

        let resolver = VariableResolver::new(vec![Box::new(first), Box::new(second)]);
        assert_eq!(resolver.resolve("@X@", &tier()), Some("1".to_string()));
    }

    #[test]
    fn chain_falls_through_unanswered_names() {
        let mut first = MockVariableLookup::new();
        first.expect_lookup().times(1).returning(|_, _| None);
        let mut second = MockVariableLookup::new();
        second
            .expect_lookup()
            .times(1)
            .returning(|_, _| Some(VariableValue::from("ok")));

        let resolver = VariableResolver::new(vec![Box::new(first), Box::new(second)]);
        assert_eq!(resolver.resolve("@X@", &tier()), Some("ok".to_string()));
    }
}
