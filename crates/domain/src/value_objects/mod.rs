//! Value objects - Immutable objects defined by their attributes

mod variable_value;

pub use variable_value::{format_number, VariableValue};
