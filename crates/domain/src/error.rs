//! Error types for the domain layer
//!
//! Rendering itself never fails; these errors surface only from explicit
//! checks such as tier validation.

use thiserror::Error;

/// Error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., inverted tier bounds)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for data that breaks a domain invariant.
    ///
    /// # Example
    /// ```ignore
    /// if max < min {
    ///     return Err(DomainError::validation("max below min"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
