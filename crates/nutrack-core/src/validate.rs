//! Record validation.
//!
//! Validation runs as a separate pass after lenient construction: a record
//! can exist with empty required fields, but it cannot be written until
//! [`Validate::validate`] accepts it. Every violation is collected, not
//! just the first, so a caller fixing a payload sees the whole list.

use serde_json::Value;

/// A failed validation pass over a record.
///
/// Carries one message per violated rule, in the order the rules are
/// checked. `Display` joins them into a single descriptive message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .violations.join("; "))]
pub struct ValidationError {
    /// Human-readable violation messages, in check order.
    violations: Vec<String>,
}

impl ValidationError {
    /// Build an error from the collected violation messages.
    ///
    /// Callers only construct this with a non-empty list; an empty list
    /// would mean the record was valid.
    #[must_use]
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    /// Wrap a single violation message.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            violations: vec![message.into()],
        }
    }

    /// The individual violation messages.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// A record that can be checked for completeness before persistence.
pub trait Validate {
    /// Check the record against its required-field rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated rule.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Construct a record from a raw JSON value, filling defaults.
///
/// Type and enum mismatches in `value` (a non-numeric quantity, an unknown
/// role) surface as a [`ValidationError`] carrying the deserializer's
/// message.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `value` cannot represent the record.
pub fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|e| ValidationError::single(e.to_string()))
}

/// Record a violation when a required string field is empty.
pub(crate) fn require_non_empty(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.is_empty() {
        violations.push(format!("the \"{field}\" field is required"));
    }
}

/// Finish a validation pass: empty violation list means the record passed.
pub(crate) fn finish(violations: Vec<String>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}
