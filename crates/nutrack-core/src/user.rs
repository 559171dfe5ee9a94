//! User records.
//!
//! Users are stored at the top level of the document hierarchy, keyed by
//! an externally assigned id (the account identity), unlike the history
//! records which live in per-user subcollections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::validate::{finish, require_non_empty, Validate, ValidationError};

/// Account role.
///
/// Only the two enumerated values are representable; any other wire value
/// is rejected when the record is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Free account.
    #[default]
    Standard,
    /// Paying account.
    Paid,
}

impl Role {
    /// The wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "paid" => Ok(Self::Paid),
            other => Err(ValidationError::single(format!(
                "the \"role\" field must be one of: standard, paid (got \"{other}\")"
            ))),
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document id; the account's external identity. Absent until the
    /// record is bound to a storage key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name. Required non-empty at validation time.
    #[serde(default)]
    pub full_name: String,

    /// Contact email. Required non-empty at validation time.
    #[serde(default)]
    pub email: String,

    /// When the account was registered. Defaults to creation time.
    #[serde(default = "Utc::now")]
    pub registered_at: DateTime<Utc>,

    /// Account role. Defaults to [`Role::Standard`].
    #[serde(default)]
    pub role: Role,

    /// Free-form per-user settings. Defaults to empty.
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl User {
    /// Build a user from a raw JSON payload, filling defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the payload has a field of the
    /// wrong type or a role outside `standard`/`paid`.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        crate::validate::from_value(value)
    }

    /// Project the record to exactly the stored field set.
    ///
    /// The id is dropped: it is the storage key, not a stored field.
    ///
    /// # Panics
    ///
    /// Never panics; the serde representation of a `User` is always a JSON
    /// object.
    #[must_use]
    pub fn to_fields(&self) -> Map<String, Value> {
        let Value::Object(mut fields) = serde_json::to_value(self).expect("user serializes")
        else {
            unreachable!("user serializes to an object")
        };
        fields.remove("id");
        fields
    }

    /// Return the record bound to a storage id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "fullName", &self.full_name);
        require_non_empty(&mut violations, "email", &self.email);
        finish(violations)
    }
}
