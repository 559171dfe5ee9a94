//! Search history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validate::{finish, require_non_empty, Validate, ValidationError};

/// One product search performed by a user.
///
/// Owned by exactly one user: entries live in that user's
/// `historial_busqueda` subcollection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// Store-assigned document id; absent until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the search happened. Defaults to now; also the sort field for
    /// every history query.
    #[serde(default = "Utc::now")]
    pub searched_at: DateTime<Utc>,

    /// The product that was searched. Required non-empty.
    #[serde(default)]
    pub product_id: String,

    /// Whether the user followed through to a store page.
    #[serde(default)]
    pub redirected_to_store: bool,

    /// The store that was opened, when a redirect happened.
    #[serde(default)]
    pub store_id: String,

    /// Caller-managed liveness flag; the storage layer never interprets it.
    #[serde(default = "crate::default_active")]
    pub active: bool,
}

impl SearchHistoryEntry {
    /// Field the history queries order and window by.
    pub const DATE_FIELD: &'static str = "searchedAt";

    /// Build an entry from a raw JSON payload, filling defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the payload has a field of the
    /// wrong type.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        crate::validate::from_value(value)
    }

    /// Project the record to exactly the stored field set (id dropped).
    ///
    /// # Panics
    ///
    /// Never panics; the serde representation is always a JSON object.
    #[must_use]
    pub fn to_fields(&self) -> Map<String, Value> {
        let Value::Object(mut fields) =
            serde_json::to_value(self).expect("entry serializes to an object")
        else {
            unreachable!("record shapes serialize to objects")
        };
        fields.remove("id");
        fields
    }
}

impl Validate for SearchHistoryEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "productId", &self.product_id);
        finish(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_missing_optionals() {
        let entry = SearchHistoryEntry::from_value(json!({ "productId": "p1" })).unwrap();

        assert!(entry.id.is_none());
        assert!(!entry.redirected_to_store);
        assert_eq!(entry.store_id, "");
        assert!(entry.active);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn missing_product_id_fails_validation() {
        let entry = SearchHistoryEntry::from_value(json!({})).unwrap();
        let err = entry.validate().unwrap_err();
        assert_eq!(err.to_string(), "the \"productId\" field is required");
    }

    #[test]
    fn non_boolean_redirect_flag_is_rejected() {
        let err = SearchHistoryEntry::from_value(json!({
            "productId": "p1",
            "redirectedToStore": "yes",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("boolean"), "{err}");
    }

    #[test]
    fn to_fields_uses_wire_names_and_drops_id() {
        let mut entry = SearchHistoryEntry::from_value(json!({
            "productId": "p1",
            "redirectedToStore": true,
            "storeId": "s9",
        }))
        .unwrap();
        entry.id = Some("abc".into());

        let fields = entry.to_fields();
        assert!(!fields.contains_key("id"));
        assert_eq!(fields["productId"], "p1");
        assert_eq!(fields["redirectedToStore"], true);
        assert_eq!(fields["storeId"], "s9");
        assert!(fields.contains_key(SearchHistoryEntry::DATE_FIELD));
    }
}
