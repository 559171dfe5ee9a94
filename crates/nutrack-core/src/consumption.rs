//! Consumption history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::validate::{finish, require_non_empty, Validate, ValidationError};

/// One product consumption logged by a user.
///
/// Owned by exactly one user: entries live in that user's
/// `historial_consumo` subcollection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionHistoryEntry {
    /// Store-assigned document id; absent until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The product that was consumed. Required non-empty.
    #[serde(default)]
    pub product_id: String,

    /// When the consumption was logged. Defaults to now; also the sort
    /// field for every history query.
    #[serde(default = "Utc::now")]
    pub consumed_at: DateTime<Utc>,

    /// How much of the product was consumed. Defaults to 0.
    #[serde(default)]
    pub quantity_consumed: f64,

    /// Nutrient name to ingested amount. Defaults to empty.
    #[serde(default)]
    pub nutrients_ingested: BTreeMap<String, f64>,

    /// Caller-managed liveness flag; the storage layer never interprets it.
    #[serde(default = "crate::default_active")]
    pub active: bool,
}

impl ConsumptionHistoryEntry {
    /// Field the history queries order and window by.
    pub const DATE_FIELD: &'static str = "consumedAt";

    /// Build an entry from a raw JSON payload, filling defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the payload has a field of the
    /// wrong type, e.g. a non-numeric quantity or nutrient amount.
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

impl Validate for ConsumptionHistoryEntry {
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
        let entry = ConsumptionHistoryEntry::from_value(json!({ "productId": "p1" })).unwrap();

        assert!(entry.id.is_none());
        assert!((entry.quantity_consumed - 0.0).abs() < f64::EPSILON);
        assert!(entry.nutrients_ingested.is_empty());
        assert!(entry.active);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn missing_product_id_fails_validation() {
        let entry = ConsumptionHistoryEntry::from_value(json!({ "quantityConsumed": 2 })).unwrap();
        let err = entry.validate().unwrap_err();
        assert_eq!(err.to_string(), "the \"productId\" field is required");
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let err = ConsumptionHistoryEntry::from_value(json!({
            "productId": "p1",
            "quantityConsumed": "two",
        }))
        .unwrap_err();
        assert!(!err.violations().is_empty());
    }

    #[test]
    fn nutrient_map_round_trips() {
        let entry = ConsumptionHistoryEntry::from_value(json!({
            "productId": "p1",
            "quantityConsumed": 2,
            "nutrientsIngested": { "calories": 150.0, "protein": 12.5 },
        }))
        .unwrap();

        assert_eq!(entry.nutrients_ingested["calories"], 150.0);

        let fields = entry.to_fields();
        assert!(!fields.contains_key("id"));
        assert_eq!(fields["nutrientsIngested"]["protein"], 12.5);
        assert!(fields.contains_key(ConsumptionHistoryEntry::DATE_FIELD));
    }
}
