//! Documents and document ids.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

/// The schemaless field map of a stored document.
pub type Fields = serde_json::Map<String, Value>;

/// A document read from or written to a collection.
///
/// The id is the storage key and is kept alongside the fields, never
/// inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The document id within its collection.
    pub id: String,

    /// The stored field map.
    pub fields: Fields,
}

impl Document {
    /// Build a document from its id and field map.
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Look up a single field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Flatten to a JSON object with the id injected as an `id` field,
    /// the shape callers consume.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("id".into(), Value::String(self.id.clone()));
        Value::Object(object)
    }
}

/// Generate a store-assigned document id.
///
/// ULIDs are time-ordered, so generated ids sort in creation order the
/// way the original store's push ids do.
#[must_use]
pub fn generate_id() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fields are objects"),
        }
    }

    #[test]
    fn to_value_injects_the_id() {
        let doc = Document::new("d1", fields(json!({ "productId": "p1" })));
        assert_eq!(doc.to_value(), json!({ "id": "d1", "productId": "p1" }));
        // The stored fields themselves stay id-free.
        assert!(doc.field("id").is_none());
    }

    #[test]
    fn generated_ids_are_unique_and_time_ordered() {
        let a = generate_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = generate_id();
        assert_ne!(a, b);
        assert!(a < b, "{a} should sort before {b}");
    }
}
