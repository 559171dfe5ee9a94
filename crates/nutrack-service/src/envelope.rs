//! The uniform response envelope.

use serde::Serialize;

/// JSON body shared by every successful response:
/// `{ success, data?, message?, id? }`. Absent members are omitted, not
/// null. Failures use the same shape with `success: false`, built by the
/// error layer.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    /// Always `true` for envelopes built by these constructors.
    pub success: bool,

    /// The operation's payload, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable outcome message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Store-assigned id for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl<T> Envelope<T> {
    /// A success carrying only data.
    #[must_use]
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            id: None,
        }
    }

    /// A success carrying data and an outcome message.
    #[must_use]
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            id: None,
        }
    }

    /// A success carrying only an outcome message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            id: None,
        }
    }

    /// A create success carrying the new document id.
    #[must_use]
    pub fn created(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_members_are_omitted() {
        let body = serde_json::to_value(Envelope::data(json!({ "a": 1 }))).unwrap();
        assert_eq!(body, json!({ "success": true, "data": { "a": 1 } }));

        let body = serde_json::to_value(Envelope::<()>::created("d1", "Record added successfully"))
            .unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "id": "d1", "message": "Record added successfully" })
        );
    }
}
