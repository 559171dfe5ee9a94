//! Error types for the storage layer.

/// Result type for store backend operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Faults raised by a document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A collection path was malformed.
    #[error("invalid collection path: {0}")]
    InvalidPath(String),
}

/// Expected failures of the document-access layer.
///
/// Access-layer operations never raise for expected conditions; absence
/// and emptiness are values of this type, and backend faults are carried
/// with their raw message attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The requested document does not exist.
    #[error("Document not found")]
    NotFound,

    /// The query matched no documents.
    #[error("No documents found")]
    Empty,

    /// The underlying store client failed; carries the raw message.
    #[error("{0}")]
    Store(String),
}

impl From<StoreError> for AccessError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
