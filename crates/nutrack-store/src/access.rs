//! Generic document-access layer.
//!
//! [`Documents`] wraps an injected store client with uniform result
//! semantics: expected conditions (a missing document, an empty query)
//! come back as [`AccessError`] values with fixed messages, and any fault
//! of the underlying client is caught at this boundary and converted to
//! the same shape with the raw message attached. Nothing here raises for
//! an expected condition, so callers branch on one `Result` everywhere.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::document::{Document, Fields};
use crate::error::AccessError;
use crate::order::Direction;
use crate::paths::CollectionPath;
use crate::DocumentStore;

/// The document-access layer over an injected store client.
///
/// Cheap to clone; clones share the client.
#[derive(Clone)]
pub struct Documents {
    store: Arc<dyn DocumentStore>,
}

impl Documents {
    /// Wrap a store client.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch one document by id.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] if the document is absent;
    /// [`AccessError::Store`] on a client fault.
    pub async fn get_by_id(
        &self,
        collection: &CollectionPath,
        id: &str,
    ) -> Result<Document, AccessError> {
        self.store
            .get(collection, id)
            .await
            .map_err(|e| store_failure(collection, "get", &e))?
            .ok_or(AccessError::NotFound)
    }

    /// Insert a new document under a store-generated id; returns the id.
    ///
    /// # Errors
    ///
    /// [`AccessError::Store`] on a client fault.
    pub async fn create(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> Result<String, AccessError> {
        self.store
            .insert(collection, fields)
            .await
            .map_err(|e| store_failure(collection, "create", &e))
    }

    /// Write a document at a caller-chosen id, overwriting any existing
    /// document there.
    ///
    /// # Errors
    ///
    /// [`AccessError::Store`] on a client fault.
    pub async fn create_with_id(
        &self,
        collection: &CollectionPath,
        id: &str,
        fields: Fields,
    ) -> Result<(), AccessError> {
        self.store
            .set(collection, id, fields)
            .await
            .map_err(|e| store_failure(collection, "create_with_id", &e))
    }

    /// Replace the fields of an existing document.
    ///
    /// Existence is checked first: updating an id that was never created
    /// fails instead of silently materializing a document. (Two writers
    /// racing between check and write can still lose an update; this
    /// layer carries no concurrency token.)
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] if the document is absent;
    /// [`AccessError::Store`] on a client fault.
    pub async fn update(
        &self,
        collection: &CollectionPath,
        id: &str,
        fields: Fields,
    ) -> Result<(), AccessError> {
        self.get_by_id(collection, id).await?;
        self.store
            .set(collection, id, fields)
            .await
            .map_err(|e| store_failure(collection, "update", &e))
    }

    /// Delete a document by id, checking existence first.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] if the document is absent;
    /// [`AccessError::Store`] on a client fault.
    pub async fn delete_by_id(
        &self,
        collection: &CollectionPath,
        id: &str,
    ) -> Result<(), AccessError> {
        self.get_by_id(collection, id).await?;
        self.store
            .delete(collection, id)
            .await
            .map_err(|e| store_failure(collection, "delete", &e))
    }

    /// All documents of a collection ordered by `field`.
    ///
    /// # Errors
    ///
    /// [`AccessError::Empty`] if the collection has no matching
    /// documents; [`AccessError::Store`] on a client fault.
    pub async fn list_ordered_by(
        &self,
        collection: &CollectionPath,
        field: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, AccessError> {
        let docs = self
            .store
            .query_ordered(collection, field, direction)
            .await
            .map_err(|e| store_failure(collection, "list_ordered_by", &e))?;
        non_empty(docs)
    }

    /// Up to `limit` documents ordered by `field`, starting strictly
    /// after `start_after` in the sort direction when provided.
    ///
    /// # Errors
    ///
    /// [`AccessError::Empty`] if no documents match;
    /// [`AccessError::Store`] on a client fault.
    pub async fn list_with_cursor(
        &self,
        collection: &CollectionPath,
        field: &str,
        direction: Direction,
        start_after: Option<&Value>,
        limit: usize,
    ) -> Result<Vec<Document>, AccessError> {
        let docs = self
            .store
            .query_page(collection, field, direction, start_after, limit)
            .await
            .map_err(|e| store_failure(collection, "list_with_cursor", &e))?;
        non_empty(docs)
    }

    /// Documents whose `field` lies in `[start, end]` inclusive, ordered
    /// by the same field.
    ///
    /// # Errors
    ///
    /// [`AccessError::Empty`] if no documents match;
    /// [`AccessError::Store`] on a client fault.
    pub async fn list_by_date_range(
        &self,
        collection: &CollectionPath,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        field: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, AccessError> {
        let start = Value::String(start.to_rfc3339());
        let end = Value::String(end.to_rfc3339());
        let docs = self
            .store
            .query_range(collection, field, &start, &end, direction)
            .await
            .map_err(|e| store_failure(collection, "list_by_date_range", &e))?;
        non_empty(docs)
    }
}

/// Convert a backend fault into the uniform failure shape, keeping the
/// raw message for the caller and the context for the log.
fn store_failure(
    collection: &CollectionPath,
    operation: &str,
    error: &crate::StoreError,
) -> AccessError {
    tracing::warn!(collection = %collection, operation, error = %error, "store client fault");
    AccessError::Store(error.to_string())
}

fn non_empty(docs: Vec<Document>) -> Result<Vec<Document>, AccessError> {
    if docs.is_empty() {
        Err(AccessError::Empty)
    } else {
        Ok(docs)
    }
}
