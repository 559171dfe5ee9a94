//! Storage layer for nutrack.
//!
//! This crate provides the seam to the hierarchical document store and the
//! generic access layer the domain services are built on:
//!
//! - [`DocumentStore`]: the store client interface (get, insert, set,
//!   delete, ordered/paged/ranged queries over collection paths)
//! - [`RocksStore`]: the production backend, `RocksDB` with CBOR-encoded
//!   field maps
//! - [`MemoryStore`]: an in-memory backend for tests and embedding
//! - [`Documents`]: the access layer with uniform expected-failure
//!   semantics ("Document not found", "No documents found")
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nutrack_store::{schema, Documents, MemoryStore};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), nutrack_store::AccessError> {
//! let docs = Documents::new(Arc::new(MemoryStore::new()));
//!
//! let fields = json!({ "fullName": "Ana" });
//! let Some(fields) = fields.as_object() else { unreachable!() };
//! docs.create_with_id(&schema::users(), "u1", fields.clone()).await?;
//!
//! let doc = docs.get_by_id(&schema::users(), "u1").await?;
//! assert_eq!(doc.field("fullName"), Some(&json!("Ana")));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod document;
pub mod error;
pub mod keys;
pub mod memory;
pub mod order;
pub mod paths;
pub mod rocks;
pub mod schema;

pub use access::Documents;
pub use document::{generate_id, Document, Fields};
pub use error::{AccessError, Result, StoreError};
pub use memory::MemoryStore;
pub use order::Direction;
pub use paths::CollectionPath;
pub use rocks::RocksStore;

use async_trait::async_trait;
use serde_json::Value;

/// The document store client interface.
///
/// Models a hierarchical, schemaless store addressed by collection paths
/// and document ids. Implementations must support ordering, keyset
/// pagination, and a range filter combined with an order-by on the same
/// field. An instance is constructed once at startup and injected into
/// the access layer; it is safe for unlimited concurrent use.
///
/// Documents missing a query's order-by field are excluded from that
/// query's results.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn get(&self, collection: &CollectionPath, id: &str) -> Result<Option<Document>>;

    /// Insert a document under a store-generated id; returns the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn insert(&self, collection: &CollectionPath, fields: Fields) -> Result<String>;

    /// Write a document at a caller-chosen id, overwriting any existing
    /// document there.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn set(&self, collection: &CollectionPath, id: &str, fields: Fields) -> Result<()>;

    /// Remove a document. Removing an absent document is not an error at
    /// this level; the access layer decides whether absence matters.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<()>;

    /// All documents of a collection ordered by `order_by`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn query_ordered(
        &self,
        collection: &CollectionPath,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>>;

    /// Up to `limit` documents ordered by `order_by`, starting strictly
    /// after `start_after` in the sort direction when provided (keyset
    /// pagination).
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn query_page(
        &self,
        collection: &CollectionPath,
        order_by: &str,
        direction: Direction,
        start_after: Option<&Value>,
        limit: usize,
    ) -> Result<Vec<Document>> {
        let sorted = self.query_ordered(collection, order_by, direction).await?;
        Ok(sorted
            .into_iter()
            .filter(|doc| match (start_after, doc.field(order_by)) {
                (Some(cursor), Some(value)) => order::after_cursor(value, cursor, direction),
                _ => true,
            })
            .take(limit)
            .collect())
    }

    /// Documents whose `order_by` value lies in `[start, end]` inclusive,
    /// ordered by the same field.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn query_range(
        &self,
        collection: &CollectionPath,
        order_by: &str,
        start: &Value,
        end: &Value,
        direction: Direction,
    ) -> Result<Vec<Document>> {
        let sorted = self.query_ordered(collection, order_by, direction).await?;
        Ok(sorted
            .into_iter()
            .filter(|doc| {
                doc.field(order_by)
                    .is_some_and(|value| order::within_range(value, start, end))
            })
            .collect())
    }
}
