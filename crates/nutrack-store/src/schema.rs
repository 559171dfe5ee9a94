//! Persisted layout: collection names, path builders, column families.
//!
//! The namespace is two levels deep, partitioned by user:
//!
//! - `usuarios/{uid}` — user documents
//! - `usuarios/{uid}/historial_busqueda/{entryId}` — search history
//! - `usuarios/{uid}/historial_consumo/{entryId}` — consumption history

use crate::error::{Result, StoreError};
use crate::paths::CollectionPath;

/// Collection names of the persisted layout.
pub mod collections {
    /// Top-level user documents, keyed by the account id.
    pub const USERS: &str = "usuarios";

    /// Per-user search history subcollection.
    pub const SEARCH_HISTORY: &str = "historial_busqueda";

    /// Per-user consumption history subcollection.
    pub const CONSUMPTION_HISTORY: &str = "historial_consumo";
}

/// Column family names for the `RocksDB` backend.
pub mod cf {
    /// All documents, keyed by `collection-path \0 document-id`.
    pub const DOCUMENTS: &str = "documents";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::DOCUMENTS]
}

/// The top-level users collection.
///
/// # Panics
///
/// Never panics; the constant path is valid.
#[must_use]
pub fn users() -> CollectionPath {
    CollectionPath::parse(collections::USERS).expect("constant path is valid")
}

/// The search history subcollection of one user.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPath`] if `uid` is empty or contains
/// reserved characters.
pub fn search_history(uid: &str) -> Result<CollectionPath> {
    user_subcollection(uid, collections::SEARCH_HISTORY)
}

/// The consumption history subcollection of one user.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPath`] if `uid` is empty or contains
/// reserved characters.
pub fn consumption_history(uid: &str) -> Result<CollectionPath> {
    user_subcollection(uid, collections::CONSUMPTION_HISTORY)
}

fn user_subcollection(uid: &str, name: &str) -> Result<CollectionPath> {
    if uid.is_empty() {
        return Err(StoreError::InvalidPath("empty user id".into()));
    }
    CollectionPath::new([collections::USERS, uid, name])
}
