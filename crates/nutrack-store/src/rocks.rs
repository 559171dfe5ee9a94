//! `RocksDB` store backend.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};

use crate::document::{generate_id, Document, Fields};
use crate::error::{Result, StoreError};
use crate::keys;
use crate::order::{self, Direction};
use crate::paths::CollectionPath;
use crate::schema::{all_column_families, cf};
use crate::DocumentStore;

/// `RocksDB`-backed document store.
///
/// Documents are CBOR-encoded field maps in a single column family, keyed
/// by `collection-path \0 document-id` so one prefix scan visits one
/// collection. Query ordering and filtering run in the backend over the
/// scanned collection.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a field map using CBOR.
    fn serialize(fields: &Fields) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(fields, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a field map from CBOR.
    fn deserialize(data: &[u8]) -> Result<Fields> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Load every document of one collection.
    fn scan_collection(&self, collection: &CollectionPath) -> Result<Vec<Document>> {
        let cf = self.cf(cf::DOCUMENTS)?;
        let prefix = keys::collection_prefix(collection);

        let iter = self.db.iterator_cf(
            &cf,
            IteratorMode::From(&prefix, rocksdb::Direction::Forward),
        );

        let mut docs = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            if !key.starts_with(&prefix) {
                break;
            }
            let Some(id) = keys::document_id_from_key(&key, &prefix) else {
                continue;
            };
            docs.push(Document::new(id, Self::deserialize(&value)?));
        }

        Ok(docs)
    }
}

#[async_trait]
impl DocumentStore for RocksStore {
    async fn get(&self, collection: &CollectionPath, id: &str) -> Result<Option<Document>> {
        let cf = self.cf(cf::DOCUMENTS)?;
        let key = keys::document_key(collection, id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Ok(Document::new(id, Self::deserialize(&data)?)))
            .transpose()
    }

    async fn insert(&self, collection: &CollectionPath, fields: Fields) -> Result<String> {
        let id = generate_id();
        self.set(collection, &id, fields).await?;
        Ok(id)
    }

    async fn set(&self, collection: &CollectionPath, id: &str, fields: Fields) -> Result<()> {
        let cf = self.cf(cf::DOCUMENTS)?;
        let key = keys::document_key(collection, id);
        let value = Self::serialize(&fields)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<()> {
        let cf = self.cf(cf::DOCUMENTS)?;
        let key = keys::document_key(collection, id);

        self.db
            .delete_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn query_ordered(
        &self,
        collection: &CollectionPath,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>> {
        let docs = self.scan_collection(collection)?;
        Ok(order::sorted_by_field(docs, order_by, direction))
    }
}
