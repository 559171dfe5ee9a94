//! In-memory store backend.
//!
//! A fake store client for tests and embedded use: the same contract as
//! [`RocksStore`](crate::RocksStore) over plain maps, no disk involved.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::document::{generate_id, Document, Fields};
use crate::error::{Result, StoreError};
use crate::order::{self, Direction};
use crate::paths::CollectionPath;
use crate::DocumentStore;

type Collections = BTreeMap<String, BTreeMap<String, Fields>>;

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|_| StoreError::Database("store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|_| StoreError::Database("store lock poisoned".into()))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &CollectionPath, id: &str) -> Result<Option<Document>> {
        let collections = self.read()?;
        Ok(collections
            .get(collection.as_str())
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn insert(&self, collection: &CollectionPath, fields: Fields) -> Result<String> {
        let id = generate_id();
        self.set(collection, &id, fields).await?;
        Ok(id)
    }

    async fn set(&self, collection: &CollectionPath, id: &str, fields: Fields) -> Result<()> {
        let mut collections = self.write()?;
        collections
            .entry(collection.as_str().to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<()> {
        let mut collections = self.write()?;
        if let Some(docs) = collections.get_mut(collection.as_str()) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn query_ordered(
        &self,
        collection: &CollectionPath,
        order_by: &str,
        direction: Direction,
    ) -> Result<Vec<Document>> {
        let docs = {
            let collections = self.read()?;
            collections
                .get(collection.as_str())
                .map(|docs| {
                    docs.iter()
                        .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        };
        Ok(order::sorted_by_field(docs, order_by, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fields are objects"),
        }
    }

    #[tokio::test]
    async fn behaves_like_the_rocks_backend() {
        let store = MemoryStore::new();
        let collection = schema::search_history("u1").unwrap();

        let id = store
            .insert(
                &collection,
                fields(json!({ "searchedAt": "2026-01-02T00:00:00Z", "productId": "p1" })),
            )
            .await
            .unwrap();
        store
            .set(
                &collection,
                "manual",
                fields(json!({ "searchedAt": "2026-01-01T00:00:00Z", "productId": "p2" })),
            )
            .await
            .unwrap();

        let doc = store.get(&collection, &id).await.unwrap().unwrap();
        assert_eq!(doc.field("productId"), Some(&json!("p1")));

        let ordered = store
            .query_ordered(&collection, "searchedAt", Direction::Asc)
            .await
            .unwrap();
        assert_eq!(ordered[0].id, "manual");
        assert_eq!(ordered[1].id, id);

        let page = store
            .query_page(
                &collection,
                "searchedAt",
                Direction::Asc,
                Some(&json!("2026-01-01T00:00:00Z")),
                10,
            )
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, id);

        let ranged = store
            .query_range(
                &collection,
                "searchedAt",
                &json!("2026-01-01T00:00:00Z"),
                &json!("2026-01-01T00:00:00Z"),
                Direction::Asc,
            )
            .await
            .unwrap();
        assert_eq!(ranged.len(), 1);
        assert_eq!(ranged[0].id, "manual");

        store.delete(&collection, "manual").await.unwrap();
        assert!(store.get(&collection, "manual").await.unwrap().is_none());
        // Deleting an absent document is a no-op at this level.
        store.delete(&collection, "manual").await.unwrap();
    }
}
