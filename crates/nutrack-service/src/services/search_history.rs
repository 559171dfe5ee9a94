//! Search history service.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use nutrack_core::{SearchHistoryEntry, Validate};
use nutrack_store::{schema, AccessError, Direction, Document, Documents};

use crate::error::ServiceError;

/// Operations on a user's search history partition.
#[derive(Clone)]
pub struct SearchHistoryService {
    docs: Documents,
}

impl SearchHistoryService {
    /// Build the service over the document-access layer.
    #[must_use]
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    /// All entries for a user, ordered by search date.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged; an empty partition is
    /// "No documents found".
    pub async fn get_all(
        &self,
        uid: &str,
        direction: Direction,
    ) -> Result<Vec<SearchHistoryEntry>, ServiceError> {
        let path = schema::search_history(uid).map_err(AccessError::from)?;
        let docs = self
            .docs
            .list_ordered_by(&path, SearchHistoryEntry::DATE_FIELD, direction)
            .await?;
        parse_entries(&docs)
    }

    /// Up to `limit` entries ordered by search date, optionally resuming
    /// strictly after a previous page's last timestamp.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged.
    pub async fn get_with_limit(
        &self,
        uid: &str,
        limit: usize,
        direction: Direction,
        start_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<SearchHistoryEntry>, ServiceError> {
        let path = schema::search_history(uid).map_err(AccessError::from)?;
        let cursor = start_after.map(|ts| Value::String(ts.to_rfc3339()));
        let docs = self
            .docs
            .list_with_cursor(
                &path,
                SearchHistoryEntry::DATE_FIELD,
                direction,
                cursor.as_ref(),
                limit,
            )
            .await?;
        parse_entries(&docs)
    }

    /// Entries of the last `days` days, ordered by search date. The
    /// window is `[now - days, now]` with a minimum span of one day.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged.
    pub async fn get_by_days(
        &self,
        uid: &str,
        days: i64,
        direction: Direction,
    ) -> Result<Vec<SearchHistoryEntry>, ServiceError> {
        let path = schema::search_history(uid).map_err(AccessError::from)?;
        let now = Utc::now();
        let start = now - Duration::days(days.max(1));
        let docs = self
            .docs
            .list_by_date_range(&path, start, now, SearchHistoryEntry::DATE_FIELD, direction)
            .await?;
        parse_entries(&docs)
    }

    /// Validate and persist a new entry; returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Validation failures, or the access layer's failure unchanged.
    pub async fn add(&self, uid: &str, body: Value) -> Result<String, ServiceError> {
        let entry = SearchHistoryEntry::from_value(body)?;
        entry.validate()?;

        let path = schema::search_history(uid).map_err(AccessError::from)?;
        let id = self.docs.create(&path, entry.to_fields()).await?;

        tracing::info!(uid = %uid, record_id = %id, "search history entry added");
        Ok(id)
    }

    /// Delete one entry from a user's partition.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged.
    pub async fn delete(&self, uid: &str, record_id: &str) -> Result<(), ServiceError> {
        let path = schema::search_history(uid).map_err(AccessError::from)?;
        self.docs.delete_by_id(&path, record_id).await?;

        tracing::info!(uid = %uid, record_id = %record_id, "search history entry deleted");
        Ok(())
    }
}

fn parse_entries(docs: &[Document]) -> Result<Vec<SearchHistoryEntry>, ServiceError> {
    docs.iter()
        .map(|doc| Ok(SearchHistoryEntry::from_value(doc.to_value())?))
        .collect()
}
