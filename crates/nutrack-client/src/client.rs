//! Nutrack HTTP client implementation.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use nutrack_core::{ConsumptionHistoryEntry, SearchHistoryEntry, User};

use crate::error::ClientError;
use crate::types::{ApiResult, ExistsResult, OrderDirection};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Options for constructing a [`NutrackClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Nutrack API client.
///
/// Provides typed methods over the service's envelope responses.
#[derive(Debug, Clone)]
pub struct NutrackClient {
    client: Client,
    base_url: String,
}

impl NutrackClient {
    /// Create a new nutrack client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the nutrack service
    ///   (e.g., `"http://nutrack:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new nutrack client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Create a user. The payload carries the account id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn create_user(&self, body: Value) -> Result<User, ClientError> {
        let url = format!("{}/users", self.base_url);
        let response = self.client.post(&url).json(&body).send().await?;
        Self::data(Self::envelope(response).await?)
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    pub async fn get_user(&self, uid: &str) -> Result<User, ClientError> {
        let url = format!("{}/users/{uid}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::data(Self::envelope(response).await?)
    }

    /// Replace a user's record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn update_user(&self, uid: &str, body: Value) -> Result<User, ClientError> {
        let url = format!("{}/users/{uid}", self.base_url);
        let response = self.client.put(&url).json(&body).send().await?;
        Self::data(Self::envelope(response).await?)
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    pub async fn delete_user(&self, uid: &str) -> Result<(), ClientError> {
        let url = format!("{}/users/{uid}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::envelope::<Value>(response).await?;
        Ok(())
    }

    /// Probe whether a user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn user_exists(&self, uid: &str) -> Result<bool, ClientError> {
        let url = format!("{}/users/{uid}/exists", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body: ExistsResult = response.json().await?;
        if !status.is_success() || !body.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: "existence probe failed".into(),
            });
        }
        Ok(body.exists)
    }

    // =========================================================================
    // Search history
    // =========================================================================

    /// List a user's entire search history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the history is empty.
    pub async fn search_history_all(
        &self,
        uid: &str,
        direction: OrderDirection,
    ) -> Result<Vec<SearchHistoryEntry>, ClientError> {
        let url = format!("{}/search-history/{uid}/all", self.base_url);
        self.list(&url, direction, None, None).await
    }

    /// List one page of a user's search history, optionally resuming
    /// strictly after a previous page's last timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    pub async fn search_history_page(
        &self,
        uid: &str,
        limit: usize,
        direction: OrderDirection,
        start_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<SearchHistoryEntry>, ClientError> {
        let url = format!("{}/search-history/{uid}/limit", self.base_url);
        self.list(&url, direction, Some(limit), start_after).await
    }

    /// List the last `days` days of a user's search history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    pub async fn search_history_by_days(
        &self,
        uid: &str,
        days: i64,
        direction: OrderDirection,
    ) -> Result<Vec<SearchHistoryEntry>, ClientError> {
        let url = format!("{}/search-history/{uid}/{days}", self.base_url);
        self.list(&url, direction, None, None).await
    }

    /// Add a search history entry; returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn add_search_history(&self, uid: &str, body: Value) -> Result<String, ClientError> {
        let url = format!("{}/search-history/{uid}", self.base_url);
        let response = self.client.post(&url).json(&body).send().await?;
        Self::created_id(Self::envelope::<Value>(response).await?)
    }

    /// Delete one search history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the entry does not exist.
    pub async fn delete_search_history(
        &self,
        uid: &str,
        record_id: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/search-history/{uid}/{record_id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::envelope::<Value>(response).await?;
        Ok(())
    }

    // =========================================================================
    // Consumption history
    // =========================================================================

    /// List a user's entire consumption history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the history is empty.
    pub async fn consumption_history_all(
        &self,
        uid: &str,
        direction: OrderDirection,
    ) -> Result<Vec<ConsumptionHistoryEntry>, ClientError> {
        let url = format!("{}/consumption-history/{uid}/all", self.base_url);
        self.list(&url, direction, None, None).await
    }

    /// List one page of a user's consumption history, optionally resuming
    /// strictly after a previous page's last timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    pub async fn consumption_history_page(
        &self,
        uid: &str,
        limit: usize,
        direction: OrderDirection,
        start_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConsumptionHistoryEntry>, ClientError> {
        let url = format!("{}/consumption-history/{uid}/limit", self.base_url);
        self.list(&url, direction, Some(limit), start_after).await
    }

    /// List the last `days` days of a user's consumption history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nothing matches.
    pub async fn consumption_history_by_days(
        &self,
        uid: &str,
        days: i64,
        direction: OrderDirection,
    ) -> Result<Vec<ConsumptionHistoryEntry>, ClientError> {
        let url = format!("{}/consumption-history/{uid}/{days}", self.base_url);
        self.list(&url, direction, None, None).await
    }

    /// Add a consumption history entry; returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn add_consumption_history(
        &self,
        uid: &str,
        body: Value,
    ) -> Result<String, ClientError> {
        let url = format!("{}/consumption-history/{uid}", self.base_url);
        let response = self.client.post(&url).json(&body).send().await?;
        Self::created_id(Self::envelope::<Value>(response).await?)
    }

    /// Delete one consumption history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the entry does not exist.
    pub async fn delete_consumption_history(
        &self,
        uid: &str,
        record_id: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/consumption-history/{uid}/{record_id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::envelope::<Value>(response).await?;
        Ok(())
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Issue a listing request with the shared query parameters.
    async fn list<T: DeserializeOwned>(
        &self,
        url: &str,
        direction: OrderDirection,
        limit: Option<usize>,
        start_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<T>, ClientError> {
        let mut query: Vec<(&str, String)> =
            vec![("orderDirection", direction.as_str().to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(ts) = start_after {
            query.push(("startAfter", ts.to_rfc3339()));
        }

        let response = self.client.get(url).query(&query).send().await?;
        Self::data(Self::envelope(response).await?)
    }

    /// Decode an envelope response, turning HTTP failures and
    /// `success: false` envelopes into [`ClientError::Api`].
    async fn envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResult<T>, ClientError> {
        let status = response.status();
        let body: ApiResult<T> = response.json().await?;

        if !status.is_success() || !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "request failed".to_string());
            tracing::debug!(status = status.as_u16(), message = %message, "API failure");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    /// Pull the data member out of a success envelope.
    fn data<T>(body: ApiResult<T>) -> Result<T, ClientError> {
        body.data
            .ok_or_else(|| ClientError::UnexpectedResponse("success without data".into()))
    }

    /// Pull the created id out of a success envelope.
    fn created_id<T>(body: ApiResult<T>) -> Result<String, ClientError> {
        body.id
            .ok_or_else(|| ClientError::UnexpectedResponse("create without id".into()))
    }
}
