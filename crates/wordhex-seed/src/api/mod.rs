//! REST client for the hosted data API.
//!
//! The backend exposes each table as a collection endpoint under
//! `/rest/v1/{table}`. Every request authenticates with the anonymous key
//! via the `apikey` header and a bearer `Authorization` header. Uniqueness
//! of `words.value` is enforced remotely; a duplicate insert comes back as
//! HTTP 409 and is a reportable outcome here, not an error.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{BackendConfig, RecordShape};
use crate::words::WordRecord;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned status {0} when listing words")]
    UnexpectedStatus(StatusCode),
}

/// Result of probing a table's collection endpoint.
///
/// `Unverified` means the probe itself could not be made; it is kept
/// distinct from `Missing` because the operator guidance differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    Present,
    Missing(StatusCode),
    Unverified(String),
}

impl TableStatus {
    /// Classifies a probe response. Transport failures never reach this
    /// function; they map to `Unverified` at the call site.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            Self::Present
        } else {
            Self::Missing(status)
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Outcome of a single insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Remote unique-constraint violation on `value`.
    AlreadyExists,
    /// Any other non-success status.
    Rejected(StatusCode),
    /// Transport-level failure (timeout, connection error).
    Failed(String),
}

impl InsertOutcome {
    /// Classifies an insert response status.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            Self::Inserted
        } else if status == StatusCode::CONFLICT {
            Self::AlreadyExists
        } else {
            Self::Rejected(status)
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A word row as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredWord {
    pub value: String,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Client for the per-table REST endpoints.
pub struct DataApiClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl DataApiClient {
    /// Creates a client with the configured per-request timeout.
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Issues a zero-row read against a table's endpoint to test whether the
    /// table exists.
    pub async fn probe_table(&self, table: &str) -> TableStatus {
        let url = self.table_url(table);

        match self
            .authed(self.client.get(&url))
            .query(&[("limit", "0")])
            .send()
            .await
        {
            Ok(resp) => {
                debug!("Probe of {} returned {}", table, resp.status());
                TableStatus::from_status(resp.status())
            }
            Err(e) => TableStatus::Unverified(e.to_string()),
        }
    }

    /// Posts one word record to the `words` endpoint in the given shape.
    pub async fn insert_word(&self, record: &WordRecord, shape: RecordShape) -> InsertOutcome {
        let url = self.table_url("words");
        let payload = record.payload(shape);

        match self
            .authed(self.client.post(&url))
            .json(&payload)
            .send()
            .await
        {
            Ok(resp) => {
                debug!("Insert of {} returned {}", record.value, resp.status());
                InsertOutcome::from_status(resp.status())
            }
            Err(e) => InsertOutcome::Failed(e.to_string()),
        }
    }

    /// Fetches up to `limit` stored words for the post-seed spot check.
    pub async fn fetch_words(&self, limit: usize) -> Result<Vec<StoredWord>, ApiError> {
        let url = self.table_url("words");

        let resp = self
            .authed(self.client.get(&url))
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ApiError::UnexpectedStatus(resp.status()));
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_success_is_present() {
        assert_eq!(TableStatus::from_status(StatusCode::OK), TableStatus::Present);
        assert!(TableStatus::from_status(StatusCode::OK).is_present());
    }

    #[test]
    fn test_probe_failure_is_missing() {
        assert_eq!(
            TableStatus::from_status(StatusCode::NOT_FOUND),
            TableStatus::Missing(StatusCode::NOT_FOUND)
        );
        assert_eq!(
            TableStatus::from_status(StatusCode::UNAUTHORIZED),
            TableStatus::Missing(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn test_unverified_is_not_missing() {
        // Transport failure must stay distinct from a definite "not found".
        let status = TableStatus::Unverified("connection timed out".to_string());
        assert!(!status.is_present());
        assert_ne!(status, TableStatus::Missing(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_insert_success_statuses() {
        assert_eq!(InsertOutcome::from_status(StatusCode::CREATED), InsertOutcome::Inserted);
        assert_eq!(InsertOutcome::from_status(StatusCode::OK), InsertOutcome::Inserted);
    }

    #[test]
    fn test_insert_conflict() {
        assert_eq!(
            InsertOutcome::from_status(StatusCode::CONFLICT),
            InsertOutcome::AlreadyExists
        );
    }

    #[test]
    fn test_insert_other_rejection() {
        assert_eq!(
            InsertOutcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            InsertOutcome::Rejected(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(
            InsertOutcome::from_status(StatusCode::BAD_REQUEST),
            InsertOutcome::Rejected(StatusCode::BAD_REQUEST)
        );
    }

    #[test]
    fn test_table_url() {
        let client = DataApiClient::new(&BackendConfig {
            base_url: "https://example.supabase.co".to_string(),
            anon_key: "key".to_string(),
            timeout: std::time::Duration::from_secs(5),
        })
        .unwrap();

        assert_eq!(
            client.table_url("words"),
            "https://example.supabase.co/rest/v1/words"
        );
    }
}
