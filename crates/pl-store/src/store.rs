//! HTTP client for the remote answer database.
//!
//! Speaks the Firebase-RTDB REST convention: records are addressed as
//! `{base}/{namespace}/{key}.json`, bodies are JSON-encoded strings,
//! and a JSON `null` body means the record is absent. Last-write-wins;
//! no transactional guarantees.

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

// ── AnswerStore trait ─────────────────────────────────────────

/// Abstraction over the key/value answer store.
///
/// Enables mocking in tests without a real database.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Fetch the answer stored under `key`. `None` when no record
    /// exists (distinct from an empty string).
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Create or overwrite the answer under `key`.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

// ── HTTP implementation ───────────────────────────────────────

/// Production client against the REST database.
pub struct HttpAnswerStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpAnswerStore {
    pub fn new(config: StoreConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }

    fn record_url(&self, key: &str) -> String {
        format!("{}/{}/{key}.json", self.config.base_url, self.config.namespace)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.query(&[("auth", token.as_str())]),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AnswerStore for HttpAnswerStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let request = self.client.get(self.record_url(key));
        let response = Self::check_status(self.with_auth(request).send().await?).await?;

        // A missing record comes back as the JSON literal `null`.
        let value: Option<String> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        tracing::debug!(key, found = value.is_some(), "answer lookup");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let request = self.client.put(self.record_url(key)).json(&value);
        Self::check_status(self.with_auth(request).send().await?).await?;

        tracing::info!(key, "answer stored");
        Ok(())
    }
}
