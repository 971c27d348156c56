//! HTTP client for the classification service.
//!
//! Two endpoints:
//! - `GET {base}/message?v={ver}&n={n}&q={text}` — classify one
//!   utterance into ranked entities
//! - `POST {base}/samples?v={ver}` — submit labeled samples for
//!   incremental training
//!
//! Calls are synchronous per invocation: no caching, no rate limiting,
//! no retries. The caller decides what to do with a failure.

use async_trait::async_trait;
use serde::Deserialize;

use pl_protocol::{ClassificationResult, Sample};

use crate::config::NluConfig;
use crate::error::{NluError, NluResult};

// ── Nlu trait ─────────────────────────────────────────────────

/// Abstraction over the classification service.
///
/// Enables mocking in tests without a real NLU backend.
#[async_trait]
pub trait Nlu: Send + Sync {
    /// Classify `text`, requesting up to `n` candidates per entity kind.
    async fn classify(&self, text: &str, n: usize) -> NluResult<ClassificationResult>;

    /// Submit labeled samples for training. Returns the accepted count.
    async fn submit_samples(&self, samples: &[Sample]) -> NluResult<usize>;
}

// ── HTTP implementation ───────────────────────────────────────

/// Training endpoint acknowledgement (only the field we need).
#[derive(Deserialize)]
struct SubmitResponse {
    n: usize,
}

/// Production client with a static bearer token.
pub struct HttpNluClient {
    client: reqwest::Client,
    config: NluConfig,
}

impl HttpNluClient {
    pub fn new(config: NluConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }

    async fn check_status(response: reqwest::Response) -> NluResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NluError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Nlu for HttpNluClient {
    async fn classify(&self, text: &str, n: usize) -> NluResult<ClassificationResult> {
        let url = format!("{}/message", self.config.base_url);
        let n = n.to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .query(&[
                ("v", self.config.api_version.as_str()),
                ("n", n.as_str()),
                ("q", text),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let result: ClassificationResult = response
            .json()
            .await
            .map_err(|e| NluError::Decode(e.to_string()))?;

        tracing::debug!(
            text,
            entity_kinds = result.entities.len(),
            "classified utterance"
        );
        Ok(result)
    }

    async fn submit_samples(&self, samples: &[Sample]) -> NluResult<usize> {
        let url = format!("{}/samples", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .query(&[("v", self.config.api_version.as_str())])
            .json(samples)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let receipt: SubmitResponse = response
            .json()
            .await
            .map_err(|e| NluError::Decode(e.to_string()))?;

        tracing::info!(accepted = receipt.n, "samples submitted for training");
        Ok(receipt.n)
    }
}
