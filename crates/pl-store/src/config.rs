//! Answer store connection settings.

use serde::Deserialize;

/// Configuration for the remote answer database.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Database base URL (e.g. `https://<project>.firebaseio.com`).
    pub base_url: String,
    /// Optional auth token appended as the `auth` query parameter.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Top-level namespace answers are stored under.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_namespace() -> String {
    "answers".into()
}
fn default_timeout_secs() -> u64 {
    10
}
