//! NLU service connection settings.

use serde::Deserialize;

/// Configuration for the classification service endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NluConfig {
    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static bearer token sent on every request.
    pub access_token: String,
    /// API version pinned via the `v` query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.wit.ai".into()
}
fn default_api_version() -> String {
    "20170307".into()
}
fn default_timeout_secs() -> u64 {
    10
}
