//! Console configuration, loadable from TOML.

use serde::Deserialize;

use pl_nlu::NluConfig;
use pl_store::StoreConfig;

use crate::resolver::{CANDIDATE_COUNT, CONFIDENCE_THRESHOLD};

/// Top-level configuration for the interactive console.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// NLU service connection settings.
    pub nlu: NluConfig,
    /// Answer store connection settings.
    pub store: StoreConfig,
    /// Candidates requested per entity kind on classification.
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
    /// Minimum top-intent confidence for auto-resolution.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

fn default_candidate_count() -> usize {
    CANDIDATE_COUNT
}

fn default_confidence_threshold() -> f64 {
    CONFIDENCE_THRESHOLD
}

impl ConsoleConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
