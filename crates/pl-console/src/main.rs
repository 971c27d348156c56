//! Parley console — interactive NLU answer bot.
//!
//! Wires the NLU client, the remote answer store, and the intent
//! resolver into a single read-line binary.

use tracing_subscriber::EnvFilter;

use pl_console::config::ConsoleConfig;
use pl_console::console::{StdioConsole, run_interactive};
use pl_console::resolver::Resolver;
use pl_nlu::HttpNluClient;
use pl_store::HttpAnswerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is the conversational surface; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pl-console starting");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "parley.toml".to_string());
    let config = ConsoleConfig::from_file(&config_path)?;
    tracing::info!(
        nlu = %config.nlu.base_url,
        store = %config.store.base_url,
        threshold = config.confidence_threshold,
        "config loaded"
    );

    let resolver = Resolver::new(
        HttpNluClient::new(config.nlu),
        HttpAnswerStore::new(config.store),
    )
    .with_threshold(config.confidence_threshold)
    .with_candidate_count(config.candidate_count);

    let console = StdioConsole::new();
    run_interactive(&console, &resolver).await;

    tracing::info!("pl-console stopped");
    Ok(())
}
