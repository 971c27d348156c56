//! Parley interactive console — library crate.
//!
//! Re-exports all modules so external crates (e.g. `pl-e2e-tests`) can
//! access internal types like `Resolver`, `ScriptedConsole`, and
//! `run_interactive`.

pub mod config;
pub mod console;
pub mod mock;
pub mod resolver;

// Re-exports for convenience.
pub use config::ConsoleConfig;
pub use console::{Console, MessageHandler, StdioConsole, run_interactive};
pub use mock::{ScriptedConsole, TranscriptEntry};
pub use resolver::{ResolveError, Resolver};
