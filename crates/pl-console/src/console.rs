//! Interactive read-line loop and its I/O seam.
//!
//! The loop owns the process's line-based input/output channel for its
//! entire lifetime. Each non-blank, non-quit line is dispatched to a
//! `MessageHandler`, and the handler's completion is awaited before the
//! next prompt is issued: at most one in-flight handler at any time.
//! Handlers may recursively `ask` on the same console for secondary
//! input (disambiguation), not a separate sub-loop.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Primary prompt string.
pub const PROMPT: &str = "> ";

/// Sentinel command that terminates the loop.
pub const QUIT_COMMAND: &str = "q";

/// Farewell emitted on quit or end-of-input.
pub const FAREWELL: &str = "good bye! :)";

// ── Console trait ─────────────────────────────────────────────

/// The line-based input/output channel.
///
/// Enables scripting in tests without a terminal.
#[async_trait]
pub trait Console: Send + Sync {
    /// Emit one line of bot output.
    fn say(&self, line: &str);

    /// Issue `prompt` and read one line. `None` on end-of-input.
    async fn ask(&self, prompt: &str) -> Option<String>;
}

/// Handler invoked once per submitted line.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Process one utterance. May `ask` the console for further input.
    async fn handle(&self, line: &str, console: &dyn Console);
}

// ── Stdio implementation ──────────────────────────────────────

/// Console over process stdin/stdout.
pub struct StdioConsole {
    lines: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            lines: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    fn say(&self, line: &str) {
        println!("{line}");
    }

    async fn ask(&self, prompt: &str) -> Option<String> {
        use std::io::Write;
        print!("{prompt}");
        let _ = std::io::stdout().flush();

        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed, treating as end-of-input");
                None
            }
        }
    }
}

// ── The loop ──────────────────────────────────────────────────

/// Drive the prompt/dispatch loop until the quit sentinel or
/// end-of-input, then emit the farewell.
///
/// Blank (whitespace-only) lines re-prompt without dispatching; all
/// other lines are trimmed before being handed to the handler.
pub async fn run_interactive(console: &dyn Console, handler: &dyn MessageHandler) {
    loop {
        let Some(line) = console.ask(PROMPT).await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == QUIT_COMMAND {
            break;
        }
        handler.handle(line, console).await;
    }
    console.say(FAREWELL);
}
