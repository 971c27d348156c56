//! Scripted console for testing without a terminal.
//!
//! Serves queued input lines and records the full interaction
//! transcript (prompts issued, lines said) for assertion in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::console::Console;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// A line of bot output.
    Said(String),
    /// A prompt issued before reading input.
    Prompted(String),
}

/// Mock implementation of the [`Console`] trait.
///
/// `ask` pops queued inputs in order; an exhausted queue reads as
/// end-of-input. Thread-safe via `Mutex` (fine for test contexts).
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<TranscriptEntry>>,
}

impl ScriptedConsole {
    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Full interaction transcript in order.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().unwrap().clone()
    }

    /// All bot output lines, in order.
    pub fn said(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|e| match e {
                TranscriptEntry::Said(line) => Some(line),
                TranscriptEntry::Prompted(_) => None,
            })
            .collect()
    }

    /// All prompts issued, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|e| match e {
                TranscriptEntry::Prompted(prompt) => Some(prompt),
                TranscriptEntry::Said(_) => None,
            })
            .collect()
    }

    /// Whether any said line contains `needle`.
    pub fn said_containing(&self, needle: &str) -> bool {
        self.said().iter().any(|line| line.contains(needle))
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    fn say(&self, line: &str) {
        self.transcript
            .lock()
            .unwrap()
            .push(TranscriptEntry::Said(line.to_string()));
    }

    async fn ask(&self, prompt: &str) -> Option<String> {
        self.transcript
            .lock()
            .unwrap()
            .push(TranscriptEntry::Prompted(prompt.to_string()));
        self.inputs.lock().unwrap().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_inputs_in_order_then_eof() {
        let console = ScriptedConsole::with_inputs(&["a", "b"]);
        assert_eq!(console.ask("> ").await.as_deref(), Some("a"));
        assert_eq!(console.ask("> ").await.as_deref(), Some("b"));
        assert!(console.ask("> ").await.is_none());
    }

    #[tokio::test]
    async fn transcript_preserves_interleaving() {
        let console = ScriptedConsole::with_inputs(&["x"]);
        console.say("hello");
        console.ask("choice > ").await;
        console.say("done");

        assert_eq!(
            console.transcript(),
            vec![
                TranscriptEntry::Said("hello".into()),
                TranscriptEntry::Prompted("choice > ".into()),
                TranscriptEntry::Said("done".into()),
            ]
        );
        assert_eq!(console.prompts(), vec!["choice > ".to_string()]);
        assert!(console.said_containing("ell"));
    }
}
