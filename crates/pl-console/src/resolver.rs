//! Intent resolution policy.
//!
//! Per utterance: classify, then either answer directly from the store
//! (high confidence) or fall back to an interactive disambiguation
//! whose outcome is fed back to the NLU service as a training sample.
//! Any transport or store failure aborts resolution of that utterance
//! only; the outer loop keeps prompting.

use async_trait::async_trait;
use thiserror::Error;

use pl_nlu::{Nlu, NluError};
use pl_protocol::{DATETIME_KIND, Entity, INTENT_KIND, Sample, derive_intent_id, top_entity};
use pl_store::{AnswerStore, StoreError};

use crate::console::{Console, MessageHandler};

/// Minimum top-intent confidence for auto-resolution.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Candidates requested per entity kind on classification.
pub const CANDIDATE_COUNT: usize = 3;

/// Disambiguation choice that defines a brand-new intent.
const NEW_CHOICE: &str = "new";

/// The bot's speaker prefix on output lines.
const BOT: &str = "🤖 ";

/// Errors that abort resolution of a single utterance.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Nlu(#[from] NluError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Confidence-thresholded intent resolver over an NLU client and an
/// answer store.
pub struct Resolver<N, S> {
    nlu: N,
    store: S,
    threshold: f64,
    candidate_count: usize,
}

impl<N: Nlu, S: AnswerStore> Resolver<N, S> {
    pub fn new(nlu: N, store: S) -> Self {
        Self {
            nlu,
            store,
            threshold: CONFIDENCE_THRESHOLD,
            candidate_count: CANDIDATE_COUNT,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    /// The underlying NLU client (integration tests assert against mocks).
    pub fn nlu(&self) -> &N {
        &self.nlu
    }

    /// The underlying answer store (integration tests assert against mocks).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve one utterance end to end.
    pub async fn resolve(&self, question: &str, console: &dyn Console) -> Result<(), ResolveError> {
        let result = self.nlu.classify(question, self.candidate_count).await?;
        let intents = result.entities_for(INTENT_KIND);
        let datetime = top_entity(&result, DATETIME_KIND);

        match intents.first() {
            Some(best) if best.confidence >= self.threshold => {
                tracing::debug!(
                    intent = %best.value,
                    confidence = best.confidence,
                    "auto-resolving"
                );
                self.answer(best, datetime, console).await
            }
            best => {
                tracing::debug!(
                    candidates = intents.len(),
                    confidence = best.map(|b| b.confidence),
                    "below threshold, disambiguating"
                );
                self.disambiguate(question, intents, console).await
            }
        }
    }

    /// High-confidence path: answer from the store, falling back to the
    /// intent value itself, with the datetime side channel when present.
    async fn answer(
        &self,
        best: &Entity,
        datetime: Option<&Entity>,
        console: &dyn Console,
    ) -> Result<(), ResolveError> {
        let stored = self.store.get(&best.value).await?;
        let display = stored.unwrap_or_else(|| best.value.clone());
        match datetime {
            Some(dt) => console.say(&format!("{BOT} {display} ({})", dt.value)),
            None => console.say(&format!("{BOT} {display}")),
        }
        Ok(())
    }

    /// Low-confidence path: one disambiguation prompt over the N-best
    /// candidates plus `new`. Free-form choices are accepted verbatim.
    async fn disambiguate(
        &self,
        question: &str,
        intents: &[Entity],
        console: &dyn Console,
    ) -> Result<(), ResolveError> {
        console.say(&format!("{BOT} what would you like to do?"));
        for intent in intents {
            console.say(&format!(" -- {}", intent.value));
        }
        console.say(&format!(" -- {NEW_CHOICE}"));

        let Some(choice) = ask_nonblank(console, "choice > ").await else {
            return Ok(());
        };

        if choice == NEW_CHOICE {
            return self.record_new_answer(question, console).await;
        }

        console.say(&format!("{BOT} okay, running > {choice}"));
        let accepted = self
            .nlu
            .submit_samples(&[Sample::intent(question, &choice)])
            .await?;
        console.say(&format!("validated {accepted}!"));
        Ok(())
    }

    /// The `new` path: take a free-text answer, derive a stable intent
    /// identifier from it, train on the pair, store the answer text.
    /// The save confirmation runs only after the store write completes.
    async fn record_new_answer(
        &self,
        question: &str,
        console: &dyn Console,
    ) -> Result<(), ResolveError> {
        console.say(&format!("{BOT} How would you answer this question?"));

        let (answer, intent_id) = loop {
            let Some(answer) = ask_nonblank(console, "answer > ").await else {
                return Ok(());
            };
            let id = derive_intent_id(&answer);
            if id.is_empty() {
                console.say(&format!("{BOT} I need at least one letter or digit in there."));
                continue;
            }
            break (answer, id);
        };

        let accepted = self
            .nlu
            .submit_samples(&[Sample::intent(question, &intent_id)])
            .await?;
        console.say(&format!("validated {accepted}!"));

        self.store.set(&intent_id, &answer).await?;
        console.say(&format!("{BOT} ok! saved"));
        Ok(())
    }
}

/// Re-prompt until a non-blank line arrives. `None` on end-of-input.
async fn ask_nonblank(console: &dyn Console, prompt: &str) -> Option<String> {
    loop {
        let line = console.ask(prompt).await?;
        let line = line.trim();
        if !line.is_empty() {
            return Some(line.to_string());
        }
    }
}

#[async_trait]
impl<N: Nlu, S: AnswerStore> MessageHandler for Resolver<N, S> {
    async fn handle(&self, line: &str, console: &dyn Console) {
        if let Err(e) = self.resolve(line, console).await {
            tracing::warn!(error = %e, utterance = line, "resolution failed");
            console.say(&format!("{BOT} sorry, something went wrong. try again!"));
        }
    }
}
