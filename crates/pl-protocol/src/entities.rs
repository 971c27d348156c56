//! Classification result types returned by the NLU service.

use std::collections::HashMap;

use serde::Deserialize;

/// Entity kind under which the service reports intent candidates.
pub const INTENT_KIND: &str = "intent";

/// Entity kind for date/time mentions extracted alongside an intent.
pub const DATETIME_KIND: &str = "datetime";

/// One ranked candidate for an entity kind.
///
/// The kind itself is the key in [`ClassificationResult::entities`],
/// not a field here. Deserialize-only: classification results come in
/// off the wire, they never go back out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    /// Extracted value (e.g. an intent name, or a datetime phrase).
    pub value: String,
    /// Classifier certainty in [0, 1].
    pub confidence: f64,
}

/// NLU response for one utterance: entity kind → ranked candidates.
///
/// Per-kind sequences arrive most-confident first; that ordering is a
/// contract of the service and is consumed as given, never re-sorted.
/// Unknown response fields (echoed text, message ids) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationResult {
    #[serde(default)]
    pub entities: HashMap<String, Vec<Entity>>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by mocks and tests: append a candidate under `kind`.
    pub fn with_entity(mut self, kind: &str, value: &str, confidence: f64) -> Self {
        self.entities.entry(kind.to_string()).or_default().push(Entity {
            value: value.to_string(),
            confidence,
        });
        self
    }

    /// All candidates for `kind`, most-confident first. Empty when absent.
    pub fn entities_for(&self, kind: &str) -> &[Entity] {
        self.entities.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Highest-confidence entity for `kind`, or `None` when the kind is
/// absent or its sequence is empty.
pub fn top_entity<'a>(result: &'a ClassificationResult, kind: &str) -> Option<&'a Entity> {
    result.entities.get(kind).and_then(|seq| seq.first())
}
