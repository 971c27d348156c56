//! Mock NLU client for testing without a real classification service.
//!
//! Serves canned classification results keyed by utterance and records
//! all submitted samples for assertion in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use pl_protocol::{ClassificationResult, Sample};

use crate::client::Nlu;
use crate::error::{NluError, NluResult};

/// Mock implementation of the [`Nlu`] trait.
///
/// Unmatched utterances classify to an empty result. Thread-safe via
/// `Mutex` (fine for test contexts).
pub struct MockNlu {
    responses: Mutex<HashMap<String, ClassificationResult>>,
    submitted: Mutex<Vec<Sample>>,
    classify_calls: Mutex<Vec<(String, usize)>>,
    failing: Mutex<bool>,
}

impl MockNlu {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
            classify_calls: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        }
    }

    /// Register the result returned when `text` is classified.
    pub fn with_response(self, text: &str, result: ClassificationResult) -> Self {
        self.responses.lock().unwrap().insert(text.to_string(), result);
        self
    }

    /// Make every subsequent call fail with a request error.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// All samples submitted so far, in submission order.
    pub fn submitted(&self) -> Vec<Sample> {
        self.submitted.lock().unwrap().clone()
    }

    /// All classify calls so far as `(text, n)` pairs.
    pub fn classify_calls(&self) -> Vec<(String, usize)> {
        self.classify_calls.lock().unwrap().clone()
    }
}

impl Default for MockNlu {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Nlu for MockNlu {
    async fn classify(&self, text: &str, n: usize) -> NluResult<ClassificationResult> {
        if *self.failing.lock().unwrap() {
            return Err(NluError::Request("mock failure".into()));
        }
        self.classify_calls
            .lock()
            .unwrap()
            .push((text.to_string(), n));
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_default())
    }

    async fn submit_samples(&self, samples: &[Sample]) -> NluResult<usize> {
        if *self.failing.lock().unwrap() {
            return Err(NluError::Request("mock failure".into()));
        }
        self.submitted.lock().unwrap().extend_from_slice(samples);
        Ok(samples.len())
    }
}
