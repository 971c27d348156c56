//! In-memory answer store for testing without a real database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::store::AnswerStore;

/// Mock implementation of the [`AnswerStore`] trait.
///
/// Backed by a plain map. Thread-safe via `Mutex` (fine for test
/// contexts).
pub struct MockAnswerStore {
    records: Mutex<HashMap<String, String>>,
    failing: Mutex<bool>,
}

impl MockAnswerStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            failing: Mutex::new(false),
        }
    }

    /// Seed a record, builder-style.
    pub fn with_answer(self, key: &str, value: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent call fail with a request error.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Snapshot of all stored records.
    pub fn records(&self) -> HashMap<String, String> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MockAnswerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerStore for MockAnswerStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if *self.failing.lock().unwrap() {
            return Err(StoreError::Request("mock failure".into()));
        }
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(StoreError::Request("mock failure".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
