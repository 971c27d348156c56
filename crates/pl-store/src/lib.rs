//! Remote key/value answer store client for Parley.
//!
//! Stored answers live under the `answers/` namespace of a
//! Firebase-RTDB-style REST database, one free-text string per intent
//! identifier:
//! - `AnswerStore` trait for get/set (mockable in tests)
//! - `HttpAnswerStore` for production
//! - `MockAnswerStore` for testing without a backend

pub mod config;
pub mod error;
pub mod mock;
pub mod store;

// Re-exports for convenience.
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use mock::MockAnswerStore;
pub use store::{AnswerStore, HttpAnswerStore};
