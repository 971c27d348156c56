//! NLU service client for Parley.
//!
//! Provides a typed HTTP abstraction over the classification service:
//! - `Nlu` trait for classify/train (mockable in tests)
//! - `HttpNluClient` with a static bearer token for production
//! - `MockNlu` for testing without the network

pub mod client;
pub mod config;
pub mod error;
pub mod mock;

// Re-exports for convenience.
pub use client::{HttpNluClient, Nlu};
pub use config::NluConfig;
pub use error::{NluError, NluResult};
pub use mock::MockNlu;
