pub mod entities;
pub mod intent;
pub mod samples;

pub use entities::*;
pub use intent::derive_intent_id;
pub use samples::*;
