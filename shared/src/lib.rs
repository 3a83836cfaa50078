//! Shared types for the branch reservation admin client
//!
//! Wire-level records mirroring the branches API: entities, request
//! payloads, response envelopes, and the structured error body.

pub mod error;
pub mod models;

// Re-exports
pub use error::ApiErrorBody;
pub use models::*;
pub use serde::{Deserialize, Serialize};
