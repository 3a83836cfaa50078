//! Data models
//!
//! Fetched verbatim from the remote branches API and round-tripped
//! losslessly. Server timestamps stay opaque strings. All IDs are
//! opaque strings.

pub mod branch;
pub mod reservation_times;
pub mod section;
pub mod table;

// Re-exports
pub use branch::*;
pub use reservation_times::*;
pub use section::*;
pub use table::*;
