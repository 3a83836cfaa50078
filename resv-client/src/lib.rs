//! Client core for the branch reservation admin interface
//!
//! Thin client over the remote branches API: a single HTTP gateway
//! ([`api::HttpBranchApi`]) with uniform error normalization, and a
//! shared reservation store ([`store::ReservationStore`]) holding the
//! authoritative branch list plus loading/error status and derived
//! views. The presentation layer consumes the store; everything else
//! is wiring.

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod store;

// Re-export main types
pub use api::{BranchApi, HttpBranchApi};
pub use config::{ApiMode, ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use notify::{Notifier, TracingNotifier};
pub use store::{ReservationStore, TableOption, reservation_tables_count, table_options};
