//! Section Model

use serde::{Deserialize, Serialize};

use super::table::Table;

/// Named subdivision of a branch (hall, terrace, private room, ...)
///
/// Owns its tables in insertion order; the order carries no semantics.
/// Back-references the owning branch by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub branch_id: String,
    pub name: String,
    pub name_localized: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}
