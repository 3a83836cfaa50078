//! Table Model

use serde::{Deserialize, Serialize};

/// Seating unit within a section
///
/// Reservation capability is independent of the owning section's and
/// branch's flags: no cascade is enforced in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub section_id: String,
    pub name: String,
    pub status: i32,
    pub seats: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub accepts_reservations: bool,
}
