//! Branch Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::reservation_times::ReservationTimes;
use super::section::Section;

/// Branch entity — a physical business location
///
/// Disabling reservations leaves `reservation_duration` and
/// `reservation_times` untouched; prior configuration survives a
/// disable/enable cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub name_localized: Option<String>,
    pub reference: String,
    #[serde(rename = "type")]
    pub branch_type: i32,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub phone: Option<String>,
    pub opening_from: String,
    pub opening_to: String,
    pub inventory_end_of_day_time: String,
    pub receipt_header: Option<String>,
    pub receipt_footer: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub receives_online_orders: bool,
    pub accepts_reservations: bool,
    pub reservation_duration: u32,
    #[serde(default)]
    pub reservation_times: ReservationTimes,
    pub address: Option<String>,
    /// Present only when the fetch included sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

/// Branch list response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchesResponse {
    pub data: Vec<Branch>,
}

/// Branch update response envelope (server echo, kept opaque)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub data: Value,
}

/// Partial branch update payload
///
/// `None` fields are omitted from the request body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBranchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_reservations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_times: Option<ReservationTimes>,
}

impl UpdateBranchPayload {
    /// Payload setting only `accepts_reservations = true`
    pub fn enable_reservations() -> Self {
        Self {
            accepts_reservations: Some(true),
            ..Self::default()
        }
    }

    /// Payload setting only `accepts_reservations = false`
    pub fn disable_reservations() -> Self {
        Self {
            accepts_reservations: Some(false),
            ..Self::default()
        }
    }

    /// Payload updating duration and weekly windows together
    pub fn settings(duration: u32, times: ReservationTimes) -> Self {
        Self {
            reservation_duration: Some(duration),
            reservation_times: Some(times),
            ..Self::default()
        }
    }
}
