//! Wire-level error body returned by the branches API

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured error response consumed from the API
///
/// `errors` maps field names to validation messages and is only present
/// on validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiErrorBody {
    /// Fallback body for responses whose payload is not decodable JSON
    pub fn synthetic(status: StatusCode) -> Self {
        Self {
            message: format!("HTTP error! status: {}", status.as_u16()),
            errors: None,
        }
    }

    /// Whether this body carries a field-level `errors` map
    ///
    /// Presence of the key is what counts, even with an empty map;
    /// this gates the user-facing notification.
    pub fn has_validation_errors(&self) -> bool {
        self.errors.is_some()
    }
}
