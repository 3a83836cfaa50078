//! Client error types

use http::StatusCode;
use shared::ApiErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure before a response was received
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, carries the decoded (or synthetic) error body
    #[error("HTTP {status}: {}", .body.message)]
    Http { status: StatusCode, body: ApiErrorBody },

    /// 2xx response whose body did not parse
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
