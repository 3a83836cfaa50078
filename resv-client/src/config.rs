//! Client configuration

use thiserror::Error;

/// Default proxied base path used in dev mode
const DEV_BASE_URL: &str = "/api";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// Unrecognized mode value
    #[error("invalid API mode: {0} (expected \"dev\" or \"prod\")")]
    InvalidMode(String),
}

/// How the client reaches the branches API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    /// Relative base path, proxied by the dev server; no credential
    #[default]
    Dev,
    /// Absolute base URL with a bearer token
    Prod,
}

/// Client configuration for connecting to the branches API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base — proxied path in dev, absolute URL in prod
    pub base_url: String,

    /// Deployment mode
    pub mode: ApiMode,

    /// Bearer token attached to every request (prod)
    pub token: Option<String>,
}

impl ClientConfig {
    /// Dev-mode configuration with a proxied base path
    pub fn dev(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            mode: ApiMode::Dev,
            token: None,
        }
    }

    /// Prod-mode configuration with an absolute base URL and token
    pub fn prod(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            mode: ApiMode::Prod,
            token: Some(token.into()),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load configuration from the environment
    ///
    /// Reads `RESV_API_MODE` (`dev`/`prod`, default dev),
    /// `RESV_API_BASE_URL` and `RESV_API_TOKEN`. Prod mode requires
    /// both the base URL and the token.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match std::env::var("RESV_API_MODE").as_deref() {
            Ok("prod") => ApiMode::Prod,
            Ok("dev") | Err(_) => ApiMode::Dev,
            Ok(other) => return Err(ConfigError::InvalidMode(other.to_string())),
        };

        match mode {
            ApiMode::Dev => {
                let base_url = std::env::var("RESV_API_BASE_URL")
                    .unwrap_or_else(|_| DEV_BASE_URL.to_string());
                Ok(Self::dev(base_url))
            }
            ApiMode::Prod => {
                let base_url = std::env::var("RESV_API_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("RESV_API_BASE_URL"))?;
                let token = std::env::var("RESV_API_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("RESV_API_TOKEN"))?;
                Ok(Self::prod(base_url, token))
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::dev(DEV_BASE_URL)
    }
}
