//! HTTP gateway for the branches API
//!
//! Single choke point for outbound calls. Non-2xx responses are
//! normalized into [`ClientError::Http`] carrying the decoded error
//! body (or a synthetic one when the body is not JSON); validation
//! failures additionally fire a user notification. Failures are never
//! recovered here — one attempt per call, no retry, no timeout.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::notify::{Notifier, TracingNotifier, format_validation_message};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{ApiErrorBody, BranchesResponse, UpdateBranchPayload, UpdateResponse};
use std::sync::Arc;

/// Nested includes so one fetch returns branches with their sections
/// and tables
const BRANCHES_PATH: &str = "branches?include[0]=sections&include[1]=sections.tables";

/// Gateway to the branches resource
#[async_trait]
pub trait BranchApi: Send + Sync {
    /// Fetch all branches including nested sections and tables
    async fn get_branches(&self) -> ClientResult<BranchesResponse>;

    /// Send a partial update for one branch
    async fn update_branch(
        &self,
        branch_id: &str,
        payload: &UpdateBranchPayload,
    ) -> ClientResult<UpdateResponse>;

    /// Enable reservations for a branch
    async fn enable_reservations(&self, branch_id: &str) -> ClientResult<UpdateResponse> {
        self.update_branch(branch_id, &UpdateBranchPayload::enable_reservations())
            .await
    }

    /// Disable reservations for a branch
    async fn disable_reservations(&self, branch_id: &str) -> ClientResult<UpdateResponse> {
        self.update_branch(branch_id, &UpdateBranchPayload::disable_reservations())
            .await
    }
}

/// Network gateway implementation over reqwest
#[derive(Clone)]
pub struct HttpBranchApi {
    client: Client,
    base_url: String,
    token: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl HttpBranchApi {
    /// Create a gateway from configuration, notifying via tracing
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    /// Create a gateway with a custom notification sink
    pub fn with_notifier(
        config: &ClientConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            notifier,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn apply_headers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req = req
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let req = self.apply_headers(self.client.get(&url));
        let response = req.send().await.inspect_err(|e| {
            tracing::error!(method = "GET", %url, error = %e, "API request failed");
        })?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let req = self.apply_headers(self.client.put(&url)).json(body);
        let response = req.send().await.inspect_err(|e| {
            tracing::error!(method = "PUT", %url, error = %e, "API request failed");
        })?;
        self.handle_response(response).await
    }

    /// Normalize a response into the uniform error shape
    ///
    /// Non-2xx: decode the error body (synthetic fallback), notify on
    /// validation errors, return `Http` either way. 2xx with a body
    /// that does not parse is `Decode`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<ApiErrorBody>(&text)
                .unwrap_or_else(|_| ApiErrorBody::synthetic(status));
            if body.has_validation_errors() {
                self.notifier.error(&format_validation_message(&body));
            }
            tracing::error!(%status, message = %body.message, "API returned error");
            return Err(ClientError::Http { status, body });
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(%status, error = %e, "Failed to decode API response");
            ClientError::Decode(e)
        })
    }
}

#[async_trait]
impl BranchApi for HttpBranchApi {
    async fn get_branches(&self) -> ClientResult<BranchesResponse> {
        self.get(BRANCHES_PATH).await
    }

    async fn update_branch(
        &self,
        branch_id: &str,
        payload: &UpdateBranchPayload,
    ) -> ClientResult<UpdateResponse> {
        self.put(&format!("branches/{}", branch_id), payload).await
    }
}
