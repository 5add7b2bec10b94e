//! Authenticated HTTP client for the Resend API.
//!
//! [`create_client`] is the client factory used by every resource adapter.
//! It resolves the credential (explicit argument first, then the injected
//! [`ResendConfig`]) and fails before any network call when none is found.
//! Clients are cheap and are not cached between invocations.
//!
//! Every non-success response and transport failure is converted into a
//! [`ResendApiError`] here, so callers only ever see one remote error kind.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ResendConfig;
use crate::error::{ConfigError, ResendApiError};
use crate::secret::Secret;

pub mod api_keys;
pub mod webhooks;

pub use api_keys::{ApiKeySummary, ApiKeys, CreateApiKeyRequest, CreateApiKeyResponse};
pub use webhooks::{
    CreateWebhookRequest, CreateWebhookResponse, UpdateWebhookRequest, UpdateWebhookResponse,
    WebhookDetails, Webhooks,
};

/// Envelope used by Resend list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    /// Items in the page.
    pub data: Vec<T>,
}

/// Resend API client bound to a single credential.
#[derive(Debug, Clone)]
pub struct ResendClient {
    base_url: String,
    api_key: Secret,
    http: reqwest::Client,
}

/// Build a client for one adapter invocation.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] when no credential is available,
/// or [`ConfigError::Client`] if the HTTP client cannot be built.
pub fn create_client(
    config: &ResendConfig,
    api_key: Option<&Secret>,
) -> Result<ResendClient, ConfigError> {
    let api_key = config.resolve_api_key(api_key)?;
    ResendClient::new(api_key, config)
}

impl ResendClient {
    /// Create a client for a resolved credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Client`] if the HTTP client cannot be built.
    pub fn new(api_key: Secret, config: &ResendConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key,
            http,
        })
    }

    /// API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key endpoints.
    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(self)
    }

    /// Webhook endpoints.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = %method, path, "resend request");
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(self.api_key.expose())
    }

    /// Send a request and decode the JSON body into `T`.
    ///
    /// An empty success body decodes as JSON `null`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ResendApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ResendApiError::from_transport(&e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ResendApiError::from_transport(&e))?;

        if !status.is_success() {
            let err = ResendApiError::from_response_body(status.as_u16(), &body);
            debug!(status = status.as_u16(), name = %err.name, "resend request failed");
            return Err(err);
        }

        let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(payload)
            .map_err(|e| ResendApiError::invalid_response(status.as_u16(), e))
    }
}
