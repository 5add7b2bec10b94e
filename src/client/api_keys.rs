//! `/api-keys` endpoints.

use reqwest::Method;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::{ListResponse, ResendClient};
use crate::error::ResendApiError;
use crate::secret::Secret;
use crate::types::Permission;

/// Body of `POST /api-keys`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApiKeyRequest {
    /// Display name of the key.
    pub name: String,
    /// Access level.
    pub permission: Permission,
    /// Restrict sending to one domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

/// Response of `POST /api-keys`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApiKeyResponse {
    /// Resend ID of the key.
    pub id: String,
    /// The key itself. Only ever returned once.
    pub token: Secret,
}

/// Entry of `GET /api-keys`. Tokens are never listed.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySummary {
    /// Resend ID of the key.
    pub id: String,
    /// Display name of the key.
    pub name: String,
    /// Creation timestamp as reported by Resend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// API key endpoints of a [`ResendClient`].
#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    client: &'a ResendClient,
}

impl<'a> ApiKeys<'a> {
    pub(crate) fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Create an API key.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn create(
        &self,
        request: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse, ResendApiError> {
        let builder = self.client.request(Method::POST, "/api-keys").json(request);
        self.client.execute(builder).await
    }

    /// List API keys.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn list(&self) -> Result<Vec<ApiKeySummary>, ResendApiError> {
        let builder = self.client.request(Method::GET, "/api-keys");
        let page: ListResponse<ApiKeySummary> = self.client.execute(builder).await?;
        Ok(page.data)
    }

    /// Delete an API key by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn remove(&self, id: &str) -> Result<(), ResendApiError> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api-keys/{id}"));
        let _: IgnoredAny = self.client.execute(builder).await?;
        Ok(())
    }
}
