//! `/webhooks` endpoints.

use reqwest::Method;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::{ListResponse, ResendClient};
use crate::error::ResendApiError;
use crate::secret::Secret;
use crate::types::{EventType, WebhookStatus};

/// Body of `POST /webhooks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookRequest {
    /// URL events are delivered to.
    pub endpoint: String,
    /// Subscribed event types.
    pub events: Vec<EventType>,
}

/// Response of `POST /webhooks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebhookResponse {
    /// Resend ID of the webhook.
    pub id: String,
    /// Secret used to verify delivered payloads.
    pub signing_secret: Secret,
}

/// Body of `PATCH /webhooks/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateWebhookRequest {
    /// URL events are delivered to.
    pub endpoint: String,
    /// Subscribed event types.
    pub events: Vec<EventType>,
    /// Delivery status.
    pub status: WebhookStatus,
}

/// Response of `PATCH /webhooks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWebhookResponse {
    /// Resend ID of the webhook.
    pub id: String,
}

/// Response of `GET /webhooks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDetails {
    /// Resend ID of the webhook.
    pub id: String,
    /// URL events are delivered to.
    pub endpoint: String,
    /// Subscribed event types.
    pub events: Vec<EventType>,
    /// Delivery status.
    pub status: WebhookStatus,
    /// Secret used to verify delivered payloads.
    pub signing_secret: Secret,
    /// Creation timestamp as reported by Resend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Webhook endpoints of a [`ResendClient`].
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a ResendClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a ResendClient) -> Self {
        Self { client }
    }

    /// Create a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn create(
        &self,
        request: &CreateWebhookRequest,
    ) -> Result<CreateWebhookResponse, ResendApiError> {
        let builder = self.client.request(Method::POST, "/webhooks").json(request);
        self.client.execute(builder).await
    }

    /// Fetch a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn get(&self, id: &str) -> Result<WebhookDetails, ResendApiError> {
        let builder = self
            .client
            .request(Method::GET, &format!("/webhooks/{id}"));
        self.client.execute(builder).await
    }

    /// List webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn list(&self) -> Result<Vec<WebhookDetails>, ResendApiError> {
        let builder = self.client.request(Method::GET, "/webhooks");
        let page: ListResponse<WebhookDetails> = self.client.execute(builder).await?;
        Ok(page.data)
    }

    /// Update a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<UpdateWebhookResponse, ResendApiError> {
        let builder = self
            .client
            .request(Method::PATCH, &format!("/webhooks/{id}"))
            .json(request);
        self.client.execute(builder).await
    }

    /// Delete a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResendApiError`] on any remote or transport failure.
    pub async fn remove(&self, id: &str) -> Result<(), ResendApiError> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/webhooks/{id}"));
        let _: IgnoredAny = self.client.execute(builder).await?;
        Ok(())
    }
}
