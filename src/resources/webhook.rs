//! `resend::Webhook`: a Resend webhook subscription.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Context, Outcome, Phase, Resource};
use crate::client::{create_client, CreateWebhookRequest, UpdateWebhookRequest};
use crate::config::ResendConfig;
use crate::error::{ConfigError, ResourceError};
use crate::secret::Secret;
use crate::types::{EventType, WebhookStatus};

/// Desired state of a webhook.
///
/// Every field is optional so an update can name only what changes; omitted
/// fields keep their stored values. `endpoint` is required on create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookProps {
    /// Credential used to manage the webhook. Falls back to the configured default.
    #[serde(default)]
    pub api_key: Option<Secret>,
    /// URL events are delivered to.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Event types to subscribe to. Defaults to [`EventType::ALL`] on create.
    #[serde(default)]
    pub events: Option<Vec<EventType>>,
    /// Delivery status. Defaults to `enabled` on create.
    #[serde(default)]
    pub status: Option<WebhookStatus>,
}

/// Stored state of a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webhook {
    /// Resend ID of the webhook.
    pub id: String,
    /// URL events are delivered to.
    pub endpoint: String,
    /// Subscribed event types, in declared order.
    pub events: Vec<EventType>,
    /// Delivery status.
    pub status: WebhookStatus,
    /// Secret used to verify delivered payloads. Never rotated by updates.
    pub signing_secret: Secret,
}

/// Adapter for `resend::Webhook`.
#[derive(Debug, Clone, Default)]
pub struct WebhookResource {
    config: ResendConfig,
}

impl WebhookResource {
    /// Create the adapter with an injected client configuration.
    pub fn new(config: ResendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Resource for WebhookResource {
    type Props = WebhookProps;
    type Output = Webhook;

    const KIND: &'static str = "resend::Webhook";

    async fn apply(
        &self,
        ctx: &Context,
        phase: Phase<WebhookProps, Webhook>,
    ) -> Result<Outcome<Webhook>, ResourceError> {
        debug!(kind = Self::KIND, id = %ctx.id, phase = phase.name(), "applying phase");
        match phase {
            Phase::Delete { props, output } => {
                let client = create_client(&self.config, props.api_key.as_ref())?;
                client.webhooks().remove(&output.id).await?;
                info!(kind = Self::KIND, id = %ctx.id, remote_id = %output.id, "deleted webhook");
                Ok(Outcome::Destroyed)
            }
            Phase::Create { props } => {
                let client = create_client(&self.config, props.api_key.as_ref())?;
                let endpoint = props.endpoint.ok_or(ConfigError::MissingProperty {
                    kind: Self::KIND,
                    property: "endpoint",
                })?;
                let events = props.events.unwrap_or_else(|| EventType::ALL.to_vec());
                let status = props.status.unwrap_or_default();

                let created = client
                    .webhooks()
                    .create(&CreateWebhookRequest {
                        endpoint: endpoint.clone(),
                        events: events.clone(),
                    })
                    .await?;

                // Resend creates webhooks enabled; a disabled one needs a second call.
                if status == WebhookStatus::Disabled {
                    debug!(kind = Self::KIND, remote_id = %created.id, "disabling new webhook");
                    let disabled = client
                        .webhooks()
                        .update(
                            &created.id,
                            &UpdateWebhookRequest {
                                endpoint: endpoint.clone(),
                                events: events.clone(),
                                status,
                            },
                        )
                        .await;
                    if let Err(err) = disabled {
                        // An errored create stores no state; the new webhook must not survive it.
                        if let Err(cleanup) = client.webhooks().remove(&created.id).await {
                            warn!(
                                kind = Self::KIND,
                                id = %ctx.id,
                                remote_id = %created.id,
                                error = %cleanup,
                                "failed to remove webhook after disabling it failed"
                            );
                        }
                        return Err(err.into());
                    }
                }

                info!(
                    kind = Self::KIND,
                    id = %ctx.id,
                    remote_id = %created.id,
                    %status,
                    "created webhook"
                );
                Ok(Outcome::Ready(Webhook {
                    id: created.id,
                    endpoint,
                    events,
                    status,
                    signing_secret: created.signing_secret,
                }))
            }
            Phase::Update { props, output } => {
                let client = create_client(&self.config, props.api_key.as_ref())?;
                let endpoint = props.endpoint.unwrap_or(output.endpoint);
                let events = props.events.unwrap_or(output.events);
                let status = props.status.unwrap_or(output.status);

                let updated = client
                    .webhooks()
                    .update(
                        &output.id,
                        &UpdateWebhookRequest {
                            endpoint: endpoint.clone(),
                            events: events.clone(),
                            status,
                        },
                    )
                    .await?;

                info!(
                    kind = Self::KIND,
                    id = %ctx.id,
                    remote_id = %updated.id,
                    %status,
                    "updated webhook"
                );
                // Mutable fields come from the request, not the response.
                Ok(Outcome::Ready(Webhook {
                    id: updated.id,
                    endpoint,
                    events,
                    status,
                    signing_secret: output.signing_secret,
                }))
            }
        }
    }
}
