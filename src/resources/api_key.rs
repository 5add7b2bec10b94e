//! `resend::ApiKey`: a Resend API credential.
//!
//! Keys are immutable on the Resend side. The update phase logs a warning
//! and hands back the stored output untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Context, Outcome, Phase, Resource};
use crate::client::{create_client, CreateApiKeyRequest};
use crate::config::ResendConfig;
use crate::error::ResourceError;
use crate::secret::Secret;
use crate::types::Permission;

/// Desired state of an API key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiKeyProps {
    /// Credential used to manage the key. Falls back to the configured default.
    #[serde(default)]
    pub api_key: Option<Secret>,
    /// Key name. Defaults to `{app}-{stage}-{id}`.
    #[serde(default)]
    pub name: Option<String>,
    /// Access level. Defaults to `full_access`.
    #[serde(default)]
    pub permission: Option<Permission>,
    /// Restrict sending to one domain. Only meaningful with `sending_access`.
    #[serde(default)]
    pub domain_id: Option<String>,
}

/// Stored state of an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKey {
    /// Resend ID of the key.
    pub id: String,
    /// Key name.
    pub name: String,
    /// Access level.
    pub permission: Permission,
    /// Sending domain restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// The key itself.
    pub token: Secret,
}

/// Adapter for `resend::ApiKey`.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyResource {
    config: ResendConfig,
}

impl ApiKeyResource {
    /// Create the adapter with an injected client configuration.
    pub fn new(config: ResendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Resource for ApiKeyResource {
    type Props = ApiKeyProps;
    type Output = ApiKey;

    const KIND: &'static str = "resend::ApiKey";

    async fn apply(
        &self,
        ctx: &Context,
        phase: Phase<ApiKeyProps, ApiKey>,
    ) -> Result<Outcome<ApiKey>, ResourceError> {
        debug!(kind = Self::KIND, id = %ctx.id, phase = phase.name(), "applying phase");
        match phase {
            Phase::Delete { props, output } => {
                let client = create_client(&self.config, props.api_key.as_ref())?;
                client.api_keys().remove(&output.id).await?;
                info!(kind = Self::KIND, id = %ctx.id, remote_id = %output.id, "deleted api key");
                Ok(Outcome::Destroyed)
            }
            Phase::Create { props } => {
                let client = create_client(&self.config, props.api_key.as_ref())?;
                let name = props
                    .name
                    .unwrap_or_else(|| ctx.scope.physical_name(&ctx.id));
                let permission = props.permission.unwrap_or_default();
                let domain_id = props.domain_id;

                let created = client
                    .api_keys()
                    .create(&CreateApiKeyRequest {
                        name: name.clone(),
                        permission,
                        domain_id: domain_id.clone(),
                    })
                    .await?;
                info!(
                    kind = Self::KIND,
                    id = %ctx.id,
                    remote_id = %created.id,
                    %permission,
                    "created api key"
                );

                Ok(Outcome::Ready(ApiKey {
                    id: created.id,
                    name,
                    permission,
                    domain_id,
                    token: created.token,
                }))
            }
            Phase::Update { output, .. } => {
                warn!(
                    kind = Self::KIND,
                    id = %ctx.id,
                    "updating a Resend API key is not supported; no changes will be made"
                );
                Ok(Outcome::Ready(output))
            }
        }
    }
}
