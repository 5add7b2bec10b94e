//! Resend resource providers.
//!
//! Declarative `resend::ApiKey` and `resend::Webhook` resources driven by an
//! external orchestrator through create, update and delete phases. Each
//! invocation builds a [`client::ResendClient`] from injected
//! [`config::ResendConfig`], maps the desired state onto Resend HTTP API
//! calls, and returns the new state or a destruction signal.
//!
//! See `DESIGN.md` for architecture notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod resources;
pub mod secret;
pub mod types;

pub use client::{create_client, ResendClient};
pub use config::ResendConfig;
pub use error::{ConfigError, ResendApiError, ResourceError};
pub use resources::api_key::{ApiKey, ApiKeyProps, ApiKeyResource};
pub use resources::webhook::{Webhook, WebhookProps, WebhookResource};
pub use resources::{Context, Outcome, Phase, Resource, Scope};
pub use secret::Secret;
pub use types::{EventType, Permission, WebhookStatus};
