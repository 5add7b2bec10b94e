//! Orchestrator-facing resource contract and the Resend resource adapters.
//!
//! The orchestrator invokes a [`Resource`] with a [`Context`] (logical ID and
//! owning [`Scope`]) and a [`Phase`]. The phase is a closed enum, so every
//! adapter handles create, update and delete exhaustively and there is no
//! "unknown phase" path at runtime.
//!
//! Two adapters are provided:
//! - [`api_key::ApiKeyResource`] for `resend::ApiKey`
//! - [`webhook::WebhookResource`] for `resend::Webhook`

use async_trait::async_trait;

use crate::error::ResourceError;

pub mod api_key;
pub mod webhook;

/// Application and stage that own a set of resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Application name.
    pub app: String,
    /// Deployment stage, e.g. `dev` or `prod`.
    pub stage: String,
}

impl Scope {
    /// Create a scope.
    pub fn new(app: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            stage: stage.into(),
        }
    }

    /// Default remote name for a resource: `{app}-{stage}-{id}`.
    pub fn physical_name(&self, id: &str) -> String {
        format!("{}-{}-{id}", self.app, self.stage)
    }
}

/// Per-invocation context supplied by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Logical resource ID. Not the remote ID.
    pub id: String,
    /// Owning scope.
    pub scope: Scope,
}

impl Context {
    /// Create a context.
    pub fn new(id: impl Into<String>, scope: Scope) -> Self {
        Self {
            id: id.into(),
            scope,
        }
    }
}

/// Lifecycle stage with the data each stage needs.
#[derive(Debug, Clone)]
pub enum Phase<P, O> {
    /// First materialization of the resource.
    Create {
        /// Desired state.
        props: P,
    },
    /// Reconcile an existing resource with new desired state.
    Update {
        /// Desired state.
        props: P,
        /// Output stored by the previous invocation.
        output: O,
    },
    /// Remove the resource.
    Delete {
        /// Last desired state, used for credentials.
        props: P,
        /// Output stored by the previous invocation.
        output: O,
    },
}

impl<P, O> Phase<P, O> {
    /// Lowercase phase name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Result of applying a phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<O> {
    /// New state to persist.
    Ready(O),
    /// The resource was destroyed; stored state should be cleared.
    Destroyed,
}

impl<O> Outcome<O> {
    /// The new state, or `None` when destroyed.
    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Ready(output) => Some(output),
            Self::Destroyed => None,
        }
    }

    /// Whether the resource was destroyed.
    pub fn is_destroyed(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

/// A resource kind the orchestrator can drive through its lifecycle.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Desired state declared by the user.
    type Props: Send + 'static;
    /// State persisted by the orchestrator between invocations.
    type Output: Send + 'static;

    /// Stable kind name, e.g. `resend::ApiKey`.
    const KIND: &'static str;

    /// Apply one lifecycle phase.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] before any network call when
    /// configuration is incomplete, and [`ResourceError::Api`] for any
    /// remote failure.
    async fn apply(
        &self,
        ctx: &Context,
        phase: Phase<Self::Props, Self::Output>,
    ) -> Result<Outcome<Self::Output>, ResourceError>;
}
