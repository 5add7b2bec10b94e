//! Enumerations shared by the HTTP client and the resource adapters.

use serde::{Deserialize, Serialize};

/// Access level granted to an API key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Can create, delete, get and update any resource.
    #[default]
    FullAccess,
    /// Can only send emails.
    SendingAccess,
}

impl Permission {
    /// Wire name of the permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullAccess => "full_access",
            Self::SendingAccess => "sending_access",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a webhook is delivering events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    /// Events are delivered.
    #[default]
    Enabled,
    /// Delivery is paused.
    Disabled,
}

impl WebhookStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for WebhookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event types a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// `email.bounced`
    #[serde(rename = "email.bounced")]
    EmailBounced,
    /// `email.clicked`
    #[serde(rename = "email.clicked")]
    EmailClicked,
    /// `email.complained`
    #[serde(rename = "email.complained")]
    EmailComplained,
    /// `email.delivered`
    #[serde(rename = "email.delivered")]
    EmailDelivered,
    /// `email.delivery_delayed`
    #[serde(rename = "email.delivery_delayed")]
    EmailDeliveryDelayed,
    /// `email.failed`
    #[serde(rename = "email.failed")]
    EmailFailed,
    /// `email.opened`
    #[serde(rename = "email.opened")]
    EmailOpened,
    /// `email.received`
    #[serde(rename = "email.received")]
    EmailReceived,
    /// `email.scheduled`
    #[serde(rename = "email.scheduled")]
    EmailScheduled,
    /// `email.sent`
    #[serde(rename = "email.sent")]
    EmailSent,
    /// `email.suppressed`
    #[serde(rename = "email.suppressed")]
    EmailSuppressed,
    /// `domain.created`
    #[serde(rename = "domain.created")]
    DomainCreated,
    /// `domain.updated`
    #[serde(rename = "domain.updated")]
    DomainUpdated,
    /// `domain.deleted`
    #[serde(rename = "domain.deleted")]
    DomainDeleted,
    /// `contact.created`
    #[serde(rename = "contact.created")]
    ContactCreated,
    /// `contact.updated`
    #[serde(rename = "contact.updated")]
    ContactUpdated,
    /// `contact.deleted`
    #[serde(rename = "contact.deleted")]
    ContactDeleted,
}

impl EventType {
    /// Email lifecycle events.
    pub const EMAIL: [EventType; 11] = [
        Self::EmailBounced,
        Self::EmailClicked,
        Self::EmailComplained,
        Self::EmailDelivered,
        Self::EmailDeliveryDelayed,
        Self::EmailFailed,
        Self::EmailOpened,
        Self::EmailReceived,
        Self::EmailScheduled,
        Self::EmailSent,
        Self::EmailSuppressed,
    ];

    /// Domain events.
    pub const DOMAIN: [EventType; 3] = [
        Self::DomainCreated,
        Self::DomainUpdated,
        Self::DomainDeleted,
    ];

    /// Contact events.
    pub const CONTACT: [EventType; 3] = [
        Self::ContactCreated,
        Self::ContactUpdated,
        Self::ContactDeleted,
    ];

    /// Every supported event type: email, then domain, then contact.
    pub const ALL: [EventType; 17] = [
        Self::EmailBounced,
        Self::EmailClicked,
        Self::EmailComplained,
        Self::EmailDelivered,
        Self::EmailDeliveryDelayed,
        Self::EmailFailed,
        Self::EmailOpened,
        Self::EmailReceived,
        Self::EmailScheduled,
        Self::EmailSent,
        Self::EmailSuppressed,
        Self::DomainCreated,
        Self::DomainUpdated,
        Self::DomainDeleted,
        Self::ContactCreated,
        Self::ContactUpdated,
        Self::ContactDeleted,
    ];

    /// Wire name, e.g. `email.delivery_delayed`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailBounced => "email.bounced",
            Self::EmailClicked => "email.clicked",
            Self::EmailComplained => "email.complained",
            Self::EmailDelivered => "email.delivered",
            Self::EmailDeliveryDelayed => "email.delivery_delayed",
            Self::EmailFailed => "email.failed",
            Self::EmailOpened => "email.opened",
            Self::EmailReceived => "email.received",
            Self::EmailScheduled => "email.scheduled",
            Self::EmailSent => "email.sent",
            Self::EmailSuppressed => "email.suppressed",
            Self::DomainCreated => "domain.created",
            Self::DomainUpdated => "domain.updated",
            Self::DomainDeleted => "domain.deleted",
            Self::ContactCreated => "contact.created",
            Self::ContactUpdated => "contact.updated",
            Self::ContactDeleted => "contact.deleted",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown event tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown webhook event type: {0}")]
pub struct UnknownEventType(pub String);

impl std::str::FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_owned()))
    }
}
