//! Opaque secret values for credentials, API key tokens and signing secrets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder emitted wherever a secret would otherwise be printed.
pub const REDACTION_MARKER: &str = "__REDACTED__";

/// Opaque secret value that never appears in logs or serialized state.
///
/// Debug and Serialize output always show `__REDACTED__`. The plaintext is
/// only reachable through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a plaintext value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the plaintext. Use only at the HTTP boundary or in assertions.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the wrapped value is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTION_MARKER)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTION_MARKER)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value == REDACTION_MARKER {
            return Err(serde::de::Error::custom(
                "secret holds the redaction marker, not a real value",
            ));
        }
        Ok(Self(value))
    }
}
