//! Error types shared by the client and the resource adapters.
//!
//! Every remote failure is normalized into a single [`ResendApiError`]
//! before it reaches the orchestrator. Configuration problems are raised
//! as [`ConfigError`] before any network call is made.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Name used for failures that did not come with a structured Resend body.
pub const APPLICATION_ERROR: &str = "application_error";

/// Name used when a success response does not match the expected schema.
pub const INVALID_RESPONSE: &str = "invalid_response";

const MAX_ERROR_BODY_CHARS: usize = 256;

/// A remote error reported by the Resend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Resend client error: {code}: {message}", code = status_label(.status_code))]
pub struct ResendApiError {
    /// Provider error name, e.g. `validation_error`.
    pub name: String,
    /// Human-readable message from the provider.
    pub message: String,
    /// HTTP status code, absent for transport failures.
    pub status_code: Option<u16>,
}

fn status_label(status_code: &Option<u16>) -> String {
    status_code.map_or_else(|| "none".to_owned(), |code| code.to_string())
}

/// Wire shape of a Resend error body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    name: String,
    message: String,
    status_code: Option<u16>,
}

impl ResendApiError {
    /// Wrap an error payload `{name, message, statusCode}`.
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            status_code,
        }
    }

    /// Build an error from a non-success HTTP response body.
    ///
    /// A structured Resend body is taken verbatim. Anything else becomes an
    /// `application_error` carrying the sanitized body and the HTTP status.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => Self {
                name: parsed.name,
                message: parsed.message,
                status_code: parsed.status_code.or(Some(status)),
            },
            Err(_) => Self::new(APPLICATION_ERROR, sanitize_error_body(body), Some(status)),
        }
    }

    /// Build an error from a transport-level failure.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        Self::new(
            APPLICATION_ERROR,
            format!("Unable to fetch data. The request could not be resolved: {err}"),
            err.status().map(|s| s.as_u16()),
        )
    }

    /// Build an error for a success response that could not be parsed.
    pub fn invalid_response(status: u16, detail: impl std::fmt::Display) -> Self {
        Self::new(
            INVALID_RESPONSE,
            format!("unexpected response body: {detail}"),
            Some(status),
        )
    }
}

/// Key-shaped tokens masked out of error bodies before they are surfaced.
static SECRET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"re_[A-Za-z0-9_]{8,}", r"whsec_[A-Za-z0-9+/=]{8,}"]
        .into_iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Collapse whitespace, redact key-like tokens and truncate an error body.
pub fn sanitize_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let redacted = SECRET_PATTERNS
        .iter()
        .fold(collapsed, |text, regex| {
            regex.replace_all(&text, "[REDACTED]").into_owned()
        });

    match redacted.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...[truncated]", &redacted[..cut]),
        None => redacted,
    }
}

/// Configuration problems detected before any network call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No credential was passed and none is configured.
    #[error(
        "Resend API key is required. Provide it via the api_key parameter or set the RESEND_API_KEY environment variable."
    )]
    MissingApiKey,
    /// A required resource property was not supplied.
    #[error("missing required property `{property}` for {kind}")]
    MissingProperty {
        /// Resource kind, e.g. `resend::Webhook`.
        kind: &'static str,
        /// Property name.
        property: &'static str,
    },
    /// The config file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`crate::config::ResendConfig`].
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// The `.env` file could not be loaded.
    #[error("failed to load env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    /// The HTTP client could not be constructed from the settings.
    #[error("invalid client settings: {0}")]
    Client(String),
}

/// Errors returned by resource adapters to the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// Configuration error raised before any network call.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Remote API failure.
    #[error(transparent)]
    Api(#[from] ResendApiError),
}

impl ResourceError {
    /// The wrapped remote error, if this is one.
    pub fn as_api(&self) -> Option<&ResendApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}
