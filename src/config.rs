//! Client configuration.
//!
//! The default credential is injected through [`ResendConfig`] instead of
//! being read from process-wide state at call time. Precedence when built
//! from the environment: env vars > config file > defaults.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::secret::Secret;

/// Environment variable holding the default Resend API key.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "RESEND_BASE_URL";

/// Default Resend API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Settings used by [`crate::client::ResendClient`].
#[derive(Debug, Clone, Deserialize)]
pub struct ResendConfig {
    /// Default API key, used when a resource does not carry its own.
    #[serde(default)]
    pub api_key: Option<Secret>,

    /// Name of an env var to read the API key from when `api_key` is unset.
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// API base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds. `None` leaves the HTTP client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_user_agent() -> String {
    format!("resend-provider/{}", env!("CARGO_PKG_VERSION"))
}

impl ResendConfig {
    /// Build a config with an explicit API key and default settings.
    pub fn with_api_key(api_key: impl Into<Secret>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Point the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build a config from `RESEND_API_KEY` and `RESEND_BASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Build a config from a `.env` file layered over the process environment.
    ///
    /// Entries in the file win over process variables. The process
    /// environment itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if the file is missing or cannot be parsed.
    pub fn from_dotenv(path: &Path) -> Result<Self, ConfigError> {
        let file = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        let mut config = Self::default();
        config.apply_overrides(|key| file.get(key).cloned().or_else(|| std::env::var(key).ok()));
        Ok(config)
    }

    /// Apply environment overrides using a custom resolver.
    ///
    /// Takes a resolver function so tests do not mutate the process env.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(key) = env(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(Secret::new(key));
        }
        if self.api_key.is_none() {
            if let Some(name) = self.api_key_env.as_deref() {
                self.api_key = env(name)
                    .filter(|v| !v.trim().is_empty())
                    .map(Secret::new);
            }
        }
        if let Some(url) = env(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim_end_matches('/').to_owned();
        }
    }

    /// Resolve the credential to use for one invocation.
    ///
    /// Order: the explicit argument, then the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when neither is present.
    pub fn resolve_api_key(&self, explicit: Option<&Secret>) -> Result<Secret, ConfigError> {
        explicit
            .filter(|key| !key.is_blank())
            .or_else(|| self.api_key.as_ref().filter(|key| !key.is_blank()))
            .cloned()
            .ok_or(ConfigError::MissingApiKey)
    }
}

/// Load a [`ResendConfig`] from a TOML file and apply process env overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ResendConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Load a [`ResendConfig`] from a TOML file, resolving overrides through `env`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResendConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let mut config: ResendConfig =
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    config.base_url = config.base_url.trim_end_matches('/').to_owned();
    config.apply_overrides(env);
    tracing::debug!(path = %path.display(), base_url = %config.base_url, "loaded resend config");
    Ok(config)
}
