//! Coverage for config parsing, env overrides and file loading.

use std::io::Write;

use resend_provider::config::{load_config, load_config_with, ResendConfig, DEFAULT_BASE_URL};
use resend_provider::ConfigError;

#[test]
fn parse_minimal_config() {
    let config = toml::from_str::<ResendConfig>("").expect("empty config should parse");
    assert!(config.api_key.is_none());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.timeout_secs.is_none());
}

#[test]
fn parse_full_config() {
    let toml_str = r#"
api_key = "re_inline_key"
base_url = "https://resend.internal.example"
user_agent = "infra-bot/2.0"
timeout_secs = 15
"#;
    let config = toml::from_str::<ResendConfig>(toml_str).expect("full config should parse");
    assert_eq!(
        config.api_key.as_ref().map(|k| k.expose()),
        Some("re_inline_key")
    );
    assert_eq!(config.base_url, "https://resend.internal.example");
    assert_eq!(config.user_agent, "infra-bot/2.0");
    assert_eq!(config.timeout_secs, Some(15));
}

#[test]
fn debug_output_hides_api_key() {
    let config = ResendConfig::with_api_key("re_super_secret_value");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("re_super_secret_value"));
    assert!(rendered.contains("__REDACTED__"));
}

#[test]
fn load_config_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "base_url = \"http://127.0.0.1:8080/\"").expect("should write config");
    writeln!(file, "timeout_secs = 5").expect("should write config");

    let config = load_config_with(file.path(), |_| None).expect("config should load");
    assert_eq!(config.timeout_secs, Some(5));
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert!(config.api_key.is_none());
}

#[test]
fn env_overrides_file_values() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "api_key = \"re_from_file\"").expect("should write config");
    writeln!(file, "base_url = \"http://127.0.0.1:8080\"").expect("should write config");

    let config = load_config_with(file.path(), |key| match key {
        "RESEND_API_KEY" => Some("re_from_env".to_owned()),
        "RESEND_BASE_URL" => Some("http://127.0.0.1:9090/".to_owned()),
        _ => None,
    })
    .expect("config should load");
    assert_eq!(
        config.api_key.as_ref().map(|k| k.expose()),
        Some("re_from_env")
    );
    assert_eq!(config.base_url, "http://127.0.0.1:9090");
}

#[test]
fn api_key_env_names_the_variable() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "api_key_env = \"TEAM_RESEND_KEY\"").expect("should write config");

    let config = load_config_with(file.path(), |key| {
        (key == "TEAM_RESEND_KEY").then(|| "re_team_key".to_owned())
    })
    .expect("config should load");
    assert_eq!(
        config.api_key.as_ref().map(|k| k.expose()),
        Some("re_team_key")
    );
}

#[test]
fn from_dotenv_reads_key_and_base_url() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "RESEND_API_KEY=re_dotenv_key_123\nRESEND_BASE_URL=http://127.0.0.1:7070/\n",
    )
    .expect("should write .env");

    let config = ResendConfig::from_dotenv(&path).expect(".env should load");
    assert_eq!(
        config.api_key.as_ref().map(|k| k.expose()),
        Some("re_dotenv_key_123")
    );
    assert_eq!(config.base_url, "http://127.0.0.1:7070");
}

#[test]
fn load_config_missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let result = load_config(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn load_config_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "timeout_secs = \"soon\"").expect("should write config");

    let result = load_config(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn from_dotenv_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let result = ResendConfig::from_dotenv(&dir.path().join(".env"));
    assert!(matches!(result, Err(ConfigError::Dotenv(_))));
}
