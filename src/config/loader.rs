//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration for startup.
///
/// Reads the TOML file when a path is given (defaults otherwise), applies
/// environment overrides, then validates.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse a TOML document without touching the environment.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply environment overrides through `lookup`.
///
/// - `FORCE_SCRIPT_NAME` → `prefix.fallback` (empty string clears it)
/// - `FORWARDED_PREFIX_HEADER` → `prefix.header`
/// - `HELLO_SERVICE_URL` → `services.hello_url`
/// - `BIND_ADDRESS` → `listener.bind_address`
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("FORCE_SCRIPT_NAME") {
        config.prefix.fallback = if v.is_empty() { None } else { Some(v) };
    }
    if let Some(v) = lookup("FORWARDED_PREFIX_HEADER") {
        config.prefix.header = v;
    }
    if let Some(v) = lookup("HELLO_SERVICE_URL") {
        config.services.hello_url = v;
    }
    if let Some(v) = lookup("BIND_ADDRESS") {
        config.listener.bind_address = v;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [prefix]
            fallback = "billing"

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.prefix.fallback.as_deref(), Some("billing"));
        assert_eq!(config.prefix.header, "x-forwarded-prefix");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.services.hello_timeout_secs, 3);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[prefix\nfallback = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("FORCE_SCRIPT_NAME", "/app"),
            ("FORWARDED_PREFIX_HEADER", "x-script-name"),
            ("HELLO_SERVICE_URL", "http://127.0.0.1:1234"),
        ]
        .into_iter()
        .collect();

        let config = apply_env_overrides(AppConfig::default(), |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.prefix.fallback.as_deref(), Some("/app"));
        assert_eq!(config.prefix.header, "x-script-name");
        assert_eq!(config.services.hello_url, "http://127.0.0.1:1234");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_empty_force_script_name_clears_fallback() {
        let mut config = AppConfig::default();
        config.prefix.fallback = Some("billing".to_string());

        let config = apply_env_overrides(config, |k| (k == "FORCE_SCRIPT_NAME").then(String::new));
        assert!(config.prefix.fallback.is_none());
    }

    #[test]
    fn test_validation_error_message_lists_all() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroTimeout("timeouts.request_secs"),
            ValidationError::InvalidHeaderName("bad header".to_string()),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("timeouts.request_secs"));
        assert!(msg.contains("bad header"));
    }
}
