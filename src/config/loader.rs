//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::environment::Environment;
use crate::tenants::Tenant;

/// Environment variable naming each tenant's host.
pub const HOST_VARIABLES: [(Tenant, &str); 3] = [
    (Tenant::Corporate, "WWW_CORPORATE_URL"),
    (Tenant::Service, "WWW_SERVICE_URL"),
    (Tenant::Staff, "WWW_STAFF_URL"),
];

/// Environment variable selecting the deployment environment.
pub const ENVIRONMENT_VARIABLE: &str = "APP_ENV";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {variable}: {message}")]
    Environment { variable: String, message: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a TOML file, overlay the process environment, and validate.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    finish(config)
}

/// Defaults overlaid by the process environment, for running without a file.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    finish(AppConfig::default())
}

fn finish(mut config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Overlay environment values on a parsed config.
///
/// An empty variable counts as unset and leaves the file value alone.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    for (tenant, variable) in HOST_VARIABLES {
        if let Some(host) = get(variable) {
            tracing::debug!(tenant = %tenant, variable, "Host taken from environment");
            config.hosts.set(tenant, Some(host.trim().to_string()));
        }
    }

    if let Some(value) = get(ENVIRONMENT_VARIABLE) {
        config.environment = value.parse::<Environment>().map_err(|message| ConfigError::Environment {
            variable: ENVIRONMENT_VARIABLE.to_string(),
            message,
        })?;
    }

    Ok(())
}
