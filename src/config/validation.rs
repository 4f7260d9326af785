//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect two tenants claiming the same host
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Validate addresses and URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;
use crate::routing::matcher::normalize_host;
use crate::tenants::Tenant;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("hosts.{tenant} {host:?} is not a bare host name")]
    InvalidHost { tenant: Tenant, host: String },

    #[error("host {host:?} is bound to both {first} and {second}")]
    DuplicateHost {
        host: String,
        first: Tenant,
        second: Tenant,
    },

    #[error("guard.staff_redirect_url {0:?} is not an absolute http(s) URL")]
    InvalidRedirectUrl(String),

    #[error("mailer.from {0:?} is not an email address")]
    InvalidSender(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let mut claimed: HashMap<String, Tenant> = HashMap::new();
    for tenant in Tenant::ALL {
        let Some(host) = config.hosts.for_tenant(tenant) else {
            continue;
        };
        if !is_bare_host(host) {
            errors.push(ValidationError::InvalidHost {
                tenant,
                host: host.to_string(),
            });
            continue;
        }
        let normalized = normalize_host(host);
        if let Some(first) = claimed.get(&normalized) {
            errors.push(ValidationError::DuplicateHost {
                host: normalized,
                first: *first,
                second: tenant,
            });
        } else {
            claimed.insert(normalized, tenant);
        }
    }

    match Url::parse(&config.guard.staff_redirect_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
        _ => errors.push(ValidationError::InvalidRedirectUrl(
            config.guard.staff_redirect_url.clone(),
        )),
    }

    if !crate::mailer::is_address(&config.mailer.from) {
        errors.push(ValidationError::InvalidSender(config.mailer.from.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A host name with no scheme, port, path or credentials.
fn is_bare_host(host: &str) -> bool {
    if host.contains("://") || host.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    match Url::parse(&format!("http://{}/", host)) {
        Ok(url) => {
            url.port().is_none()
                && url.path() == "/"
                && url.username().is_empty()
                && url.host_str().map(str::to_ascii_lowercase) == Some(host.to_ascii_lowercase())
        }
        Err(_) => false,
    }
}
