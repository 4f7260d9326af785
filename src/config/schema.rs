//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::tenants::Tenant;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment (development, test, staging, production).
    pub environment: Environment,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Host header value per tenant.
    pub hosts: HostsConfig,

    /// Environment guard settings.
    pub guard: GuardConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// Outgoing mail settings.
    pub mailer: MailerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Host binding per tenant. An unset host leaves that tenant unreachable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Corporate site host (`WWW_CORPORATE_URL`).
    pub corporate: Option<String>,

    /// Consumer app host (`WWW_SERVICE_URL`).
    pub service: Option<String>,

    /// Staff portal host (`WWW_STAFF_URL`).
    pub staff: Option<String>,
}

impl HostsConfig {
    pub fn for_tenant(&self, tenant: Tenant) -> Option<&str> {
        let host = match tenant {
            Tenant::Corporate => &self.corporate,
            Tenant::Service => &self.service,
            Tenant::Staff => &self.staff,
        };
        host.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn set(&mut self, tenant: Tenant, host: Option<String>) {
        match tenant {
            Tenant::Corporate => self.corporate = host,
            Tenant::Service => self.service = host,
            Tenant::Staff => self.staff = host,
        }
    }
}

/// Environment guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Where the staff home page sends visitors outside development.
    pub staff_redirect_url: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            staff_redirect_url: "https://umaxica.org".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty for development, JSON for log aggregation.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Outgoing mail configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailerConfig {
    /// Sender address.
    pub from: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            from: "from@example.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "production"

            [hosts]
            staff = "www.jp.example.org"
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.hosts.for_tenant(Tenant::Staff), Some("www.jp.example.org"));
        assert_eq!(config.hosts.for_tenant(Tenant::Corporate), None);
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.guard.staff_redirect_url, "https://umaxica.org");
    }

    #[test]
    fn test_blank_host_is_unset() {
        let mut hosts = HostsConfig::default();
        hosts.set(Tenant::Service, Some("  ".into()));
        assert_eq!(hosts.for_tenant(Tenant::Service), None);
    }
}
