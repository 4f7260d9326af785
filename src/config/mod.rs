//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (overlay WWW_*_URL / APP_ENV from the environment)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → route tables and server built from it once
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::GuardConfig;
pub use schema::HostsConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::MailerConfig;
pub use schema::ObservabilityConfig;
