//! Host-routed front door for the corporate site, the consumer app and the
//! staff portal.

pub mod config;
pub mod controllers;
pub mod environment;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod mailer;
pub mod observability;
pub mod routing;
pub mod tenants;

pub use config::schema::AppConfig;
pub use error::DispatchError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
