//! Tenant route declarations.
//!
//! Each tenant module declares its resources the way a routes file would.
//! Controllers shared across tenants (health, staging) are created once in
//! [`Shared`] and mounted by every table.

pub mod corporate;
pub mod service;
pub mod staff;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::controllers::{
    Capability, Composed, Controller, HealthController, PageController, StagingCapability,
};
use crate::routing::resource::{Format, Operation, Resource};
use crate::routing::table::{RouteError, RouteTable, RouteTableBuilder};

/// One of the independently routed site surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenant {
    /// Corporate marketing site.
    Corporate,
    /// Consumer-facing app surface.
    Service,
    /// Staff portal.
    Staff,
}

impl Tenant {
    pub const ALL: [Tenant; 3] = [Tenant::Corporate, Tenant::Service, Tenant::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tenant::Corporate => "corporate",
            Tenant::Service => "service",
            Tenant::Staff => "staff",
        }
    }

    /// Controller module prefix for handler identities.
    pub fn module(&self) -> &'static str {
        match self {
            Tenant::Corporate => "www/com",
            Tenant::Service => "www/app",
            Tenant::Staff => "www/org",
        }
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tenant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "corporate" | "com" => Ok(Tenant::Corporate),
            "service" | "app" => Ok(Tenant::Service),
            "staff" | "org" => Ok(Tenant::Staff),
            other => Err(format!("unknown tenant: {}", other)),
        }
    }
}

/// Controllers mounted by more than one tenant.
#[derive(Clone)]
pub struct Shared {
    pub health: Arc<dyn Controller>,
    pub staging: Arc<dyn Capability>,
}

impl Shared {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            health: Arc::new(HealthController),
            staging: Arc::new(StagingCapability::new(config.environment)),
        }
    }

    /// Routes every tenant carries: health, term, staging, privacy.
    fn baseline(&self, builder: RouteTableBuilder) -> RouteTableBuilder {
        builder
            .resource(Resource::singular("health", self.health.clone()).only([Operation::Show]))
            .resource(Resource::singular("term", page("terms")).only([Operation::Show]))
            .resource(
                Resource::singular(
                    "staging",
                    Arc::new(Composed::new("stagings", self.staging.clone())),
                )
                .only([Operation::Show])
                .formats([Format::Html, Format::Txt]),
            )
            .resource(
                Resource::singular("privacy", page("privacies"))
                    .only([Operation::Show, Operation::Edit, Operation::Update]),
            )
    }
}

pub(crate) fn page(name: &str) -> Arc<dyn Controller> {
    Arc::new(PageController::new(name))
}

/// Build the route tables of every tenant.
pub fn build_tables(config: &AppConfig) -> Result<Vec<RouteTable>, RouteError> {
    let shared = Shared::new(config);
    Ok(vec![
        corporate::routes(&shared)?,
        service::routes(&shared)?,
        staff::routes(&shared, config)?,
    ])
}

/// `METHOD /pattern controller#action` per route, with the tenant's module
/// prefix dropped from the handler.
#[cfg(test)]
pub(crate) fn route_lines(table: &RouteTable) -> Vec<String> {
    let prefix = format!("{}/", table.tenant().module());
    table
        .routes()
        .iter()
        .map(|r| {
            let handler = r.handler.to_string();
            let handler = handler.strip_prefix(&prefix).unwrap_or(&handler).to_string();
            format!("{} {} {}", r.method, r.pattern, handler)
        })
        .collect()
}

/// Routes every tenant's table starts with after its root.
#[cfg(test)]
pub(crate) const BASELINE_LINES: [&str; 7] = [
    "GET /health healths#show",
    "GET /term terms#show",
    "GET /staging stagings#show",
    "GET /privacy/edit privacies#edit",
    "GET /privacy privacies#show",
    "PATCH /privacy privacies#update",
    "PUT /privacy privacies#update",
];
