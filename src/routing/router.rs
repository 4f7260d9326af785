//! Host-based tenant selection.
//!
//! # Responsibilities
//! - Map configured hosts to their tenant's route table
//! - Select a table for an incoming request host
//! - Return explicit UnknownHost rather than a silent default
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) host lookup via HashMap
//! - A tenant without a configured host is built but unreachable

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;

use crate::config::HostsConfig;
use crate::error::DispatchError;
use crate::routing::matcher::normalize_host;
use crate::routing::table::{Matched, RouteTable};
use crate::tenants::Tenant;

/// Selects a tenant route table by request host.
#[derive(Debug, Default)]
pub struct HostRouter {
    by_host: HashMap<String, Arc<RouteTable>>,
    tables: Vec<Arc<RouteTable>>,
}

impl HostRouter {
    /// Bind each table to its tenant's configured host.
    pub fn new(hosts: &HostsConfig, tables: Vec<RouteTable>) -> Self {
        let mut router = Self::default();

        for table in tables {
            let table = Arc::new(table);
            match hosts.for_tenant(table.tenant()) {
                Some(host) => {
                    let host = normalize_host(host);
                    tracing::info!(
                        tenant = %table.tenant(),
                        host = %host,
                        routes = table.routes().len(),
                        "Tenant bound"
                    );
                    router.by_host.insert(host, table.clone());
                }
                None => {
                    tracing::warn!(
                        tenant = %table.tenant(),
                        "No host configured, tenant is unreachable"
                    );
                }
            }
            router.tables.push(table);
        }

        router
    }

    /// All tables, including unreachable ones.
    pub fn tables(&self) -> &[Arc<RouteTable>] {
        &self.tables
    }

    pub fn table(&self, tenant: Tenant) -> Option<&RouteTable> {
        self.tables
            .iter()
            .find(|t| t.tenant() == tenant)
            .map(|t| t.as_ref())
    }

    /// Select the table for a normalized request host.
    pub fn select(&self, host: Option<&str>) -> Result<&RouteTable, DispatchError> {
        host.and_then(|h| self.by_host.get(h))
            .map(|t| t.as_ref())
            .ok_or_else(|| DispatchError::UnknownHost {
                host: host.map(str::to_string),
            })
    }

    /// Select the tenant, then look up the route within it.
    pub fn recognize(
        &self,
        host: Option<&str>,
        method: &Method,
        path: &str,
    ) -> Result<(Tenant, Matched<'_>), DispatchError> {
        let table = self.select(host)?;
        let matched = table.lookup(method, path)?;
        Ok((table.tenant(), matched))
    }
}
