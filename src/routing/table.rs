//! Per-tenant route tables.
//!
//! # Responsibilities
//! - Expand resource declarations into concrete routes
//! - Reject duplicate (method, path) pairs and unbacked operations
//! - Look up the route for a (method, path) pair
//!
//! # Design Decisions
//! - Built once at startup, never mutated afterwards
//! - Lookup is an ordered scan, first match wins
//! - HEAD is served by GET routes

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::http::Method;
use thiserror::Error;

use crate::controllers::Controller;
use crate::error::DispatchError;
use crate::routing::matcher::{PathPattern, RequestPath};
use crate::routing::resource::{Entry, Format, Kind, Namespace, Operation, Resource};
use crate::tenants::Tenant;

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("{tenant}: {method} {path} is bound to both {first} and {second}")]
    Conflict {
        tenant: Tenant,
        method: Method,
        path: String,
        first: String,
        second: String,
    },

    #[error("{tenant}: controller {controller} does not implement action {action}")]
    UnsupportedAction {
        tenant: Tenant,
        controller: String,
        action: Operation,
    },

    #[error("{tenant}: singular resource {resource} cannot declare {action}")]
    InvalidOperation {
        tenant: Tenant,
        resource: String,
        action: Operation,
    },
}

/// Outward identity of a route's handler, e.g. `www/org/healths#show`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId {
    pub controller: String,
    pub action: Operation,
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// A single compiled route.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: HandlerId,
    pub formats: Vec<Format>,
    controller: Arc<dyn Controller>,
}

impl Route {
    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }

    pub fn action(&self) -> Operation {
        self.handler.action
    }

    pub fn accepts(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.to_string())
            .field("handler", &self.handler.to_string())
            .finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} {:<40} {}", self.method.as_str(), self.pattern.to_string(), self.handler)
    }
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct Matched<'a> {
    pub route: &'a Route,
    pub params: Vec<(String, String)>,
    pub format: Format,
}

/// Immutable route table for one tenant.
#[derive(Debug)]
pub struct RouteTable {
    tenant: Tenant,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder(tenant: Tenant) -> RouteTableBuilder {
        RouteTableBuilder {
            tenant,
            root: None,
            entries: Vec::new(),
        }
    }

    pub fn tenant(&self) -> Tenant {
        self.tenant
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Whether any route is bound to `handler` (e.g. `contact/emails#show`,
    /// relative to the tenant's module).
    pub fn has_handler(&self, handler: &str) -> bool {
        let full = format!("{}/{}", self.tenant.module(), handler);
        self.routes.iter().any(|r| r.handler.to_string() == full)
    }

    /// Find the route for a request.
    pub fn lookup(&self, method: &Method, path: &str) -> Result<Matched<'_>, DispatchError> {
        let method = if *method == Method::HEAD {
            Method::GET
        } else {
            method.clone()
        };
        let request_path = RequestPath::parse(path);
        let format = request_path
            .resolve_format()
            .ok_or_else(|| DispatchError::NotFound {
                tenant: Some(self.tenant),
                path: path.to_string(),
            })?;

        for route in self.routes.iter().filter(|r| r.method == method) {
            if let Some(params) = route.pattern.matches(&request_path.segments) {
                if !route.accepts(format) {
                    return Err(DispatchError::NotAcceptable {
                        handler: route.handler.to_string(),
                        format,
                    });
                }
                return Ok(Matched {
                    route,
                    params,
                    format,
                });
            }
        }

        Err(DispatchError::NotFound {
            tenant: Some(self.tenant),
            path: path.to_string(),
        })
    }
}

/// Builder collecting declarations before expansion.
pub struct RouteTableBuilder {
    tenant: Tenant,
    root: Option<Arc<dyn Controller>>,
    entries: Vec<Entry>,
}

/// Expansion context for one level of the declaration tree.
#[derive(Clone)]
struct Scope {
    path: PathPattern,
    modules: Vec<String>,
    /// Prefix for member routes of shallow-nested children.
    shallow_path: Option<PathPattern>,
}

impl RouteTableBuilder {
    /// Bind `GET /` to the controller's `index` action.
    pub fn root(mut self, controller: Arc<dyn Controller>) -> Self {
        self.root = Some(controller);
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.entries.push(Entry::Resource(resource));
        self
    }

    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.entries.push(Entry::Namespace(namespace));
        self
    }

    /// Expand declarations into routes.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut expander = Expander {
            tenant: self.tenant,
            routes: Vec::new(),
            seen: HashMap::new(),
        };

        let scope = Scope {
            path: PathPattern::root(),
            modules: vec![self.tenant.module().to_string()],
            shallow_path: None,
        };

        if let Some(root) = self.root {
            expander.push(
                &scope,
                Method::GET,
                PathPattern::root(),
                root,
                Operation::Index,
                &[Format::Html],
            )?;
        }

        for entry in &self.entries {
            expander.entry(&scope, entry)?;
        }

        tracing::debug!(
            tenant = %self.tenant,
            routes = expander.routes.len(),
            "Route table built"
        );

        Ok(RouteTable {
            tenant: self.tenant,
            routes: expander.routes,
        })
    }
}

struct Expander {
    tenant: Tenant,
    routes: Vec<Route>,
    /// (method, pattern shape) → handler already bound there.
    seen: HashMap<(Method, String), String>,
}

impl Expander {
    fn entry(&mut self, scope: &Scope, entry: &Entry) -> Result<(), RouteError> {
        match entry {
            Entry::Resource(resource) => self.resource(scope, resource),
            Entry::Namespace(namespace) => {
                let path = scope.path.literal(&namespace.name);
                let mut modules = scope.modules.clone();
                modules.push(namespace.name.clone());
                let inner = Scope {
                    path,
                    modules,
                    shallow_path: None,
                };
                for child in &namespace.entries {
                    self.entry(&inner, child)?;
                }
                Ok(())
            }
        }
    }

    fn resource(&mut self, scope: &Scope, resource: &Resource) -> Result<(), RouteError> {
        let collection = scope.path.literal(&resource.name);
        let member = match resource.kind {
            Kind::Singular => collection.clone(),
            Kind::Plural => match &scope.shallow_path {
                Some(shallow) => shallow.literal(&resource.name).param("id"),
                None => collection.param("id"),
            },
        };

        for op in Operation::GENERATION_ORDER {
            if !resource.allows(op) {
                continue;
            }
            if op == Operation::Index && resource.kind == Kind::Singular {
                return Err(RouteError::InvalidOperation {
                    tenant: self.tenant,
                    resource: resource.name.clone(),
                    action: op,
                });
            }

            let path = match op {
                Operation::Index | Operation::Create => collection.clone(),
                Operation::New => collection.literal("new"),
                Operation::Edit => member.literal("edit"),
                Operation::Show | Operation::Update | Operation::Destroy => member.clone(),
            };

            for method in op.methods() {
                self.push(
                    scope,
                    method,
                    path.clone(),
                    resource.controller.clone(),
                    op,
                    &resource.formats,
                )?;
            }
        }

        if resource.nested.is_empty() {
            return Ok(());
        }

        // Shallow nesting only applies below a parent that has an id segment.
        let (nested_path, shallow_path) = match resource.kind {
            Kind::Singular => (collection, None),
            Kind::Plural => {
                let parent_param = format!("{}_id", singularize(&resource.name));
                let nested = collection.param(&parent_param);
                let shallow = if resource.shallow || scope.shallow_path.is_some() {
                    Some(scope.shallow_path.clone().unwrap_or_else(|| scope.path.clone()))
                } else {
                    None
                };
                (nested, shallow)
            }
        };

        let inner = Scope {
            path: nested_path,
            modules: scope.modules.clone(),
            shallow_path,
        };
        for child in &resource.nested {
            self.entry(&inner, child)?;
        }
        Ok(())
    }

    fn push(
        &mut self,
        scope: &Scope,
        method: Method,
        pattern: PathPattern,
        controller: Arc<dyn Controller>,
        action: Operation,
        formats: &[Format],
    ) -> Result<(), RouteError> {
        let mut modules = scope.modules.clone();
        modules.push(controller.name().to_string());
        let handler = HandlerId {
            controller: modules.join("/"),
            action,
        };

        if !controller.supports(action) {
            return Err(RouteError::UnsupportedAction {
                tenant: self.tenant,
                controller: handler.controller,
                action,
            });
        }

        let key = (method.clone(), pattern.shape());
        if let Some(first) = self.seen.get(&key) {
            return Err(RouteError::Conflict {
                tenant: self.tenant,
                method,
                path: pattern.to_string(),
                first: first.clone(),
                second: handler.to_string(),
            });
        }
        self.seen.insert(key, handler.to_string());

        self.routes.push(Route {
            method,
            pattern,
            handler,
            formats: formats.to_vec(),
            controller,
        });
        Ok(())
    }
}

fn singularize(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}
