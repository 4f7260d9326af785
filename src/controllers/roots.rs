//! Tenant home pages.

use crate::controllers::Controller;
use crate::environment::{EnvironmentGuard, GuardOutcome};
use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::Operation;

#[derive(Debug, Clone)]
pub struct RootsController {
    title: String,
    guard: Option<EnvironmentGuard>,
}

impl RootsController {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            guard: None,
        }
    }

    /// Home page that is only rendered where the guard lets it through.
    pub fn guarded(title: impl Into<String>, guard: EnvironmentGuard) -> Self {
        Self {
            title: title.into(),
            guard: Some(guard),
        }
    }
}

impl Controller for RootsController {
    fn name(&self) -> &str {
        "roots"
    }

    fn supports(&self, action: Operation) -> bool {
        action == Operation::Index
    }

    fn call(&self, _action: Operation, ctx: &RequestContext) -> Reply {
        if let Some(guard) = &self.guard {
            if let GuardOutcome::Redirect(location) = guard.evaluate() {
                tracing::debug!(
                    request_id = %ctx.request_id,
                    tenant = %ctx.tenant,
                    location = %location,
                    "Root guarded, redirecting"
                );
                return Reply::Redirect(location);
            }
        }
        Reply::page(self.title.clone(), format!("<h1>{}</h1>", self.title))
    }
}
