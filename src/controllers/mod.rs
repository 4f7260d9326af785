//! Controller dispatch.
//!
//! # Data Flow
//! ```text
//! Matched route
//!     → Controller::call(action, RequestContext)
//!     → Reply (page, text, redirect)
//!     → http::response renders it
//! ```
//!
//! A controller's outward identity (its name, and the namespace it is
//! declared in) is separate from its behaviour. `Composed` exposes one
//! shared `Capability` under as many identities as needed.

pub mod capability;
pub mod health;
pub mod robots;
pub mod roots;
pub mod staging;

use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::Operation;

pub use capability::{Capability, Composed};
pub use health::HealthController;
pub use robots::{RobotsController, RobotsPolicy};
pub use roots::RootsController;
pub use staging::StagingCapability;

/// A named handler for one or more resource actions.
pub trait Controller: Send + Sync {
    /// Controller name as it appears in handler identities, e.g. `healths`.
    fn name(&self) -> &str;

    /// Whether this controller implements `action`.
    ///
    /// Checked when route tables are built, never per request.
    fn supports(&self, action: Operation) -> bool {
        let _ = action;
        true
    }

    fn call(&self, action: Operation, ctx: &RequestContext) -> Reply;
}

/// Placeholder page for resources whose behaviour lives elsewhere.
#[derive(Debug, Clone)]
pub struct PageController {
    name: String,
}

impl PageController {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Controller for PageController {
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, action: Operation, ctx: &RequestContext) -> Reply {
        let title = format!("{}#{}", self.name, action);
        let mut body = format!("<h1>{}</h1>\n<p>{} {}</p>", title, ctx.method, ctx.path);
        if let Some(id) = ctx.param("id") {
            body.push_str(&format!("\n<p id=\"record\">{}</p>", id));
        }
        Reply::page(title, body)
    }
}
