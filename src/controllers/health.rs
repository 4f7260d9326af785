//! HTML health page.
//!
//! Answers for uptime probes that look at page content; the body is an
//! HTML document, not a JSON status object.

use crate::controllers::Controller;
use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::Operation;

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthController;

impl Controller for HealthController {
    fn name(&self) -> &str {
        "healths"
    }

    fn supports(&self, action: Operation) -> bool {
        action == Operation::Show
    }

    fn call(&self, _action: Operation, _ctx: &RequestContext) -> Reply {
        Reply::page("Health", "<h1>ok</h1>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::context;
    use crate::routing::resource::Format;
    use crate::tenants::Tenant;

    #[test]
    fn test_health_page_is_not_json() {
        let ctx = context(Tenant::Staff, "/health", Format::Html);
        let Reply::Page { body, .. } = HealthController.call(Operation::Show, &ctx) else {
            panic!("expected a page");
        };
        assert!(body.contains("<h1>ok</h1>"));
        assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
    }
}
