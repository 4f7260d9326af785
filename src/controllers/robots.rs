//! robots.txt listing.

use crate::controllers::Controller;
use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::{Format, Operation};

/// Crawl policy for a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsPolicy {
    AllowAll,
    DisallowAll,
}

#[derive(Debug, Clone)]
pub struct RobotsController {
    policy: RobotsPolicy,
}

impl RobotsController {
    pub fn new(policy: RobotsPolicy) -> Self {
        Self { policy }
    }

    fn rules(&self) -> &'static str {
        match self.policy {
            RobotsPolicy::AllowAll => "User-agent: *\nDisallow:\n",
            RobotsPolicy::DisallowAll => "User-agent: *\nDisallow: /\n",
        }
    }
}

impl Controller for RobotsController {
    fn name(&self) -> &str {
        "robots"
    }

    fn supports(&self, action: Operation) -> bool {
        action == Operation::Index
    }

    fn call(&self, _action: Operation, ctx: &RequestContext) -> Reply {
        match ctx.format {
            Format::Txt => Reply::Text(self.rules().to_string()),
            _ => Reply::page("robots", format!("<pre>{}</pre>", self.rules())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::context;
    use crate::tenants::Tenant;

    #[test]
    fn test_txt_format_is_plain_text() {
        let controller = RobotsController::new(RobotsPolicy::DisallowAll);
        let ctx = context(Tenant::Staff, "/robots.txt", Format::Txt);
        assert_eq!(
            controller.call(Operation::Index, &ctx),
            Reply::Text("User-agent: *\nDisallow: /\n".into())
        );

        let ctx = context(Tenant::Staff, "/robots", Format::Html);
        assert!(matches!(controller.call(Operation::Index, &ctx), Reply::Page { .. }));
    }
}
