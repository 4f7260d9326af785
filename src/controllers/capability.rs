//! Shared behaviour mounted under several controller identities.

use std::sync::Arc;

use crate::controllers::Controller;
use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::Operation;

/// Behaviour that can be included by any number of controllers.
pub trait Capability: Send + Sync {
    /// Actions this capability implements.
    fn actions(&self) -> &[Operation];

    fn perform(&self, action: Operation, ctx: &RequestContext) -> Reply;
}

/// A controller whose whole body is a shared capability.
#[derive(Clone)]
pub struct Composed {
    name: String,
    capability: Arc<dyn Capability>,
}

impl Composed {
    pub fn new(name: impl Into<String>, capability: Arc<dyn Capability>) -> Self {
        Self {
            name: name.into(),
            capability,
        }
    }
}

impl Controller for Composed {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, action: Operation) -> bool {
        self.capability.actions().contains(&action)
    }

    fn call(&self, action: Operation, ctx: &RequestContext) -> Reply {
        self.capability.perform(action, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::context;
    use crate::routing::resource::Format;
    use crate::tenants::Tenant;

    struct Echo;

    impl Capability for Echo {
        fn actions(&self) -> &[Operation] {
            &[Operation::Show]
        }

        fn perform(&self, _action: Operation, ctx: &RequestContext) -> Reply {
            Reply::Text(ctx.tenant.to_string())
        }
    }

    #[test]
    fn test_one_capability_many_identities() {
        let shared: Arc<dyn Capability> = Arc::new(Echo);
        let a = Composed::new("stagings", shared.clone());
        let b = Composed::new("v1/stagings", shared);

        assert_eq!(a.name(), "stagings");
        assert_eq!(b.name(), "v1/stagings");
        assert!(a.supports(Operation::Show));
        assert!(!b.supports(Operation::Update));

        let ctx = context(Tenant::Corporate, "/staging", Format::Html);
        assert_eq!(a.call(Operation::Show, &ctx), b.call(Operation::Show, &ctx));
    }
}
