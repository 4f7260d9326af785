//! "Show current deployment stage", shared by every tenant's stagings
//! controller.

use crate::controllers::Capability;
use crate::environment::Environment;
use crate::http::request::RequestContext;
use crate::http::response::Reply;
use crate::routing::resource::{Format, Operation};

#[derive(Debug, Clone)]
pub struct StagingCapability {
    environment: Environment,
}

impl StagingCapability {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl Capability for StagingCapability {
    fn actions(&self) -> &[Operation] {
        &[Operation::Show]
    }

    fn perform(&self, _action: Operation, ctx: &RequestContext) -> Reply {
        match ctx.format {
            Format::Txt => Reply::Text(format!("{}\n", self.environment)),
            _ => Reply::page(
                "Staging",
                format!("<h1>Staging</h1>\n<p id=\"stage\">{}</p>", self.environment),
            ),
        }
    }
}
