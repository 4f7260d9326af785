//! Staff portal.
//!
//! The home page is only shown in development; elsewhere it redirects to
//! the public site.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::controllers::{RobotsController, RobotsPolicy, RootsController};
use crate::environment::EnvironmentGuard;
use crate::routing::resource::{Format, Namespace, Operation, Resource};
use crate::routing::table::{RouteError, RouteTable};
use crate::tenants::{page, Shared, Tenant};

use Operation::{Create, Edit, New, Show, Update};

pub fn routes(shared: &Shared, config: &AppConfig) -> Result<RouteTable, RouteError> {
    let guard = EnvironmentGuard::new(config.environment, config.guard.staff_redirect_url.clone());
    let builder =
        RouteTable::builder(Tenant::Staff).root(Arc::new(RootsController::guarded("Staff", guard)));

    shared
        .baseline(builder)
        .resource(
            Resource::plural("robots", Arc::new(RobotsController::new(RobotsPolicy::DisallowAll)))
                .only([Operation::Index])
                .formats([Format::Html, Format::Txt]),
        )
        .namespace(
            Namespace::new("contact")
                .resource(Resource::plural("email", page("email")).only([Update, Show]))
                .resource(Resource::plural("telephone", page("telephone")).only([Update, Show]))
                .resource(Resource::plural("message", page("message")).only([Update, Create])),
        )
        .resource(Resource::singular("owner", page("owners")).only([Show]))
        .resource(
            Resource::singular("registration", page("registrations"))
                .only([New])
                .shallow()
                .nest(Resource::plural("emails", page("emails")).only([Create, Edit, Update])),
        )
        .namespace(Namespace::new("membership"))
        .resource(
            Resource::singular("session", page("sessions"))
                .only([New])
                .shallow()
                .nest(Resource::singular("email", page("emails")).only([New, Create])),
        )
        .build()
}
