//! Consumer app surface: sign up, sign in, withdrawal, preferences.

use std::sync::Arc;

use crate::controllers::{RobotsController, RobotsPolicy, RootsController};
use crate::routing::resource::{Format, Namespace, Operation, Resource};
use crate::routing::table::{RouteError, RouteTable};
use crate::tenants::{page, Shared, Tenant};

use Operation::{Create, Destroy, Edit, New, Show, Update};

pub fn routes(shared: &Shared) -> Result<RouteTable, RouteError> {
    let builder = RouteTable::builder(Tenant::Service).root(Arc::new(RootsController::new("App")));

    shared
        .baseline(builder)
        .resource(
            Resource::plural("robots", Arc::new(RobotsController::new(RobotsPolicy::AllowAll)))
                .only([Operation::Index])
                .formats([Format::Html, Format::Txt]),
        )
        .resource(
            Resource::singular("contact", page("contacts"))
                .only([New])
                .nest(Resource::plural("email", page("email")).only([Update, Show]))
                .nest(Resource::plural("telephone", page("telephone")).only([Update, Show]))
                .nest(Resource::plural("message", page("message")).only([Update, Create])),
        )
        // Sign up
        .resource(Resource::singular("registration", page("registrations")).only([New]))
        .namespace(
            Namespace::new("registration")
                .resource(Resource::plural("emails", page("emails")).only([New, Create, Edit, Update, Show]))
                .resource(Resource::singular("telephone", page("telephones")).only([New, Create, Edit, Update]))
                .resource(Resource::singular("google", page("googles")).only([New, Create]))
                .resource(Resource::singular("apple", page("apples")).only([New, Create])),
        )
        .resource(Resource::singular("withdrawal", page("withdrawals")).only([Edit, Destroy]))
        // Sign in / out
        .resource(
            Resource::singular("session", page("sessions"))
                .only([New, Destroy])
                .nest(Resource::singular("email", page("emails")).only([New, Create]))
                .nest(Resource::singular("google", page("googles")).only([New, Create]))
                .nest(Resource::singular("apple", page("apples")).only([New, Create]))
                .nest(Resource::singular("passkey", page("passkeys")).only([New, Create]))
                .nest(Resource::singular("password", page("passwords")).only([New, Create])),
        )
        .resource(Resource::singular("preference", page("preferences")).only([Show]))
        .build()
}
