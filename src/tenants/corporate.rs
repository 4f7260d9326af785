//! Corporate marketing site.

use std::sync::Arc;

use crate::controllers::{RobotsController, RobotsPolicy, RootsController};
use crate::routing::resource::{Format, Operation, Resource};
use crate::routing::table::{RouteError, RouteTable};
use crate::tenants::{page, Shared, Tenant};

pub fn routes(shared: &Shared) -> Result<RouteTable, RouteError> {
    let builder = RouteTable::builder(Tenant::Corporate).root(Arc::new(RootsController::new("Home")));

    shared
        .baseline(builder)
        .resource(Resource::singular("search", page("searches")).only([Operation::Show]))
        .resource(
            Resource::plural("robots", Arc::new(RobotsController::new(RobotsPolicy::AllowAll)))
                .only([Operation::Index])
                .formats([Format::Html, Format::Txt]),
        )
        .resource(
            Resource::singular("contact", page("contacts"))
                .only([Operation::New])
                .shallow()
                .nest(Resource::plural("email", page("email")).only([Operation::Update, Operation::Show]))
                .nest(
                    Resource::plural("telephone", page("telephone"))
                        .only([Operation::Update, Operation::Show]),
                )
                .nest(
                    Resource::plural("message", page("message"))
                        .only([Operation::Update, Operation::Create]),
                ),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenants::{route_lines, BASELINE_LINES};
    use crate::config::AppConfig;
    use axum::http::Method;

    fn table() -> RouteTable {
        routes(&Shared::new(&AppConfig::default())).unwrap()
    }

    #[test]
    fn test_corporate_surface() {
        let table = table();
        for (method, path) in [
            (Method::GET, "/"),
            (Method::GET, "/health"),
            (Method::GET, "/term"),
            (Method::GET, "/staging"),
            (Method::GET, "/search"),
            (Method::GET, "/privacy"),
            (Method::GET, "/privacy/edit"),
            (Method::PATCH, "/privacy"),
            (Method::GET, "/contact/new"),
            (Method::GET, "/contact/email/1"),
            (Method::PUT, "/contact/telephone/1"),
            (Method::POST, "/contact/message"),
            (Method::PATCH, "/contact/message/1"),
            (Method::GET, "/robots.txt"),
        ] {
            assert!(table.lookup(&method, path).is_ok(), "{} {} should route", method, path);
        }
    }

    #[test]
    fn test_corporate_rejects_undeclared() {
        let table = table();
        for (method, path) in [
            (Method::GET, "/contact"),
            (Method::POST, "/contact"),
            (Method::GET, "/email/1"),
            (Method::GET, "/contact/message/1"),
            (Method::GET, "/registration/new"),
            (Method::DELETE, "/privacy"),
        ] {
            assert!(table.lookup(&method, path).is_err(), "{} {} should not route", method, path);
        }
        assert!(!table.has_handler("contacts#index"));
        assert!(!table.has_handler("contacts#show"));
    }

    #[test]
    fn test_full_route_listing() {
        let mut expected = vec!["GET / roots#index"];
        expected.extend(BASELINE_LINES);
        expected.extend([
            "GET /search searches#show",
            "GET /robots robots#index",
            "GET /contact/new contacts#new",
            "GET /contact/email/:id email#show",
            "PATCH /contact/email/:id email#update",
            "PUT /contact/email/:id email#update",
            "GET /contact/telephone/:id telephone#show",
            "PATCH /contact/telephone/:id telephone#update",
            "PUT /contact/telephone/:id telephone#update",
            "POST /contact/message message#create",
            "PATCH /contact/message/:id message#update",
            "PUT /contact/message/:id message#update",
        ]);
        assert_eq!(route_lines(&table()), expected);
    }
}
