//! Request dispatch errors.
//!
//! Every variant is terminal for the request and maps to a single status
//! code. Nothing here is retried.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routing::resource::Format;
use crate::tenants::Tenant;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No tenant is configured for the request host.
    #[error("no tenant bound to host {host:?}")]
    UnknownHost { host: Option<String> },

    /// The tenant's table has no route for the request.
    #[error("no route for {path}")]
    NotFound { tenant: Option<Tenant>, path: String },

    /// A route matched but does not answer the requested format.
    #[error("{handler} cannot respond with {}", .format.extension())]
    NotAcceptable { handler: String, format: Format },
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            // An unknown host is reported the same way as a missing route.
            DispatchError::UnknownHost { .. } | DispatchError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            DispatchError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = status.canonical_reason().unwrap_or("Error");
        (
            status,
            [(header::CONTENT_TYPE, Format::Txt.content_type())],
            body,
        )
            .into_response()
    }
}
