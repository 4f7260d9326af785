//! Request identification and the parsed request handed to controllers.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Carry routing results (tenant, params, format) into controllers
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An incoming X-Request-ID is kept, not replaced

use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::routing::resource::Format;
use crate::tenants::Tenant;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID attached to a request, if any.
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(&X_REQUEST_ID).and_then(|v| v.to_str().ok())
}

/// What a controller sees of a routed request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub tenant: Tenant,
    pub method: Method,
    pub path: String,
    pub format: Format,
    pub params: Vec<(String, String)>,
    pub request_id: String,
}

impl RequestContext {
    /// Value of a captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
