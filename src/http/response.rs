//! Controller replies and their HTTP rendering.
//!
//! # Design Decisions
//! - Pages are rendered as minimal HTML documents
//! - Redirects use 302 Found, so external hosts are allowed
//! - Controllers never build `Response` values directly

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::routing::resource::Format;

/// What a controller action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// An HTML page with a title and pre-rendered body markup.
    Page { title: String, body: String },
    /// A plain text document.
    Text(String),
    /// Redirect to an absolute or relative URL.
    Redirect(String),
}

impl Reply {
    pub fn page(title: impl Into<String>, body: impl Into<String>) -> Self {
        Reply::Page {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Page { title, body } => {
                let html = format!(
                    "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
                    title, body
                );
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, Format::Html.content_type())],
                    html,
                )
                    .into_response()
            }
            Reply::Text(text) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, Format::Txt.content_type())],
                text,
            )
                .into_response(),
            Reply::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}
