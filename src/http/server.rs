//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build tenant route tables and the host router
//! - Create the Axum Router with the dispatch handler
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Serve until shutdown is triggered

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{request_id, RequestContext, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::routing::matcher::request_host;
use crate::routing::{HostRouter, RouteError};
use crate::tenants;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<HostRouter>,
}

/// HTTP server for all tenants.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Build route tables and the middleware stack.
    ///
    /// Fails if any tenant's route table is inconsistent.
    pub fn new(config: AppConfig) -> Result<Self, RouteError> {
        let tables = tenants::build_tables(&config)?;
        let state = AppState {
            router: Arc::new(HostRouter::new(&config.hosts, tables)),
        };
        let router = Self::build_router(&config, state);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("SAMEORIGIN"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ));
        }

        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The fully layered router, for serving or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Select tenant and route, then call the bound controller.
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let (parts, _body) = request.into_parts();
    let request_id = request_id(&parts.headers).unwrap_or("unknown").to_string();
    let host = request_host(&parts.headers, &parts.uri);
    let path = parts.uri.path();

    let (tenant, matched) = match state.router.recognize(host.as_deref(), &parts.method, path) {
        Ok(found) => found,
        Err(err) => {
            tracing::debug!(
                request_id = %request_id,
                host = ?host,
                method = %parts.method,
                path = %path,
                error = %err,
                "No route matched"
            );
            let response = err.into_response();
            metrics::record_request("none", "none", response.status().as_u16(), start);
            return response;
        }
    };

    let route = matched.route;
    let handler = route.handler.to_string();
    tracing::debug!(
        request_id = %request_id,
        tenant = %tenant,
        handler = %handler,
        "Dispatching"
    );

    let ctx = RequestContext {
        tenant,
        method: parts.method.clone(),
        path: path.to_string(),
        format: matched.format,
        params: matched.params,
        request_id,
    };
    let response = route.controller().call(route.action(), &ctx).into_response();

    metrics::record_request(tenant.as_str(), &handler, response.status().as_u16(), start);
    response
}
