//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use tokio::net::TcpListener;
use tower::ServiceExt;
use www_router::config::AppConfig;
use www_router::environment::Environment;
use www_router::{HttpServer, Shutdown};

pub const CORPORATE_HOST: &str = "www.example.com";
pub const SERVICE_HOST: &str = "app.example.com";
pub const STAFF_HOST: &str = "www.jp.example.org";

/// Config with all three tenants bound.
pub fn config(environment: Environment) -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = environment;
    config.hosts.corporate = Some(CORPORATE_HOST.into());
    config.hosts.service = Some(SERVICE_HOST.into());
    config.hosts.staff = Some(STAFF_HOST.into());
    config
}

/// Send one request through the full middleware stack without a socket.
pub async fn send(server: &HttpServer, method: Method, host: &str, path: &str) -> Response {
    server
        .router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a live server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}
