//! Host-routed dispatch through the full middleware stack.

use axum::http::{header, Method, StatusCode};
use www_router::environment::Environment;
use www_router::HttpServer;

mod common;

use common::{body_text, send, CORPORATE_HOST, SERVICE_HOST, STAFF_HOST};

fn server(environment: Environment) -> HttpServer {
    HttpServer::new(common::config(environment)).unwrap()
}

#[tokio::test]
async fn test_staff_health_is_html_not_json() {
    let server = server(Environment::Test);
    let response = send(&server, Method::GET, STAFF_HOST, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = body_text(response).await;
    assert!(body.contains("<h1>ok</h1>"));
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn test_robots_txt_format() {
    let server = server(Environment::Test);

    let txt = send(&server, Method::GET, SERVICE_HOST, "/robots.txt").await;
    assert_eq!(txt.status(), StatusCode::OK);
    assert_eq!(txt.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(body_text(txt).await, "User-agent: *\nDisallow:\n");

    let html = send(&server, Method::GET, SERVICE_HOST, "/robots").await;
    assert_eq!(html.status(), StatusCode::OK);
    assert!(html.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let staff = send(&server, Method::GET, STAFF_HOST, "/robots.txt").await;
    assert_eq!(body_text(staff).await, "User-agent: *\nDisallow: /\n");
}

#[tokio::test]
async fn test_staff_root_redirects_outside_development() {
    for environment in [Environment::Test, Environment::Staging, Environment::Production] {
        let server = server(environment);
        let response = send(&server, Method::GET, STAFF_HOST, "/").await;
        assert_eq!(response.status(), StatusCode::FOUND, "{}", environment);
        assert_eq!(response.headers()[header::LOCATION], "https://umaxica.org");
    }
}

#[tokio::test]
async fn test_staff_root_renders_in_development() {
    let server = server(Environment::Development);
    let response = send(&server, Method::GET, STAFF_HOST, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_other_roots_are_not_guarded() {
    let server = server(Environment::Production);
    for host in [CORPORATE_HOST, SERVICE_HOST] {
        let response = send(&server, Method::GET, host, "/").await;
        assert_eq!(response.status(), StatusCode::OK, "{}", host);
    }
}

#[tokio::test]
async fn test_host_isolation() {
    let server = server(Environment::Test);

    // Declared only for the app surface.
    assert_eq!(
        send(&server, Method::GET, SERVICE_HOST, "/preference").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/preference").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&server, Method::GET, CORPORATE_HOST, "/preference").await.status(),
        StatusCode::NOT_FOUND
    );

    // Declared only for the staff portal.
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/owner").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::GET, SERVICE_HOST, "/owner").await.status(),
        StatusCode::NOT_FOUND
    );

    // Declared only for the corporate site.
    assert_eq!(
        send(&server, Method::GET, CORPORATE_HOST, "/search").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/search").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_unknown_host_is_not_found() {
    let server = server(Environment::Test);
    let response = send(&server, Method::GET, "elsewhere.example.net", "/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_with_port_and_case() {
    let server = server(Environment::Test);
    let response = send(&server, Method::GET, "WWW.JP.Example.org:8443", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unset_host_leaves_tenant_unreachable() {
    let mut config = common::config(Environment::Test);
    config.hosts.service = None;
    let server = HttpServer::new(config).unwrap();

    assert_eq!(
        send(&server, Method::GET, SERVICE_HOST, "/preference").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&server, Method::GET, CORPORATE_HOST, "/health").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_nested_contact_scoping() {
    let server = server(Environment::Test);
    for host in [CORPORATE_HOST, SERVICE_HOST, STAFF_HOST] {
        assert_eq!(
            send(&server, Method::GET, host, "/contact/email/1").await.status(),
            StatusCode::OK,
            "{}",
            host
        );
        assert_eq!(
            send(&server, Method::GET, host, "/email/1").await.status(),
            StatusCode::NOT_FOUND,
            "{}",
            host
        );
    }

    // Contact is a resource on the public sites and a namespace for staff.
    assert_eq!(
        send(&server, Method::GET, CORPORATE_HOST, "/contact/new").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/contact/new").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_method_restrictions() {
    let server = server(Environment::Test);

    assert_eq!(
        send(&server, Method::DELETE, SERVICE_HOST, "/withdrawal").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::GET, SERVICE_HOST, "/withdrawal").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&server, Method::PATCH, CORPORATE_HOST, "/privacy").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        send(&server, Method::POST, STAFF_HOST, "/health").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&server, Method::HEAD, STAFF_HOST, "/health").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_unaccepted_format() {
    let server = server(Environment::Test);
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/health.json").await.status(),
        StatusCode::NOT_ACCEPTABLE
    );
    assert_eq!(
        send(&server, Method::GET, STAFF_HOST, "/health.exe").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_staging_shared_across_tenants() {
    let server = server(Environment::Staging);
    for host in [CORPORATE_HOST, SERVICE_HOST, STAFF_HOST] {
        let response = send(&server, Method::GET, host, "/staging.txt").await;
        assert_eq!(response.status(), StatusCode::OK, "{}", host);
        assert_eq!(body_text(response).await, "staging\n");
    }
}

#[tokio::test]
async fn test_member_id_reaches_controller() {
    let server = server(Environment::Test);

    let response = send(&server, Method::GET, SERVICE_HOST, "/registration/emails/42/edit").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("emails#edit"));
    assert!(body.contains("<p id=\"record\">42</p>"));

    let response = send(&server, Method::GET, STAFF_HOST, "/contact/telephone/7").await;
    assert!(body_text(response).await.contains("<p id=\"record\">7</p>"));
}
