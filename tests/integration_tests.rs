use actix_web::{http::StatusCode, test};
use clock_proxy::{AppConfig, AppState, MetricsConfig, SecurityHeadersConfig, create_app};
use serde_json::Value;

mod common;

use common::state_for;

const GAS_URL: &str = "http://127.0.0.1:9/macros/s/test-deployment/exec";

/// Integration test for the health check endpoint
///
/// Runs through the full app factory so the middleware stack and the
/// catch-all landing page route are in place.
#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {content_type}"
    );

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "healthy");
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string(), "commit should be a string");
    assert!(json["build_time"].is_string(), "build_time should be a string");
}

#[actix_web::test]
async fn test_metrics_endpoint_integration() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    // Generate some traffic first
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let _ = test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("http_request_duration_seconds"));
    assert!(text.contains("app_uptime_seconds"));
    assert!(text.contains(r#"route="/api/health""#), "{text}");
}

#[actix_web::test]
async fn test_metrics_endpoint_disabled() {
    let config = AppConfig {
        gas_webapp_url: GAS_URL.to_string(),
        ..AppConfig::default()
    };
    let state = AppState::with_settings(
        config,
        MetricsConfig { enabled: false },
        SecurityHeadersConfig::default(),
    )
    .unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_landing_page_is_served_for_unknown_paths() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    for path in ["/", "/favicon.ico", "/whatever/nested", "/api/clock", "/api/unknown"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "path {path}: {content_type}");

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Test Shop"), "path {path}");
        assert!(html.contains("1650000000-testLiff"), "path {path}");
    }
}

#[actix_web::test]
async fn test_landing_page_for_other_methods() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::post()
        .uri("/somewhere/else")
        .set_payload("anything")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Test Shop"));
}

#[actix_web::test]
async fn test_fallback_routes_share_one_metrics_label() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    for path in ["/a", "/b/c", "/d?e=f"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let _ = test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();

    assert!(!text.contains(r#"route="/b/c""#), "{text}");
    assert!(
        text.contains(r#"http_requests_total{method="GET",route="fallback",status="200"} 3"#),
        "{text}"
    );
    assert!(!text.contains(r#"route="/api/metrics""#), "{text}");
}

#[actix_web::test]
async fn test_request_id_is_generated() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("X-Request-ID header should be present")
        .to_str()
        .unwrap();
    assert_eq!(request_id.len(), 36, "expected a UUID, got {request_id}");
}

#[actix_web::test]
async fn test_request_id_is_preserved() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "liff-trace-1234"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "liff-trace-1234"
    );
}

#[actix_web::test]
async fn test_security_headers_are_applied() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();

    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("strict-transport-security"));
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("referrer-policy").unwrap(), "same-origin");
    assert!(
        !headers.contains_key("cache-control"),
        "landing page may be cached"
    );

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-store");
}

#[actix_web::test]
async fn test_openapi_spec_lists_clock_endpoint() {
    let app = test::init_service(create_app(state_for(GAS_URL))).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Clock Proxy");
    assert!(json["paths"]["/api/clock"]["post"].is_object(), "{json}");
    assert!(json["paths"]["/api/health"]["get"].is_object());
}
