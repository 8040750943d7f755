//! Enforcement behaviour of the axum middleware.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tower::ServiceExt;

use fetchgate_core::{PolicyConfig, PolicyEngine, RequestView, ViolationLogger};
use fetchgate_gateway::{
    app_state::AppState, config, middleware::FetchMetadataGate, obs::GatewayMetrics, router,
};

#[derive(Default)]
struct MethodLogger {
    reports: Mutex<Vec<String>>,
}

impl ViolationLogger for MethodLogger {
    fn log(&self, request: &dyn RequestView) {
        self.reports.lock().unwrap().push(request.method().to_string());
    }
}

fn app() -> Router {
    Router::new()
        .route("/carbonara", get(|| async { "carbonara" }).post(|| async { "carbonara" }))
        .route("/bolognese", get(|| async { "bolognese" }).post(|| async { "bolognese" }))
}

fn guarded(cfg: PolicyConfig) -> (Router, Arc<GatewayMetrics>) {
    let metrics = Arc::new(GatewayMetrics::default());
    let gate = FetchMetadataGate::new(Arc::new(PolicyEngine::new(cfg)), metrics.clone());
    (gate.protect(app()), metrics)
}

fn request(method: &str, path: &str, site: &str, mode: &str, dest: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Sec-Fetch-Site", site)
        .header("Sec-Fetch-Mode", mode)
        .header("Sec-Fetch-Dest", dest)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn allowed_request_reaches_handler_untouched() {
    let (app, metrics) = guarded(PolicyConfig::default());
    let resp = app
        .oneshot(request("GET", "/carbonara", "cross-site", "navigate", "document"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "carbonara");
    assert_eq!(metrics.decisions.get(&[("outcome", "allow")]), 1);
}

#[tokio::test]
async fn blocked_request_gets_empty_403() {
    let logger = Arc::new(MethodLogger::default());
    let (app, metrics) = guarded(PolicyConfig::builder().logger(logger.clone()).build().unwrap());
    let resp = app
        .oneshot(request("POST", "/carbonara", "cross-site", "cors", "empty"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(resp.headers().get(header::LOCATION).is_none());
    assert_eq!(body_string(resp).await, "");
    assert_eq!(*logger.reports.lock().unwrap(), vec!["POST".to_string()]);
    assert_eq!(metrics.decisions.get(&[("outcome", "block")]), 1);
}

#[tokio::test]
async fn report_only_passes_through_and_logs() {
    let logger = Arc::new(MethodLogger::default());
    let (app, _) = guarded(
        PolicyConfig::builder().logger(logger.clone()).report_only(true).build().unwrap(),
    );
    let resp = app
        .oneshot(request("POST", "/carbonara", "cross-site", "cors", "empty"))
        .await
        .unwrap();
    let bare = self::app()
        .oneshot(request("POST", "/carbonara", "cross-site", "cors", "empty"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LOCATION).is_none());
    assert_eq!(resp.headers(), bare.headers());
    assert_eq!(body_string(resp).await, "carbonara");
    assert_eq!(*logger.reports.lock().unwrap(), vec!["POST".to_string()]);
}

#[tokio::test]
async fn redirect_location_is_the_configured_target() {
    let (app, _) = guarded(
        PolicyConfig::builder().redirect_to("https://spaghetti.com").build().unwrap(),
    );
    let resp = app
        .oneshot(request("POST", "/carbonara", "cross-site", "cors", "empty"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "https://spaghetti.com");
}

#[tokio::test]
async fn redirect_target_answers_with_301() {
    let logger = Arc::new(MethodLogger::default());
    let (app, metrics) = guarded(
        PolicyConfig::builder()
            .exempt_path("/carbonara")
            .nav_isolation(true)
            .redirect_to("https://spaghetti.com/carbonara")
            .logger(logger.clone())
            .build()
            .unwrap(),
    );
    let resp = app
        .oneshot(request("GET", "/bolognese", "cross-site", "navigate", "document"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://spaghetti.com/carbonara"
    );
    assert_eq!(body_string(resp).await, "");
    assert_eq!(logger.reports.lock().unwrap().len(), 1);
    assert_eq!(metrics.decisions.get(&[("outcome", "redirect")]), 1);
}

#[tokio::test]
async fn exempt_path_is_never_gated() {
    let (app, _) = guarded(PolicyConfig::builder().exempt_path("/carbonara").build().unwrap());
    let resp = app
        .oneshot(request("POST", "/carbonara", "cross-site", "cors", "empty"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_headers_are_allowed() {
    let (app, _) = guarded(PolicyConfig::default());
    let req = Request::builder()
        .method("DELETE")
        .uri("/carbonara")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    // Route exists for GET/POST only; reaching the router proves the guard let it through.
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn gateway_router_counts_violations_and_serves_ops_unguarded() {
    let cfg = config::load_from_str(
        r#"
version: 1
fetch_metadata:
  exempt_paths: ["/api/public"]
"#,
    )
    .unwrap();
    let state = AppState::new(cfg).unwrap();
    let app = router::build_router(state.clone(), router::demo_app());

    let resp = app
        .clone()
        .oneshot(request("POST", "/", "cross-site", "no-cors", "script"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/public", "cross-site", "cors", "empty"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // ops routes sit outside the guard
    let resp = app
        .clone()
        .oneshot(request("GET", "/metrics", "cross-site", "no-cors", "image"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("fetchgate_decisions_total{outcome=\"block\"} 1"), "{body}");
    assert!(body.contains("fetchgate_decisions_total{outcome=\"allow\"} 1"), "{body}");
    assert!(
        body.contains("fetchgate_violations_total{dest=\"script\",mode=\"no-cors\",site=\"cross-site\"} 1"),
        "{body}"
    );
}

#[tokio::test]
async fn exempt_paths_overlapping_ops_or_route_syntax_do_not_break_startup() {
    let cfg = config::load_from_str(
        r#"
version: 1
fetch_metadata:
  exempt_paths: ["/healthz", "/metrics", "/:id", "/*rest"]
"#,
    )
    .unwrap();
    let state = AppState::new(cfg).unwrap();
    let app = router::build_router(state.clone(), router::demo_app());

    let resp = app
        .clone()
        .oneshot(request("POST", "/:id", "cross-site", "cors", "empty"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request("POST", "/anything/else", "cross-site", "cors", "empty"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .oneshot(request("GET", "/healthz", "cross-site", "no-cors", "image"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}
