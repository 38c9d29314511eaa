mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use common::{seeded_store, test_state};
use metrics_exporter_prometheus::PrometheusBuilder;
use serenity::router::init_router;
use tower::ServiceExt;

async fn app_with_metrics() -> Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    init_router(test_state(seeded_store().await), Some(handle))
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_metrics_preflight_is_answered() {
    let response = app_with_metrics()
        .await
        .oneshot(request(Method::OPTIONS, "/metrics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_metrics_scrape_carries_cors_headers() {
    let response = app_with_metrics()
        .await
        .oneshot(request(Method::GET, "/metrics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_unknown_path_preflight_is_answered() {
    let response = app_with_metrics()
        .await
        .oneshot(request(Method::OPTIONS, "/nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_unknown_path_not_found_carries_cors_headers() {
    let response = app_with_metrics()
        .await
        .oneshot(request(Method::GET, "/nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}
