mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use common::{BrokenStore, access_token, body_json, get, setup_test_app, test_state};
use serenity::router::init_router;
use tower::ServiceExt;

async fn status_for(uri: &str, user_id: &str) -> StatusCode {
    let (app, _) = setup_test_app().await;
    app.oneshot(get(uri, Some(&access_token(user_id))))
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_user_is_forbidden_on_admin_route() {
    let (app, _) = setup_test_app().await;
    let response = app
        .oneshot(get("/api/admin/me", Some(&access_token("member"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["code"], "insufficient_role");
}

#[tokio::test]
async fn test_admin_and_super_admin_pass_admin_route() {
    assert_eq!(status_for("/api/admin/me", "admin").await, StatusCode::OK);
    assert_eq!(status_for("/api/admin/me", "root").await, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_route_returns_resolved_principal() {
    let (app, _) = setup_test_app().await;
    let response = app
        .oneshot(get("/api/admin/me", Some(&access_token("admin"))))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["user"]["id"], "admin");
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["email"], "admin@serenity.io");
}

#[tokio::test]
async fn test_super_admin_route_admits_only_super_admin() {
    let uri = "/api/super-admin/users/member";
    assert_eq!(status_for(uri, "member").await, StatusCode::FORBIDDEN);
    assert_eq!(status_for(uri, "admin").await, StatusCode::FORBIDDEN);
    assert_eq!(status_for(uri, "root").await, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_principal_is_unauthorized() {
    let (app, _) = setup_test_app().await;
    let response = app
        .oneshot(get("/api/admin/me", Some(&access_token("ghost"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "principal_not_found");
}

#[tokio::test]
async fn test_role_gate_validates_token_first() {
    let (app, _) = setup_test_app().await;
    let response = app.oneshot(get("/api/admin/me", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "no_token");
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let app = init_router(test_state(Arc::new(BrokenStore)), None);
    let response = app
        .oneshot(get("/api/admin/me", Some(&access_token("admin"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["code"], "internal_lookup_failure");
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("10.0.0.7"));
}
