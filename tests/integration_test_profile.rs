mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_update_profile_bio() {
    let app = TestApp::new().await;
    app.register("biouser", "Bio User", "s3cret-pass").await;
    let auth = app.login("biouser", "s3cret-pass").await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("PUT")
            .uri("/api/v1/users/profile")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "bio": "I schedule things." }).to_string()))
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["bio"], "I schedule things.");
    assert_eq!(body["username"], "biouser");
}

#[tokio::test]
async fn test_update_profile_requires_session() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("PUT")
            .uri("/api/v1/users/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "bio": "anonymous" }).to_string()))
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_profile_hides_credentials() {
    let app = TestApp::new().await;
    app.register("publicuser", "Public User", "s3cret-pass").await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/v1/users/publicuser")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["username"], "publicuser");
    assert_eq!(body["name"], "Public User");
    assert!(body.get("password_hash").is_none(), "Profile must not leak the password hash");
}

#[tokio::test]
async fn test_unknown_profile_is_not_found() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/v1/users/nobody")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_survives_after_bio_update() {
    let app = TestApp::new().await;
    app.register("persistent", "Persistent", "s3cret-pass").await;
    let auth = app.login("persistent", "s3cret-pass").await;

    app.router.clone().oneshot(
        Request::builder()
            .method("PUT")
            .uri("/api/v1/users/profile")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "bio": "first bio" }).to_string()))
            .unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/v1/users/persistent")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["bio"], "first bio");
    assert_eq!(body["name"], "Persistent");
}
