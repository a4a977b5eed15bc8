//! API surface tests
//!
//! Exercises the router via `tower::ServiceExt::oneshot` without binding a
//! socket. Only paths that never need a successful upstream call are covered
//! here: request validation, the liveness probe, and the missing-credential
//! failure. GitHub fetch failures degrade to empty context, so the
//! missing-credential case reaches the generation step regardless of
//! connectivity.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use readmegen::config::AppConfig;
use readmegen::server::{build_router, AppState};

fn test_state(gemini_api_key: Option<&str>) -> Arc<AppState> {
    let config = AppConfig {
        github_token: None,
        gemini_api_key: gemini_api_key.map(String::from),
        model_override: None,
        port: 0,
        request_timeout_secs: 1,
        generation_timeout_secs: 1,
        log_level: "error".to_string(),
    };
    Arc::new(AppState::from_config(config))
}

fn post_generate(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = build_router(test_state(None));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "readmegen");
}

#[tokio::test]
async fn test_generate_rejects_missing_repo_url() {
    let router = build_router(test_state(Some("key")));

    let response = router.oneshot(post_generate(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing 'repoUrl' field in the request body.");
}

#[tokio::test]
async fn test_generate_rejects_blank_repo_url() {
    let router = build_router(test_state(Some("key")));

    let response = router
        .oneshot(post_generate(json!({ "repoUrl": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing 'repoUrl' field in the request body.");
}

#[tokio::test]
async fn test_generate_malformed_body_gets_json_error() {
    let router = build_router(test_state(Some("key")));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("this is not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing 'repoUrl' field in the request body.");
}

#[tokio::test]
async fn test_generate_missing_content_type_gets_json_error() {
    let router = build_router(test_state(Some("key")));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/generate")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing 'repoUrl' field in the request body.");
}

#[tokio::test]
async fn test_generate_rejects_non_github_url() {
    let router = build_router(test_state(Some("key")));

    let response = router
        .oneshot(post_generate(
            json!({ "repoUrl": "https://gitlab.com/owner/repo" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "The provided URL does not look like a valid GitHub repository."
    );
}

#[tokio::test]
async fn test_generate_without_api_key_fails_with_500() {
    let router = build_router(test_state(None));

    let response = router
        .oneshot(post_generate(
            json!({ "repoUrl": "https://github.com/rust-lang/rust" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("GEMINI_API_KEY"),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let router = build_router(test_state(None));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
