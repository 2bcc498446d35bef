//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use session_resolver::{api::create_router, AppState, Config};
use tower::ServiceExt;

use common::TestKeys;

// == Helper Functions ==

fn create_test_app(keys: &TestKeys) -> Router {
    let config = Config {
        public_key: Some(keys.condensed_pem()),
        ..Config::default()
    };
    create_router(AppState::from_config(&config).unwrap())
}

fn resolve_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/resolve")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Resolve Endpoint Tests ==

#[tokio::test]
async fn test_resolve_valid_token() {
    let keys = TestKeys::generate();
    let app = create_test_app(&keys);
    let token = keys.sign(json!({ "sub": "user_123" }));

    let response = app
        .oneshot(resolve_request(json!({ "session_token": token }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["user_id"], "user_123");
}

#[tokio::test]
async fn test_resolve_repeated_token_hits_cache() {
    let keys = TestKeys::generate();
    let app = create_test_app(&keys);
    let token = keys.sign(json!({ "sub": "user_123" }));

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(resolve_request(json!({ "session_token": token }).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["verifications"], 1);
    assert_eq!(json["hits"], 2);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
}

#[tokio::test]
async fn test_resolve_missing_token() {
    let keys = TestKeys::generate();

    for body in [r#"{}"#, r#"{"session_token":""}"#] {
        let response = create_test_app(&keys)
            .oneshot(resolve_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["error"], "sessionToken is missing");
    }
}

#[tokio::test]
async fn test_resolve_token_from_other_issuer() {
    let keys = TestKeys::generate();
    let app = create_test_app(&keys);
    let forged = TestKeys::generate().sign(json!({ "sub": "admin" }));

    let response = app
        .clone()
        .oneshot(resolve_request(json!({ "session_token": forged }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "invalid signature");

    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["total_entries"], 0);
    assert_eq!(json["verification_failures"], 1);
}

#[tokio::test]
async fn test_resolve_expired_token() {
    let keys = TestKeys::generate();
    let exp = chrono::Utc::now().timestamp() - 60;
    let token = keys.sign(json!({ "sub": "user_1", "exp": exp }));

    let response = create_test_app(&keys)
        .oneshot(resolve_request(json!({ "session_token": token }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("expired"));
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let keys = TestKeys::generate();

    let response = create_test_app(&keys)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_route() {
    let keys = TestKeys::generate();

    let response = create_test_app(&keys)
        .oneshot(Request::builder().uri("/get/anything").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
