//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lru_cache_server::{
    api::{cors_layer, create_router},
    AppState, SharedCache,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: usize) -> Router {
    let state = AppState::new(SharedCache::with_capacity(capacity, None).unwrap());
    create_router(state, cors_layer("*").unwrap())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn set(app: &Router, key: &str, value: &str) {
    let body = json!({"key": key, "value": value}).to_string();
    let response = app.clone().oneshot(set_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

async fn get_all(app: &Router) -> Value {
    let response = app.clone().oneshot(get_request("/get-all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app(3);

    let response = app
        .oneshot(set_request(r#"{"key":"test_key","value":"test_value"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_set_endpoint_with_duration() {
    let app = create_test_app(3);

    let response = app
        .oneshot(set_request(
            r#"{"key":"ttl_key","value":"ttl_value","duration":"1m"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_set_rejects_bad_bodies() {
    let app = create_test_app(3);

    let bodies = [
        r#"{"invalid json"#,
        r#"{"key":"","value":"test"}"#,
        r#"{"key":"k","value":""}"#,
        r#"{"value":"only"}"#,
        r#"{"key":"k","value":42}"#,
        r#"{"key":"k","value":"v","duration":"forever"}"#,
        r#"[]"#,
    ];

    for body in bodies {
        let response = app.clone().oneshot(set_request(body)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {} should be rejected",
            body
        );
        let json = body_to_json(response.into_body()).await;
        assert!(json["error"].is_string());
    }

    assert_eq!(get_all(&app).await, json!([]));
}

#[tokio::test]
async fn test_set_without_content_type() {
    let app = create_test_app(3);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/set")
                .body(Body::from(r#"{"key":"k","value":"v"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app(3);
    set(&app, "get_key", "get_value").await;

    let response = app
        .oneshot(get_request("/get?key=get_key"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"key": "get_key", "value": "get_value"}));
}

#[tokio::test]
async fn test_get_endpoint_url_encoded_key() {
    let app = create_test_app(3);
    set(&app, "a b&c", "spaced").await;

    let response = app
        .oneshot(get_request("/get?key=a%20b%26c"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"], "spaced");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app(3);

    let response = app
        .oneshot(get_request("/get?key=nonexistent_key"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("nonexistent_key"));
}

#[tokio::test]
async fn test_get_endpoint_missing_key() {
    let app = create_test_app(3);

    for uri in ["/get", "/get?key=", "/get?other=1"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

// == GET-ALL / LRU Behaviour ==

#[tokio::test]
async fn test_get_all_empty() {
    let app = create_test_app(3);
    assert_eq!(get_all(&app).await, json!([]));
}

#[tokio::test]
async fn test_get_all_evicts_least_recently_used() {
    let app = create_test_app(2);

    set(&app, "a", "1").await;
    set(&app, "b", "2").await;
    set(&app, "c", "3").await;

    assert_eq!(
        get_all(&app).await,
        json!([{"key": "c", "value": "3"}, {"key": "b", "value": "2"}])
    );
}

#[tokio::test]
async fn test_get_refreshes_recency() {
    let app = create_test_app(2);

    set(&app, "a", "1").await;
    set(&app, "b", "2").await;
    let response = app.clone().oneshot(get_request("/get?key=a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    set(&app, "c", "3").await;

    assert_eq!(
        get_all(&app).await,
        json!([{"key": "c", "value": "3"}, {"key": "a", "value": "1"}])
    );

    let response = app.oneshot(get_request("/get?key=b")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_all_does_not_change_recency() {
    let app = create_test_app(2);

    set(&app, "a", "1").await;
    set(&app, "b", "2").await;
    let first = get_all(&app).await;
    let second = get_all(&app).await;
    assert_eq!(first, second);

    set(&app, "c", "3").await;
    assert_eq!(
        get_all(&app).await,
        json!([{"key": "c", "value": "3"}, {"key": "b", "value": "2"}])
    );
}

#[tokio::test]
async fn test_overwrite_keeps_single_entry() {
    let app = create_test_app(3);

    set(&app, "a", "1").await;
    set(&app, "a", "2").await;

    assert_eq!(get_all(&app).await, json!([{"key": "a", "value": "2"}]));
}

#[tokio::test]
async fn test_expired_entry_disappears() {
    let app = create_test_app(3);

    let response = app
        .clone()
        .oneshot(set_request(
            r#"{"key":"ttl_test","value":"expires_soon","duration":"50ms"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    set(&app, "stays", "here").await;

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(get_all(&app).await, json!([{"key": "stays", "value": "here"}]));
    let response = app
        .oneshot(get_request("/get?key=ttl_test"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint() {
    let app = create_test_app(3);
    set(&app, "delete_key", "delete_value").await;

    let delete = |uri: &'static str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete("/del?key=delete_key")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"key": "delete_key", "removed": true}));

    let response = app.clone().oneshot(delete("/del?key=delete_key")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete("/del")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == STATS / HEALTH ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(1);

    set(&app, "stats_key", "stats_value").await;
    let _ = app.clone().oneshot(get_request("/get?key=stats_key")).await.unwrap();
    let _ = app.clone().oneshot(get_request("/get?key=nonexistent")).await.unwrap();
    set(&app, "other", "value").await;

    let response = app.oneshot(get_request("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["capacity"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(3);

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
