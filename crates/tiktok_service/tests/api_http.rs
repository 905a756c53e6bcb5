// Router-level tests for the TikTok service.

use api_common::CountLimit;
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    tiktok_service::create_sample_router(CountLimit::default())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let resp = test_router().oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_returns_ok_true() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn trends_returns_sample_videos() {
    let (status, body) = get("/trends?count=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": "sample0",
                "author": "user",
                "views": 1000,
                "likes": 100,
                "durationSec": 15,
                "cover": "https://via.placeholder.com/200x300",
                "url": "https://www.tiktok.com/@user/video/100000"
            },
            {
                "id": "sample1",
                "author": "user",
                "views": 1001,
                "likes": 101,
                "durationSec": 15,
                "cover": "https://via.placeholder.com/200x300",
                "url": "https://www.tiktok.com/@user/video/100001"
            }
        ])
    );
}

#[tokio::test]
async fn trends_defaults_to_five_and_ignores_unknown_params() {
    let (status, body) = get("/trends?hashtag=ignored").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 5);
    assert_eq!(items[4]["id"], "sample4");
}

#[tokio::test]
async fn search_ignores_query_text() {
    let (status, a) = get("/search?q=cats&count=3").await;
    assert_eq!(status, StatusCode::OK);
    let (_, b) = get("/search?q=dogs&count=3").await;
    assert_eq!(a, b);
    assert_eq!(a.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn search_requires_q() {
    let (status, body) = get("/search").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn invalid_counts_are_rejected() {
    for uri in ["/trends?count=many", "/trends?count=-3", "/search?q=x&count=101"] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn limit_is_inclusive() {
    let (status, body) = get("/trends?count=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(100));
    assert_eq!(body[99]["url"], "https://www.tiktok.com/@user/video/100099");
}
