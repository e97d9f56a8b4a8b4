//! End-to-end routing tests against a stubbed upstream
//!
//! One in-test server stands in for both upstream APIs; the application
//! router is exercised in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use blog_api::config::{AuthConfig, Config, MicroCmsConfig, ZennConfig};
use blog_api::{build_router, AppState};

const API_KEY: &str = "test-secret";

/// Serve a stand-in for both upstream APIs and return its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/blog",
            get(|| async {
                Json(json!({
                    "contents": [{
                        "id": "a1",
                        "title": "Post",
                        "category": { "id": "technology", "name": "Technology" },
                        "description": "summary",
                        "body": "text",
                        "publishedAt": "2025-03-01T12:00:00Z",
                        "createdAt": "2025-03-01T12:00:00Z",
                        "updatedAt": "2025-03-01T12:00:00Z"
                    }],
                    "totalCount": 25
                }))
            }),
        )
        .route(
            "/blog/{id}",
            get(|Path(id): Path<String>| async move {
                Json(json!({
                    "id": id,
                    "title": "Post",
                    "category": { "id": "technology", "name": "Technology" },
                    "description": "summary",
                    "body": "text",
                    "publishedAt": "2025-03-01T12:00:00Z",
                    "createdAt": "2025-03-01T12:00:00Z",
                    "updatedAt": "2025-03-01T12:00:00Z"
                }))
            }),
        )
        .route(
            "/categories",
            get(|| async {
                Json(json!({
                    "contents": [{ "id": "technology", "name": "Technology" }],
                    "totalCount": 1
                }))
            }),
        )
        .route(
            "/articles",
            get(|| async {
                Json(json!({
                    "articles": [{
                        "id": 7,
                        "title": "Zenn post",
                        "slug": "zenn-post",
                        "emoji": "🦀",
                        "published_at": "2025-04-01T10:00:00Z",
                        "body_updated_at": "2025-04-01T10:00:00Z",
                        "user": { "id": 1, "username": "kozennoki", "name": "K" }
                    }],
                    "next_page": null
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve");
    });

    format!("http://{addr}")
}

async fn test_router() -> Router {
    let upstream = spawn_upstream().await;
    let config = Config {
        microcms: MicroCmsConfig {
            api_key: "cms-key".to_string(),
            service_id: "tenant".to_string(),
            base_url: Some(upstream.clone()),
        },
        zenn: ZennConfig {
            base_url: upstream,
            username: "kozennoki".to_string(),
        },
        auth: AuthConfig {
            api_key: API_KEY.to_string(),
        },
        ..Config::default()
    };

    build_router(AppState::new(config).expect("state wires"))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn authed(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-API-Key", API_KEY)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn test_health_requires_no_key() {
    let app = test_router().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_missing_key_is_unauthorized() {
    let app = test_router().await;

    let response = app
        .oneshot(Request::get("/api/v1/articles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "missing API key");
}

#[tokio::test]
async fn test_wrong_key_is_unauthorized() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::get("/api/v1/articles")
                .header("X-API-Key", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid API key");
}

#[tokio::test]
async fn test_list_articles_end_to_end() {
    let app = test_router().await;

    let response = app.oneshot(authed("/api/v1/articles")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["articles"][0]["id"], "a1");
    assert_eq!(body["articles"][0]["category"]["slug"], "technology");
    assert_eq!(body["pagination"]["total"], 25);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["totalPages"], 3);
}

#[tokio::test]
async fn test_list_articles_survives_huge_page_number() {
    let app = test_router().await;

    let response = app
        .oneshot(authed(
            "/api/v1/articles?page=9223372036854775807&limit=10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["page"], i64::MAX);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[tokio::test]
async fn test_get_article_by_id() {
    let app = test_router().await;

    let response = app.oneshot(authed("/api/v1/articles/a1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["article"]["id"], "a1");
}

#[tokio::test]
async fn test_popular_articles_have_no_pagination() {
    let app = test_router().await;

    let response = app
        .oneshot(authed("/api/v1/articles/popular?limit=3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.get("pagination").is_none());
    assert_eq!(body["articles"][0]["id"], "a1");
}

#[tokio::test]
async fn test_latest_articles_have_no_pagination() {
    let app = test_router().await;

    let response = app.oneshot(authed("/api/v1/articles/latest")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.get("pagination").is_none());
}

#[tokio::test]
async fn test_articles_by_category() {
    let app = test_router().await;

    let response = app
        .oneshot(authed("/api/v1/categories/technology/articles?page=1&limit=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 25);
    assert_eq!(body["articles"][0]["category"]["slug"], "technology");
}

#[tokio::test]
async fn test_categories() {
    let app = test_router().await;

    let response = app.oneshot(authed("/api/v1/categories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["categories"][0]["slug"], "technology");
    assert_eq!(body["categories"][0]["name"], "Technology");
}

#[tokio::test]
async fn test_zenn_articles_report_zero_total() {
    let app = test_router().await;

    let response = app.oneshot(authed("/api/v1/zenn/articles")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["articles"][0]["id"], "zenn-post");
    assert_eq!(body["articles"][0]["title"], "🦀Zenn post");
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_upstream_failure_surfaces_as_internal_error() {
    // State wired against an upstream that refuses connections
    let config = Config {
        microcms: MicroCmsConfig {
            api_key: "cms-key".to_string(),
            service_id: "tenant".to_string(),
            base_url: Some("http://127.0.0.1:1".to_string()),
        },
        auth: AuthConfig {
            api_key: API_KEY.to_string(),
        },
        ..Config::default()
    };
    let app = build_router(AppState::new(config).expect("state wires"));

    let response = app.oneshot(authed("/api/v1/articles")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("failed to count articles:"));
}
