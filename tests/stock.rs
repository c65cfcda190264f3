use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use merchandise_api::{
    external::{
        database::{CloudDatabase, CloudDatabaseError},
        memory::InMemoryCloudDatabase,
    },
    models::ProductDto,
    routes::app_router,
    state::AppState,
};

fn app_with(database: impl CloudDatabase + 'static) -> Router {
    app_router(AppState::new(Arc::new(database)))
}

fn stock_total_request() -> Request<Body> {
    Request::builder()
        .uri("/api/stock/total")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// A store that always fails, standing in for an unreachable cloud database.
struct UnreachableCloudDatabase;

#[async_trait::async_trait]
impl CloudDatabase for UnreachableCloudDatabase {
    async fn fetch_all(&self) -> Result<Vec<ProductDto>, CloudDatabaseError> {
        Err(CloudDatabaseError::Unreachable(
            "connection refused".to_string(),
        ))
    }
}

#[tokio::test]
async fn get_stock_total_returns_success_status_code() {
    let app = app_with(InMemoryCloudDatabase::with_default_catalog());

    let response = app.oneshot(stock_total_request()).await.unwrap();

    assert!(response.status().is_success());
}

#[tokio::test]
async fn get_stock_total_returns_expected_json() {
    let app = app_with(InMemoryCloudDatabase::with_default_catalog());

    let response = app.oneshot(stock_total_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content-type header");
    assert_eq!(content_type, "application/json");

    let json = body_json(response).await;
    let total = json["stockItemTotal"].as_i64().expect("numeric total");
    assert!(total > 0);
}

#[tokio::test]
async fn get_stock_total_returns_expected_stock_quantity() {
    let app = app_with(InMemoryCloudDatabase::with_stock_counts(&[200, 500, 300]));

    let response = app.oneshot(stock_total_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["stockItemTotal"], 1000);
}

#[tokio::test]
async fn get_stock_total_with_empty_store_is_zero_not_error() {
    let app = app_with(InMemoryCloudDatabase::with_products(Vec::new()));

    let response = app.oneshot(stock_total_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["stockItemTotal"], 0);
}

#[tokio::test]
async fn get_stock_total_is_idempotent() {
    let app = app_with(InMemoryCloudDatabase::with_stock_counts(&[7, 11]));

    let first = app.clone().oneshot(stock_total_request()).await.unwrap();
    let second = app.oneshot(stock_total_request()).await.unwrap();

    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn get_stock_total_surfaces_store_failure_as_server_error() {
    let app = app_with(UnreachableCloudDatabase);

    let response = app.oneshot(stock_total_request()).await.unwrap();
    assert!(response.status().is_server_error());

    // A failure must never be reported as a zero total.
    let json = body_json(response).await;
    assert!(json.get("stockItemTotal").is_none());
}
