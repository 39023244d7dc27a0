//! End-to-end tests for the HTTP surface, driven through the router with an
//! in-memory store underneath.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use stockroom::config::AppConfig;
use stockroom::models::Supplier;
use stockroom::seeds::seed_initial_data;
use stockroom::server::{AppState, build_state, create_app};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::setup_test_db;

async fn setup_app() -> Result<(AppState, Router, Uuid)> {
    let db = setup_test_db().await?;
    let state = build_state(AppConfig::default(), db.clone());

    seed_initial_data(&db, &state.auth, &state.config.admin_default_password).await?;
    let supplier = Supplier::find().one(&db).await?.expect("supplier seeded");

    let app = create_app(state.clone());
    Ok((state, app, supplier.id))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn root_reports_service_info() -> Result<()> {
    let (_, app, _) = setup_app().await?;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["service"], "stockroom");
    Ok(())
}

#[tokio::test]
async fn login_succeeds_with_seeded_credentials() -> Result<()> {
    let (_, app, _) = setup_app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            json!({ "username": "Admin", "password": "Admin@123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "Admin");
    assert!(body.get("password_hash").is_none());
    Ok(())
}

#[tokio::test]
async fn login_failure_is_uniform_401() -> Result<()> {
    let (_, app, _) = setup_app().await?;

    for (username, password) in [("admin", "wrong"), ("ghost", "Admin@123")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                json!({ "username": username, "password": password }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response_json(response).await;
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert_eq!(body["message"], "Invalid username or password");
    }
    Ok(())
}

#[tokio::test]
async fn list_items_supports_search() -> Result<()> {
    let (_, app, _) = setup_app().await?;

    let all = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(all.status(), StatusCode::OK);

    let body = response_json(all).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["sku"], "SKU-001");
    assert_eq!(body[0]["supplier"]["name"], "Default Supplier");

    let miss = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/items?search=zzz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response_json(miss).await;
    assert!(body.as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn create_item_returns_201_with_location() -> Result<()> {
    let (_, app, supplier_id) = setup_app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/items",
            json!({
                "sku": "SKU-002",
                "name": "Anvil",
                "quantity_on_hand": 3,
                "unit_price": "19.50",
                "supplier_id": supplier_id,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers().get("Location").unwrap();
    assert!(location.to_str().unwrap().starts_with("/api/v1/items/"));

    let body = response_json(response).await;
    assert_eq!(body["sku"], "SKU-002");
    let price: Decimal = body["unit_price"].as_str().unwrap().parse()?;
    assert_eq!(price, Decimal::new(1950, 2));
    assert!(body["updated_at"].is_null());
    Ok(())
}

#[tokio::test]
async fn create_item_with_duplicate_sku_returns_409() -> Result<()> {
    let (_, app, supplier_id) = setup_app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/items",
            json!({
                "sku": "SKU-001",
                "name": "Second Sample",
                "unit_price": "1.00",
                "supplier_id": supplier_id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn create_item_with_blank_sku_returns_400() -> Result<()> {
    let (_, app, supplier_id) = setup_app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/items",
            json!({
                "sku": "   ",
                "name": "Nameless",
                "unit_price": "1.00",
                "supplier_id": supplier_id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    Ok(())
}

#[tokio::test]
async fn update_item_returns_404_for_unknown_id() -> Result<()> {
    let (_, app, supplier_id) = setup_app().await?;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/items/{}", Uuid::new_v4()),
            json!({
                "sku": "SKU-404",
                "name": "Ghost",
                "unit_price": "1.00",
                "supplier_id": supplier_id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["code"], "ITEM_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn update_item_overwrites_and_stamps_updated_at() -> Result<()> {
    let (state, app, supplier_id) = setup_app().await?;

    let items = state.inventory.get_items(None).await?;
    let (seeded, _) = &items[0];

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/items/{}", seeded.id),
            json!({
                "sku": "SKU-001",
                "name": "Sample Item, revised",
                "quantity_on_hand": 42,
                "unit_price": "10.00",
                "supplier_id": supplier_id,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["name"], "Sample Item, revised");
    assert_eq!(body["quantity_on_hand"], 42);
    assert!(!body["updated_at"].is_null());
    Ok(())
}

#[tokio::test]
async fn delete_item_returns_204_then_404() -> Result<()> {
    let (state, app, _) = setup_app().await?;

    let items = state.inventory.get_items(None).await?;
    let (seeded, _) = &items[0];
    let uri = format!("/api/v1/items/{}", seeded.id);

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    Ok(())
}
