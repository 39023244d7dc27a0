//! # Inventory Handlers
//!
//! CRUD + search endpoints over the catalog, translating between HTTP DTOs
//! and the inventory service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{ApiError, not_found, validation_error};
use crate::gateways::inventory::ItemWithSupplier;
use crate::models::{inventory_item, supplier};
use crate::server::AppState;
use crate::services::{ItemChanges, NewItem};

/// Query parameters for listing catalog items
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Substring matched case-insensitively against item name and SKU
    pub search: Option<String>,
}

/// Supplier as embedded in an item response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SupplierDto {
    /// Unique identifier for the supplier (UUID)
    pub id: String,
    /// Display name
    #[schema(example = "Default Supplier")]
    pub name: String,
    /// Contact email (optional)
    pub email: Option<String>,
    /// Contact phone (optional)
    pub phone: Option<String>,
    /// Postal address (optional)
    pub address: Option<String>,
}

impl From<supplier::Model> for SupplierDto {
    fn from(supplier: supplier::Model) -> Self {
        Self {
            id: supplier.id.to_string(),
            name: supplier.name,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
        }
    }
}

/// Catalog item response payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    /// Unique identifier for the item (UUID)
    pub id: String,
    /// Stock keeping unit
    #[schema(example = "SKU-001")]
    pub sku: String,
    /// Display name
    #[schema(example = "Sample Item")]
    pub name: String,
    /// Free-form description (optional)
    pub description: Option<String>,
    /// Units currently on hand
    pub quantity_on_hand: i32,
    /// Unit price as a decimal string
    #[schema(example = "9.99")]
    pub unit_price: String,
    /// Owning supplier id (UUID)
    pub supplier_id: String,
    /// Resolved supplier, when the query loaded it
    pub supplier: Option<SupplierDto>,
    /// Timestamp when the item was created (ISO 8601)
    pub created_at: String,
    /// Timestamp when the item was last updated (ISO 8601, optional)
    pub updated_at: Option<String>,
}

impl ItemDto {
    fn from_model(item: inventory_item::Model, supplier: Option<supplier::Model>) -> Self {
        Self {
            id: item.id.to_string(),
            sku: item.sku,
            name: item.name,
            description: item.description,
            quantity_on_hand: item.quantity_on_hand,
            unit_price: item.unit_price.to_string(),
            supplier_id: item.supplier_id.to_string(),
            supplier: supplier.map(SupplierDto::from),
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

impl From<ItemWithSupplier> for ItemDto {
    fn from((item, supplier): ItemWithSupplier) -> Self {
        Self::from_model(item, supplier)
    }
}

/// Request payload for creating a catalog item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequestDto {
    /// Stock keeping unit (required, unique)
    #[schema(example = "SKU-002")]
    pub sku: String,
    /// Display name (required)
    #[schema(example = "Anvil")]
    pub name: String,
    /// Free-form description (optional)
    pub description: Option<String>,
    /// Units on hand (defaults to 0)
    #[serde(default)]
    pub quantity_on_hand: i32,
    /// Unit price as a decimal string
    #[schema(example = "9.99")]
    pub unit_price: String,
    /// Owning supplier id (UUID)
    pub supplier_id: Uuid,
}

/// Request payload for replacing a catalog item's mutable fields
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequestDto {
    /// Stock keeping unit (required, unique)
    pub sku: String,
    /// Display name (required)
    pub name: String,
    /// Free-form description (optional)
    pub description: Option<String>,
    /// Units on hand
    #[serde(default)]
    pub quantity_on_hand: i32,
    /// Unit price as a decimal string
    pub unit_price: String,
    /// Owning supplier id (UUID)
    pub supplier_id: Uuid,
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(validation_error(
            "Validation failed",
            serde_json::json!({ field: "must not be blank" }),
        ));
    }
    Ok(())
}

fn parse_price(value: &str) -> Result<Decimal, ApiError> {
    value.parse::<Decimal>().map_err(|_| {
        validation_error(
            "Validation failed",
            serde_json::json!({ "unit_price": "must be a decimal number" }),
        )
    })
}

/// List catalog items
#[utoipa::path(
    get,
    path = "/api/v1/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Items sorted ascending by name", body = [ItemDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "inventory"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemDto>>, ApiError> {
    let items = state.inventory.get_items(query.search.as_deref()).await?;

    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// Create a catalog item
#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto, headers(
            ("Location", description = "URL of the created item")
        )),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 409, description = "Duplicate SKU or unknown supplier", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "inventory"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequestDto>,
) -> Result<(StatusCode, [(&'static str, String); 1], Json<ItemDto>), ApiError> {
    require_non_blank("sku", &request.sku)?;
    require_non_blank("name", &request.name)?;
    let unit_price = parse_price(&request.unit_price)?;

    let item = state
        .inventory
        .add_item(NewItem {
            id: None,
            sku: request.sku.trim().to_string(),
            name: request.name.trim().to_string(),
            description: request.description,
            quantity_on_hand: request.quantity_on_hand,
            unit_price,
            supplier_id: request.supplier_id,
        })
        .await?;

    tracing::info!(item_id = %item.id, sku = %item.sku, "catalog item created");

    let location = format!("/api/v1/items/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [("Location", location)],
        Json(ItemDto::from_model(item, None)),
    ))
}

/// Replace a catalog item's mutable fields
#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(("id" = Uuid, Path, description = "Item UUID")),
    request_body = UpdateItemRequestDto,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "No item with that id", body = ApiError),
        (status = 409, description = "Duplicate SKU or unknown supplier", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "inventory"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateItemRequestDto>,
) -> Result<Json<ItemDto>, ApiError> {
    require_non_blank("sku", &request.sku)?;
    require_non_blank("name", &request.name)?;
    let unit_price = parse_price(&request.unit_price)?;

    let updated = state
        .inventory
        .update_item(ItemChanges {
            id,
            sku: request.sku.trim().to_string(),
            name: request.name.trim().to_string(),
            description: request.description,
            quantity_on_hand: request.quantity_on_hand,
            unit_price,
            supplier_id: request.supplier_id,
        })
        .await?
        .ok_or_else(|| not_found("ITEM_NOT_FOUND", "Item not found"))?;

    Ok(Json(ItemDto::from_model(updated, None)))
}

/// Delete a catalog item
#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(("id" = Uuid, Path, description = "Item UUID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with that id", body = ApiError),
        (status = 409, description = "Item is referenced by an order", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "inventory"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.inventory.delete_item(id).await?;

    if !deleted {
        return Err(not_found("ITEM_NOT_FOUND", "Item not found"));
    }

    tracing::info!(item_id = %id, "catalog item deleted");

    Ok(StatusCode::NO_CONTENT)
}
