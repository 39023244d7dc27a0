//! # HTTP Server
//!
//! Router construction and dependency wiring for the stockroom service.

use axum::{
    Router,
    routing::{get, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::gateways::{CredentialRepository, InventoryRepository};
use crate::handlers;
use crate::services::{AuthService, InventoryService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService>,
    pub inventory: Arc<InventoryService>,
}

/// Constructs the services over their store gateways and bundles them into
/// the shared state. The caller owns the result; there is no global holder.
pub fn build_state(config: AppConfig, db: DatabaseConnection) -> AppState {
    let pool = Arc::new(db.clone());

    let auth = Arc::new(AuthService::new(Arc::new(CredentialRepository::new(
        Arc::clone(&pool),
    ))));
    let inventory = Arc::new(InventoryService::new(Arc::new(InventoryRepository::new(
        pool,
    ))));

    AppState {
        config: Arc::new(config),
        db,
        auth,
        inventory,
    }
}

/// Builds the application router over the given state.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/auth/login", axum::routing::post(handlers::auth::login))
        .route(
            "/api/v1/items",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        .route(
            "/api/v1/items/{id}",
            put(handlers::inventory::update_item).delete(handlers::inventory::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Binds the configured address and serves requests until shutdown.
pub async fn run_server(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state
        .config
        .bind_addr()
        .map_err(|e| format!("invalid bind address: {e}"))?;

    let profile = state.config.profile.clone();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI document served next to the Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::auth::login,
        crate::handlers::inventory::list_items,
        crate::handlers::inventory::create_item,
        crate::handlers::inventory::update_item,
        crate::handlers::inventory::delete_item,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::handlers::auth::LoginRequestDto,
            crate::handlers::auth::UserDto,
            crate::handlers::inventory::ItemDto,
            crate::handlers::inventory::SupplierDto,
            crate::handlers::inventory::CreateItemRequestDto,
            crate::handlers::inventory::UpdateItemRequestDto,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Stockroom API",
        description = "API for managing an inventory catalog",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
