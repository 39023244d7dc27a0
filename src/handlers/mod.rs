//! # API Handlers
//!
//! HTTP endpoint handlers for the stockroom service. Handlers only translate
//! between DTOs and the domain services; all logic lives in the services.

use axum::response::Json;

use crate::models::ServiceInfo;

pub mod auth;
pub mod inventory;

/// Report the service name and version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
