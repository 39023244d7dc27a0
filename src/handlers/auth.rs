//! # Authentication Handlers
//!
//! Login endpoint translating between HTTP DTOs and the authentication
//! service.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, unauthorized};
use crate::models::user;
use crate::server::AppState;

/// Request payload for a login attempt
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Login name; matched case-insensitively
    #[schema(example = "admin")]
    pub username: String,
    /// Plaintext password
    pub password: String,
}

/// Authenticated user as returned to clients. Never carries hash or salt.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// Unique identifier for the user (UUID)
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// Normalized login name
    #[schema(example = "admin")]
    pub username: String,
    /// Role flag
    #[schema(example = "Admin")]
    pub role: String,
    /// Timestamp when the user was created (ISO 8601)
    pub created_at: String,
}

impl From<user::Model> for UserDto {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            role: user.role.to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Authenticate a username/password pair
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Authentication succeeded", body = UserDto),
        (status = 401, description = "Unknown user or wrong password", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestDto>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .auth
        .authenticate(&request.username, &request.password)
        .await?
        // One message for both failure causes; the caller learns nothing
        // about which part was wrong.
        .ok_or_else(|| unauthorized(Some("Invalid username or password")))?;

    tracing::info!(username = %user.username, "user authenticated");

    Ok(Json(user.into()))
}
