//! # Error Handling
//!
//! Domain error taxonomy for the stockroom service, plus the problem+json
//! error body the HTTP surface responds with.
//!
//! "Not found" is deliberately not part of the domain taxonomy: update and
//! delete operations report a miss through their return value (`None` /
//! `false`) so callers can tell "nothing to do" apart from a real failure.

use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Domain-level failure surfaced by the gateways and services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Uniqueness or referential-integrity failure reported by the store
    /// (duplicate SKU/username, dangling supplier reference, deleting a row
    /// something still points at). Propagated unchanged; no local retry.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other persistence failure.
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Classifies a store error, turning constraint failures into
    /// [`ServiceError::ConstraintViolation`].
    pub fn from_db(err: DbErr) -> Self {
        if is_constraint_violation(&err) {
            ServiceError::ConstraintViolation(err.to_string())
        } else {
            ServiceError::Database(err)
        }
    }
}

// Backend error codes that signal a unique or foreign-key constraint
// failure, for drivers whose error type predates the is_*_violation
// helpers. Postgres: unique 23505, FK 23503. SQLite: FK 787, unique
// (primary/other) 1555/2067. MySQL: 1022/1062/1169/1586 duplicates,
// 1451/1452 FK.
const CONSTRAINT_CODES: &[&str] = &[
    "23505", "23503", "787", "1555", "2067", "1022", "1062", "1169", "1451", "1452", "1586",
];

fn is_constraint_violation(error: &DbErr) -> bool {
    use sea_orm::RuntimeErr;

    let sqlx_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => e,
        _ => return false,
    };

    match sqlx_err.as_database_error() {
        Some(db_error) => {
            db_error.is_unique_violation()
                || db_error.is_foreign_key_violation()
                || db_error
                    .code()
                    .is_some_and(|code| CONSTRAINT_CODES.contains(&code.as_ref()))
        }
        None => false,
    }
}

/// problem+json error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status for the response; not part of the body.
    #[serde(skip)]
    #[schema(ignore)]
    pub status: StatusCode,
    /// Stable machine-readable code, SCREAMING_SNAKE_CASE.
    pub code: String,
    /// Human-readable summary.
    pub message: String,
    /// Structured detail payload, when the failure has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Correlation id echoed into logs on both ends.
    pub trace_id: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            details: None,
            trace_id: fresh_trace_id(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Short random correlation id; enough to match a client report to a log
/// line, not a distributed trace.
fn fresh_trace_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("corr-{}", &id[..8])
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/problem+json"),
        );

        (self.status, headers, axum::Json(self)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ConstraintViolation(detail) => {
                tracing::debug!(%detail, "store rejected the write");
                ApiError::new(StatusCode::CONFLICT, "CONFLICT", "Resource conflict")
                    .with_details(serde_json::json!({ "constraint": detail }))
            }
            ServiceError::Database(db_err) => db_err.into(),
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(error: DbErr) -> Self {
        match error {
            DbErr::RecordNotFound(what) => ApiError::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Record not found: {what}"),
            ),
            DbErr::Conn(conn_err) => {
                tracing::error!(error = %conn_err, "lost the database connection");
                ApiError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "Database service unavailable",
                )
            }
            other => {
                tracing::error!(error = %other, "unclassified database error");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Database error occurred",
                )
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        tracing::error!(error = %error, "internal error");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "An internal error occurred",
        )
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonDataError(e) => format!("Invalid JSON: {e}"),
            JsonRejection::JsonSyntaxError(e) => format!("JSON syntax error: {e}"),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
    }
}

/// 401 with a caller-facing message that names neither cause.
pub fn unauthorized(message: Option<&str>) -> ApiError {
    ApiError::new(
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED",
        message.unwrap_or("Authentication required"),
    )
}

/// 404 with a resource-specific code.
pub fn not_found(code: &str, message: &str) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, code, message)
}

/// 400 carrying per-field validation failures in `details`.
pub fn validation_error(message: &str, field_errors: serde_json::Value) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message).with_details(field_errors)
}
