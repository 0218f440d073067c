use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::AppResponse;

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input; nothing is persisted.
    Validation(String),
    /// Bad credentials or an invalid/expired/replayed token. The message is
    /// deliberately generic so callers cannot tell the causes apart.
    Auth(String),
    NotFound(String),
    Conflict(String),
    Sqlx(sqlx::Error),
    PasswordHash(argon2::password_hash::Error),
    Jwt(jsonwebtoken::errors::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(inner: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(inner)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(inner: jsonwebtoken::errors::Error) -> Self {
        AppError::Jwt(inner)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Sqlx(e) => {
                // Check for unique constraint violation
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppResponse::failure(StatusCode::CONFLICT, "Email already exists")
                            .into_response();
                    }
                }
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::PasswordHash(e) => {
                tracing::error!("Password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Token error".to_string())
            }
        };

        AppResponse::failure(code, message).into_response()
    }
}
