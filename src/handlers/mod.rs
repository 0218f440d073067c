pub mod auth;
pub mod transactions;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::AppState;

/// Verified bearer identity. Extraction rejects the request before any
/// handler body runs: a missing or empty token is a 401, a present token is
/// verified and its subject id handed to the handler.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .unwrap_or("");

        if token.is_empty() {
            return Err(AppError::Auth("Unauthorized.".into()));
        }

        let claims = state.tokens.verify_access(token)?;
        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
