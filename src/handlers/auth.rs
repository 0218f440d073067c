use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::user::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::response::AppResponse;
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<AppResponse, AppError> {
    let user = state
        .sessions
        .register(&payload.email, &payload.password)
        .await?;

    Ok(AppResponse::created(user))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<AppResponse, AppError> {
    let pair = state
        .sessions
        .login(&payload.email, &payload.password)
        .await?;

    Ok(AppResponse::success(pair))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<AppResponse, AppError> {
    let pair = state
        .sessions
        .refresh(payload.user_id, &payload.refresh_token)
        .await?;

    Ok(AppResponse::success(pair))
}
