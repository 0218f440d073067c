use axum::{extract::State, Json};

use crate::error::AppError;
use crate::handlers::AuthUser;
use crate::models::transaction::{
    HistoryRequest, TransactionId, TransferRequest, UpdateTransactionRequest,
};
use crate::response::AppResponse;
use crate::AppState;

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<TransferRequest>,
) -> Result<AppResponse, AppError> {
    let record = state.transactions.create(user.user_id, &payload).await?;

    Ok(AppResponse::success(record))
}

pub async fn get(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<TransactionId>,
) -> Result<AppResponse, AppError> {
    let record = state.transactions.get(payload.id).await?;

    Ok(AppResponse::success(record))
}

pub async fn get_all(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<HistoryRequest>,
) -> Result<AppResponse, AppError> {
    // History is scoped to the verified caller unless the filter names a user.
    let mut filter = payload.filter;
    filter.user_id.get_or_insert(user.user_id);

    let page = state
        .transactions
        .history(payload.page, payload.limit, filter)
        .await?;

    Ok(AppResponse::success(page))
}

pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<UpdateTransactionRequest>,
) -> Result<AppResponse, AppError> {
    let record = state.transactions.update(&payload).await?;

    Ok(AppResponse::success(record))
}

pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<TransactionId>,
) -> Result<AppResponse, AppError> {
    state.transactions.delete(payload.id).await?;

    Ok(AppResponse::success(serde_json::json!({})))
}
