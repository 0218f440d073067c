use axum::{routing::post, Router};

use crate::{handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/refresh", post(handlers::auth::refresh))
        .route("/api/transactions/create", post(handlers::transactions::create))
        .route("/api/transactions/get", post(handlers::transactions::get))
        .route("/api/transactions/getAll", post(handlers::transactions::get_all))
        .route("/api/transactions/update", post(handlers::transactions::update))
        .route("/api/transactions/delete", post(handlers::transactions::delete))
        .with_state(state)
}
