pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod response;
pub mod rest;
pub mod service;
pub mod validation;

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::token::TokenIssuer;
use crate::config::Config;
use crate::repository::{
    sessions::SessionRepository, transactions::TransactionRepository, users::UserRepository,
};
use crate::service::{session::SessionManager, transactions::TransactionProcessor};
use crate::validation::{RequestValidator, Validator};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: TokenIssuer,
    pub sessions: SessionManager,
    pub transactions: TransactionProcessor,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        let tokens = TokenIssuer::new(config);
        let validator: Arc<dyn Validator> = Arc::new(RequestValidator);

        let sessions = SessionManager::new(
            UserRepository::new(db.clone()),
            SessionRepository::new(db.clone()),
            tokens.clone(),
            Arc::clone(&validator),
        );
        let transactions =
            TransactionProcessor::new(TransactionRepository::new(db.clone()), validator);

        Self {
            db,
            tokens,
            sessions,
            transactions,
        }
    }
}
