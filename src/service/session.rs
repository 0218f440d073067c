use std::sync::Arc;

use crate::auth::{password, token::TokenIssuer};
use crate::error::AppError;
use crate::models::user::{TokenPair, User};
use crate::repository::{sessions::SessionRepository, users::UserRepository};
use crate::validation::Validator;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Orchestrates registration, login and refresh-token rotation.
#[derive(Clone)]
pub struct SessionManager {
    users: UserRepository,
    sessions: SessionRepository,
    tokens: TokenIssuer,
    validator: Arc<dyn Validator>,
}

impl SessionManager {
    pub fn new(
        users: UserRepository,
        sessions: SessionRepository,
        tokens: TokenIssuer,
        validator: Arc<dyn Validator>,
    ) -> Self {
        Self {
            users,
            sessions,
            tokens,
            validator,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        if !self.validator.is_valid_email(email) {
            return Err(AppError::Validation("Invalid email address".into()));
        }
        if !self.validator.meets_min_length(password, MIN_PASSWORD_LENGTH) {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".into(),
            ));
        }
        if self.validator.has_whitespace(password) {
            return Err(AppError::Validation(
                "Password must not contain spaces".into(),
            ));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".into()));
        }

        let password_hash = password::hash(password)?;
        self.users.insert(email, &password_hash).await
    }

    /// Unknown email and wrong password fail identically so the endpoint
    /// cannot be used for account enumeration.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid credentials".into()))?;

        if !password::verify(password, &user.password_hash) {
            return Err(AppError::Auth("Invalid credentials".into()));
        }

        let token = self.tokens.issue_access(user.id)?;
        let refresh_token = self.tokens.issue_refresh(user.id)?;
        self.sessions.insert(user.id, &refresh_token).await?;

        tracing::debug!(user_id = user.id, "session created");
        Ok(TokenPair {
            token,
            refresh_token,
        })
    }

    /// Rotates the refresh token. The conditional update in the repository is
    /// the only revocation primitive: once a rotation commits, the previous
    /// token no longer matches any row and replaying it fails here.
    pub async fn refresh(&self, user_id: i64, presented: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.verify_refresh(presented)?;
        if claims.sub != user_id {
            return Err(AppError::Auth("Invalid refresh token".into()));
        }

        let token = self.tokens.issue_access(user_id)?;
        let refresh_token = self.tokens.issue_refresh(user_id)?;

        let rotated = self
            .sessions
            .rotate_refresh_token(user_id, presented, &refresh_token)
            .await?;
        if !rotated {
            return Err(AppError::Auth("Invalid refresh token".into()));
        }

        tracing::debug!(user_id, "refresh token rotated");
        Ok(TokenPair {
            token,
            refresh_token,
        })
    }
}
