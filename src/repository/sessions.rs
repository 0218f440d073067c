use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::session::Session;

#[derive(Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user_id: i64, refresh_token: &str) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, refresh_token, created_at) VALUES (?, ?, ?) \
             RETURNING id, user_id, refresh_token, created_at",
        )
        .bind(user_id)
        .bind(refresh_token)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Conditional swap of the stored refresh token. The WHERE clause pins the
    /// presented value, so of two concurrent rotations using the same stale
    /// token only one can affect a row; the loser sees `false`.
    pub async fn rotate_refresh_token(
        &self,
        user_id: i64,
        presented: &str,
        replacement: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE sessions SET refresh_token = ? WHERE user_id = ? AND refresh_token = ?",
        )
        .bind(replacement)
        .bind(user_id)
        .bind(presented)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
