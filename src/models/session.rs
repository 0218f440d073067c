use serde::Serialize;

/// One row per login. The stored refresh token is the only value trusted for
/// rotation; overwriting it is the system's revocation primitive.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip)]
    pub refresh_token: String,
    pub created_at: chrono::NaiveDateTime,
}
