use std::env;

/// Runtime configuration, collected once at startup from the environment
/// (`.env` is loaded by `main` before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCESS_TTL_SECS: i64 = 15 * 60;
const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

impl Config {
    /// Panics when a required variable is missing; startup is the one place
    /// where failing loudly beats propagating.
    pub fn from_env() -> Self {
        Self {
            port: env_or("APP_PORT", DEFAULT_PORT),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            token_secret: env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set"),
            refresh_token_secret: env::var("REFRESH_TOKEN_SECRET")
                .expect("REFRESH_TOKEN_SECRET must be set"),
            access_token_ttl_secs: env_or("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TTL_SECS),
            refresh_token_ttl_secs: env_or("REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TTL_SECS),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
