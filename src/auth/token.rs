use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

/// Access and refresh tokens share this shape and differ only in signing
/// secret and lifetime. `jti` keeps two tokens minted for the same subject
/// in the same second distinct, which rotation relies on.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub jti: String,
}

/// Stateless issuer/verifier; a pure function of secret, claims and clock.
#[derive(Clone)]
pub struct TokenIssuer {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(config.token_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.token_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl: Duration::seconds(config.access_token_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs),
        }
    }

    pub fn issue_access(&self, user_id: i64) -> Result<String, AppError> {
        issue(user_id, &self.access_encoding, self.access_ttl)
    }

    pub fn issue_refresh(&self, user_id: i64) -> Result<String, AppError> {
        issue(user_id, &self.refresh_encoding, self.refresh_ttl)
    }

    pub fn verify_access(&self, token: &str) -> Result<Claims, AppError> {
        verify(token, &self.access_decoding).map_err(|_| AppError::Auth("Invalid token".into()))
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Claims, AppError> {
        verify(token, &self.refresh_decoding)
            .map_err(|_| AppError::Auth("Invalid refresh token".into()))
    }
}

fn issue(user_id: i64, key: &EncodingKey, ttl: Duration) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + ttl).timestamp() as usize,
        jti: nonce(),
    };
    Ok(encode(&Header::default(), &claims, key)?)
}

/// Fails closed: signature mismatch, expiry and malformed input all collapse
/// into one error, and no unverified payload is ever returned.
fn verify(token: &str, key: &DecodingKey) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, key, &Validation::default()).map(|data| data.claims)
}

fn nonce() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    format!("{:032x}", u128::from_le_bytes(bytes))
}
