use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid.
pub const TOKEN_LIFETIME_HOURS: i64 = 2;

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Account id.
    pub sub: i32,
    pub username: String,
    /// Issued at, seconds since epoch.
    pub iat: i64,
    /// Expiration, seconds since epoch.
    pub exp: i64,
}

impl Claims {
    pub fn new(account_id: i32, username: &str, issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + Duration::hours(TOKEN_LIFETIME_HOURS);
        Self {
            sub: account_id,
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Signing and verification keys derived from the configured secret.
///
/// Built once at startup and shared with handlers and [`AuthMiddleware`](super::AuthMiddleware)
/// through `web::Data`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for the account, expiring [`TOKEN_LIFETIME_HOURS`] from now.
    pub fn issue(&self, account_id: i32, username: &str) -> Result<String, AppError> {
        self.encode(&Claims::new(account_id, username, Utc::now()))
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| AppError::internal("Failed to generate token", e))
    }

    /// Checks signature and expiry and returns the decoded claims.
    ///
    /// Any failure (malformed token, wrong signature, expired) is `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
