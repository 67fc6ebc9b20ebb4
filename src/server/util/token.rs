//! Bearer token issuance and validation.
//!
//! Tokens are HS256 JWTs. The subject is the user id as a string and every token
//! carries a unique `jti` so it can be revoked individually through the denylist.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::{auth::AuthError, AppError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Parses the subject claim back into a user id.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("subject '{}' is not a user id", self.sub)))
    }
}

pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Option<Duration>,
}

impl TokenKeys {
    /// Builds signing keys from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HS256 secret
    /// - `ttl_secs` - Token lifetime; `None` issues tokens without an `exp` claim
    pub fn new(secret: &str, ttl_secs: Option<i64>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: ttl_secs.map(Duration::seconds),
        }
    }

    /// Issues a signed token for the given user.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: self.ttl.map(|ttl| (now + ttl).timestamp()),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Validates the signature and claims of a token.
    ///
    /// `exp` is checked only when present.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::from(["sub".to_string()]);
        validation.validate_exp = true;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
