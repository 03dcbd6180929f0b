//! Admin login and HS256 bearer tokens.
//!
//! A token carries nothing but its expiry: holding a valid one is what makes
//! the caller the admin.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AdminCredentials, PasswordHasher};
use crate::config::JwtSettings;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Same error whichever of username / password was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

pub struct AuthService {
    hasher: Arc<dyn PasswordHasher>,
    admin: AdminCredentials,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl AuthService {
    pub fn new(hasher: Arc<dyn PasswordHasher>, admin: AdminCredentials, jwt: &JwtSettings) -> Self {
        Self {
            hasher,
            admin,
            encoding: EncodingKey::from_secret(jwt.sign_key.as_bytes()),
            decoding: DecodingKey::from_secret(jwt.sign_key.as_bytes()),
            ttl: Duration::seconds(jwt.token_ttl),
        }
    }

    /// Check the admin credentials and mint a token on success.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let digest = self.hasher.hash(password);
        // evaluate both so a bad username costs the same as a bad password
        let user_ok = username == self.admin.username;
        let pass_ok = digest == self.admin.password_hash;
        if !(user_ok & pass_ok) {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue_token()
    }

    pub fn issue_token(&self) -> Result<String, AuthError> {
        self.issue_token_at(Utc::now())
    }

    pub fn issue_token_at(&self, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(AuthError::Signing)
    }

    pub fn validate_token(&self, token: &str) -> Result<(), AuthError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Verify signature and algorithm, then reject anything expiring at or
    /// before `now`.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidAlgorithm => AuthError::Unauthorized("unexpected signing method"),
                ErrorKind::InvalidSignature => AuthError::Unauthorized("invalid token signature"),
                _ => AuthError::Unauthorized("invalid token"),
            }
        })?;

        if data.claims.exp <= now.timestamp() {
            return Err(AuthError::Unauthorized("token is expired"));
        }
        Ok(())
    }
}
