//! Runtime configuration for the theater server.
//!
//! Everything is read once at startup and handed to the services that need
//! it; nothing here is global.

use std::{env, fmt, str::FromStr};

use thiserror::Error;

use crate::auth::AdminCredentials;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} is not a valid number: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct JwtSettings {
    /// HS256 signing key.
    pub sign_key: String,
    /// Token lifetime (seconds).
    pub token_ttl: i64,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("sign_key", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub jwt: JwtSettings,
    /// Salt mixed into every password digest.
    pub hash_salt: String,
    pub admin: AdminCredentials,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|var| env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let database_url = required("DATABASE_URL")?;
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".into());
        let db_max_connections = parsed(&lookup, "DB_MAX_CONNECTIONS", 5)?;

        let jwt = JwtSettings {
            sign_key: required("JWT_SIGN_KEY")?,
            token_ttl: parsed(&lookup, "TOKEN_TTL_SECS", 12 * 3_600)?, // 12h default
        };

        let admin = AdminCredentials {
            username: required("ADMIN_USERNAME")?,
            password_hash: required("ADMIN_PASSWORD")?,
        };

        Ok(Settings {
            database_url,
            server_addr,
            db_max_connections,
            jwt,
            hash_salt: lookup("HASH_SALT").unwrap_or_default(),
            admin,
        })
    }
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
