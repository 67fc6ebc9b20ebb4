use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADMIN_USER_ID: i32 = 1;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,

    /// Lifetime of issued tokens in seconds. `None` issues tokens without expiry.
    pub jwt_access_ttl_secs: Option<i64>,
    /// Only a token whose subject matches this id may suspend users.
    pub admin_user_id: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DB_CONNECTION_STRING")?,
            jwt_secret: required("JWT_SECRET_KEY")?,
            port: optional("PORT")?.unwrap_or(DEFAULT_PORT),
            jwt_access_ttl_secs: optional("JWT_ACCESS_TTL_SECS")?,
            admin_user_id: optional("ADMIN_USER_ID")?.unwrap_or(DEFAULT_ADMIN_USER_ID),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
