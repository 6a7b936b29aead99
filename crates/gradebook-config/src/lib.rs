//! # Gradebook Config
//!
//! Configuration types for the Gradebook API.
//!
//! Every struct is loaded from environment variables exactly once, at startup,
//! and then passed by reference. Nothing below the binaries reads the
//! environment.
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: CORS header values
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listener address and logging output
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! let codec = TokenCodec::new(&config.jwt);
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

use std::env;
use std::str::FromStr;

use thiserror::Error;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::{LogConfig, ServerConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("environment variable {name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// All configuration the API server needs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            cors: CorsConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }
}

pub(crate) fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Parses an optional variable, falling back to `default` when it is unset.
/// A set but unparseable value is an error rather than a silent default.
pub(crate) fn parsed_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
