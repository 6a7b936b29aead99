use std::env;
use std::net::SocketAddr;

use crate::{ConfigError, parsed_or};

pub const DEFAULT_LOG_DIR: &str = "storage/logs";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log: LogConfig,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Directory for the rolling log files; `None` (an empty `LOG_DIR`) disables file output.
    pub directory: Option<String>,
    /// Emit console logs as JSON lines instead of the compact format.
    pub json: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_addr = SocketAddr::from(([0, 0, 0, 0], 8000));

        Ok(Self {
            addr: parsed_or("SERVER_ADDR", default_addr)?,
            log: LogConfig {
                directory: match env::var("LOG_DIR") {
                    Ok(dir) if dir.trim().is_empty() => None,
                    Ok(dir) => Some(dir),
                    Err(_) => Some(DEFAULT_LOG_DIR.to_string()),
                },
                json: env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        })
    }
}
