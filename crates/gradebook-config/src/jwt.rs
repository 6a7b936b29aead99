use crate::{ConfigError, parsed_or, required};

/// 43830 minutes, roughly one month.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 43_830 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of every issued token, in seconds.
    pub token_ttl: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_ttl = parsed_or("JWT_TOKEN_TTL", DEFAULT_TOKEN_TTL_SECONDS)?;
        if token_ttl <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_TOKEN_TTL",
                value: token_ttl.to_string(),
            });
        }

        Ok(Self {
            secret: required("JWT_SECRET")?,
            token_ttl,
        })
    }
}
