//! HS256 token issuing and parsing.
//!
//! A [`TokenCodec`] is built once from [`JwtConfig`] at startup and shared
//! through application state. Parsing is a pure function of the token text,
//! the secret and the `now` passed in; the codec never reads the clock.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{Role, TokenCodec};
//!
//! let codec = TokenCodec::new(&config.jwt);
//! let token = codec.issue("ada@example.com", &[Role::Student], now)?;
//! let claims = codec.parse(&token, now)?;
//! assert_eq!(claims.email, "ada@example.com");
//! ```

use std::fmt;

use anyhow::anyhow;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use gradebook_config::JwtConfig;
use gradebook_core::AppError;

use crate::claims::{Role, TokenClaims};

/// Why a token failed to parse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token is not signed with HS256")]
    WrongAlgorithm,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => TokenError::WrongAlgorithm,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: i64,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the caller's `now` in `parse`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.token_ttl,
        }
    }

    /// Lifetime of issued tokens, in seconds.
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Signs a token for `email` holding `roles`, valid until `now + ttl`.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if `now + ttl` overflows or signing fails.
    pub fn issue(&self, email: &str, roles: &[Role], now: i64) -> Result<String, AppError> {
        let exp = now.checked_add(self.ttl).ok_or_else(|| {
            AppError::internal(anyhow!("token expiry overflows: ttl {}", self.ttl))
        })?;

        let claims = TokenClaims {
            roles: roles.to_vec(),
            email: email.to_string(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AppError::internal)
    }

    /// Verifies algorithm, signature and expiry, in that order.
    ///
    /// A token is valid strictly before its `exp` instant.
    pub fn parse(&self, token: &str, now: i64) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation)?;

        if now >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
