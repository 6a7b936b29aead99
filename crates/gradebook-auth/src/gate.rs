//! The per-request check sequence.
//!
//! [`authorize`] runs four checks in a fixed order and stops at the first
//! failure:
//!
//! 1. the request method is one the route accepts
//! 2. the `Authorization` header holds a token the codec accepts
//! 3. the token grants the required role
//! 4. the token subject is a well-formed email
//!
//! The header value is the raw token. A `Bearer ` prefix is not stripped and
//! makes the token unparseable.
//!
//! Both functions are pure. Logging the failed check is left to the caller.

use axum::http::{HeaderMap, Method, header::AUTHORIZATION};
use thiserror::Error;
use validator::ValidateEmail;

use gradebook_core::Rejection;

use crate::claims::{Role, TokenClaims};
use crate::jwt::{TokenCodec, TokenError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("method {0} is not allowed on this route")]
    ForbiddenMethod(Method),
    #[error("authorization header is missing")]
    MissingToken,
    #[error("token rejected: {0}")]
    InvalidToken(#[from] TokenError),
    #[error("token does not grant role {0}")]
    MissingRole(Role),
    #[error("token subject is not a valid email")]
    InvalidIdentity,
}

impl AccessError {
    pub fn rejection(&self) -> Rejection {
        match self {
            AccessError::ForbiddenMethod(_) => Rejection::ForbiddenMethod,
            AccessError::MissingToken => Rejection::MissingToken,
            AccessError::InvalidToken(_) => Rejection::InvalidToken,
            AccessError::MissingRole(_) => Rejection::MissingRole,
            AccessError::InvalidIdentity => Rejection::InvalidIdentity,
        }
    }
}

/// Runs the full check sequence and returns the caller's email.
pub fn authorize(
    method: &Method,
    headers: &HeaderMap,
    allowed: &[Method],
    role: Role,
    codec: &TokenCodec,
    now: i64,
) -> Result<String, AccessError> {
    check_method(method, allowed)?;
    let claims = read_token(headers, codec, now)?;

    if !claims.has_role(role) {
        return Err(AccessError::MissingRole(role));
    }

    identity_of(claims)
}

/// Same as [`authorize`] without the role check, for routes open to anyone
/// holding a valid token.
pub fn authenticate(
    method: &Method,
    headers: &HeaderMap,
    allowed: &[Method],
    codec: &TokenCodec,
    now: i64,
) -> Result<String, AccessError> {
    check_method(method, allowed)?;
    let claims = read_token(headers, codec, now)?;
    identity_of(claims)
}

fn check_method(method: &Method, allowed: &[Method]) -> Result<(), AccessError> {
    if allowed.contains(method) {
        Ok(())
    } else {
        Err(AccessError::ForbiddenMethod(method.clone()))
    }
}

fn read_token(
    headers: &HeaderMap,
    codec: &TokenCodec,
    now: i64,
) -> Result<TokenClaims, AccessError> {
    let value = headers.get(AUTHORIZATION).ok_or(AccessError::MissingToken)?;
    let token = value.to_str().map_err(|_| TokenError::Malformed)?;
    Ok(codec.parse(token, now)?)
}

fn identity_of(claims: TokenClaims) -> Result<String, AccessError> {
    if claims.email.is_empty() || !claims.email.validate_email() {
        return Err(AccessError::InvalidIdentity);
    }
    Ok(claims.email)
}
