//! # Gradebook Auth
//!
//! Authentication and authorization core for the Gradebook API.
//!
//! - [`claims`]: the [`Role`] set and the token payload
//! - [`jwt`]: [`TokenCodec`], which issues and parses HS256 tokens
//! - [`gate`]: the per-request check sequence run by every protected route
//! - [`credentials`]: password verification against a pluggable store
//! - [`ownership`]: the course-ownership rule for recording exam results
//!
//! Nothing in this crate touches the database directly. Lookups go through
//! the [`CredentialStore`], [`RoleDirectory`] and [`CourseOwnership`] traits,
//! which the API crate implements on top of its connection pool.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{Role, TokenCodec, authorize};
//!
//! let codec = TokenCodec::new(&config.jwt);
//! let token = codec.issue("ada@example.com", &[Role::Teacher], now)?;
//!
//! let email = authorize(&method, &headers, &[Method::GET], Role::Teacher, &codec, now)?;
//! ```

pub mod claims;
pub mod credentials;
pub mod gate;
pub mod jwt;
pub mod ownership;

// Re-export commonly used types at crate root
pub use claims::{Role, TokenClaims};
pub use credentials::{CredentialStore, RoleDirectory, verify_credentials};
pub use gate::{AccessError, authenticate, authorize};
pub use jwt::{TokenCodec, TokenError};
pub use ownership::{CourseOwnership, OwnershipError, authorize_exam_write};
