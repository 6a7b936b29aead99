//! # Gradebook Core
//!
//! Core types, errors, and utilities for the Gradebook API.
//!
//! - [`errors`]: [`AppError`] with HTTP response conversion, and the closed
//!   [`Rejection`] taxonomy for policy failures
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, Rejection};
//!
//! // A policy failure renders with its fixed status and public message
//! let error = AppError::rejected(Rejection::MissingRole);
//!
//! // Anything else convertible into `anyhow::Error` becomes a 500
//! let error = AppError::internal(anyhow::anyhow!("pool closed"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, Rejection};
pub use password::{hash_password, verify_password};
