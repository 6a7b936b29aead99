//! Request extractors and middleware.
//!
//! - [`auth`]: per-route policy extractors built on the access gate
//! - [`cors`]: the `OPTIONS` responder that answers every preflight
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::TeacherExamsAccess;
//!
//! // Runs only for a Teacher token on GET or POST
//! async fn record_exam(TeacherExamsAccess(caller): TeacherExamsAccess) -> impl IntoResponse {
//!     // caller.email is a verified email address
//! }
//! ```

pub mod auth;
pub mod cors;
