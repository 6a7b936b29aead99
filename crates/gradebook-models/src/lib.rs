//! # Gradebook Models
//!
//! Database rows and request/response DTOs shared by the API and the CLI.
//!
//! - [`auth`]: login, change password and the generic message body
//! - [`courses`]: course rows and admin course DTOs
//! - [`exams`]: exam rows as seen by students and teachers, exam insert DTO
//! - [`people`]: students and teachers, user listing and archiving
//!
//! Every JSON body uses snake_case field names.

pub mod auth;
pub mod courses;
pub mod exams;
pub mod people;
