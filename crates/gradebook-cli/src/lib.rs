//! # Gradebook CLI
//!
//! Administrative tasks that run outside the API: bootstrapping the first
//! admin account and loading a small sample data set for development.
//!
//! ## Usage
//!
//! ```ignore
//! use gradebook_cli::{admin::create_admin, seeder::seed_sample_data};
//!
//! create_admin(&pool, &NewAdmin { name, email, phone: None, password }).await?;
//! let summary = seed_sample_data(&pool, "password123").await?;
//! ```

pub mod admin;
pub mod seeder;
