pub mod auth;
pub mod courses;
pub mod exams;
pub mod students;
pub mod teachers;
pub mod users;
