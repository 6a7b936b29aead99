//! Exam results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An exam result as its student sees it.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentExam {
    pub course_name: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// An exam result in one of the caller's courses.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeacherExam {
    pub course_name: String,
    pub student_email: String,
    pub student_name: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExamDto {
    #[validate(email)]
    pub student_email: String,
    #[validate(length(min = 1))]
    pub course_name: String,
    #[validate(range(min = 1))]
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_must_be_positive() {
        let dto = CreateExamDto {
            student_email: "s@example.com".to_string(),
            course_name: "Math".to_string(),
            points: 0,
        };
        assert!(dto.validate().is_err());
        assert!(CreateExamDto { points: 56, ..dto }.validate().is_ok());
    }
}
