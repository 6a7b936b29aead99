//! Course rows and admin course DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A live (non-deleted) course with its teacher.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub number_of_seats: i32,
    pub teacher_email: String,
    pub teacher_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(email)]
    pub teacher_email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Defaults to 50 when omitted
    #[validate(range(min = 1))]
    pub number_of_seats: Option<i32>,
}

/// Only the provided fields change.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    pub id: Uuid,
    #[validate(email)]
    pub teacher_email: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub number_of_seats: Option<i32>,
}

impl UpdateCourseDto {
    pub fn is_empty(&self) -> bool {
        self.teacher_email.is_none() && self.name.is_none() && self.number_of_seats.is_none()
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseIdParams {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_must_be_positive() {
        let dto = CreateCourseDto {
            teacher_email: "t@example.com".to_string(),
            name: "Math".to_string(),
            number_of_seats: Some(0),
        };
        assert!(dto.validate().is_err());

        let dto = CreateCourseDto {
            number_of_seats: None,
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_without_fields_is_empty() {
        let dto: UpdateCourseDto =
            serde_json::from_value(serde_json::json!({ "id": Uuid::nil() })).unwrap();
        assert!(dto.is_empty());
    }
}
