//! Students and teachers as managed by admins.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// An active student or teacher.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePersonDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    /// Initial password, hashed before storage
    #[validate(length(min = 8))]
    pub password: String,
}

/// Identifies the person by `email`; only the provided fields change.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

/// Roles an admin can list and archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ManagedRole {
    Student,
    Teacher,
}

impl ManagedRole {
    /// Table holding the role membership rows.
    pub fn table(self) -> &'static str {
        match self {
            ManagedRole::Student => "student",
            ManagedRole::Teacher => "teacher",
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterParams {
    pub role: ManagedRole,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArchiveUserParams {
    #[validate(email)]
    pub email: String,
    pub role: ManagedRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managed_role_names() {
        let role: ManagedRole = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, ManagedRole::Teacher);
        assert_eq!(role.table(), "teacher");
        assert!(serde_json::from_str::<ManagedRole>("\"admin\"").is_err());
        assert!(serde_json::from_str::<ManagedRole>("\"Teacher\"").is_err());
    }

    #[test]
    fn test_create_person_validation() {
        let dto = CreatePersonDto {
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            phone: Some("0881234563".to_string()),
            password: "long-enough".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto = CreatePersonDto {
            email: "ivan".to_string(),
            ..dto
        };
        assert!(dto.validate().is_err());
    }
}
