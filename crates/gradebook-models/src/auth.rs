use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login body. Carries no field rules: a malformed or empty email is an
/// unknown identity and fails like a wrong password.
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Body of every successful request that returns no data.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_has_no_field_rules() {
        let dto = LoginRequest {
            email: String::new(),
            password: String::new(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_short_new_password_is_rejected() {
        let dto = ChangePasswordDto {
            old_password: "old-password".to_string(),
            new_password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_success_message() {
        let value = serde_json::to_value(MessageResponse::success()).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "success" }));
    }
}
