use serde::Serialize;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use gradebook_auth::Role;
use gradebook_models::auth::{ChangePasswordDto, LoginRequest, LoginResponse, MessageResponse};
use gradebook_models::courses::{Course, CreateCourseDto, UpdateCourseDto};
use gradebook_models::exams::{CreateExamDto, StudentExam, TeacherExam};
use gradebook_models::people::{CreatePersonDto, ManagedRole, Person, UpdatePersonDto};

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::change_password,
        crate::modules::exams::controller::get_student_exams,
        crate::modules::exams::controller::get_teacher_exams,
        crate::modules::exams::controller::create_exam,
        crate::modules::courses::controller::get_teacher_courses,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::students::controller::get_student_emails,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::archive_user,
    ),
    components(
        schemas(
            Role,
            LoginRequest,
            LoginResponse,
            ChangePasswordDto,
            MessageResponse,
            ErrorResponse,
            StudentExam,
            TeacherExam,
            CreateExamDto,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            Person,
            CreatePersonDto,
            UpdatePersonDto,
            ManagedRole,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and password change"),
        (name = "Student", description = "Routes for the Student role"),
        (name = "Teacher", description = "Routes for the Teacher role"),
        (name = "Admin", description = "Routes for the Admin role")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Academic records API: courses, people and exam results behind role-based access.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            // The token is sent as the raw header value, without a scheme prefix.
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            )
        }
    }
}
