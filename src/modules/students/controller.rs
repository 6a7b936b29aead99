use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::MessageResponse;
use gradebook_models::people::{CreatePersonDto, ManagedRole, Person, UpdatePersonDto};

use crate::docs::ErrorResponse;
use crate::middleware::auth::{AdminPeopleAccess, TeacherReadAccess};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Emails of all active students
#[utoipa::path(
    get,
    path = "/teacher/students",
    responses(
        (status = 200, description = "Student emails", body = Vec<String>),
        (status = 400, description = "Method not allowed", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Teacher"
)]
#[instrument(skip(state))]
pub async fn get_student_emails(
    TeacherReadAccess(_caller): TeacherReadAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let emails = UserService::get_emails(&state.db, ManagedRole::Student).await?;
    Ok(Json(emails))
}

/// List active students
#[utoipa::path(
    get,
    path = "/admin/students",
    responses(
        (status = 200, description = "Active students", body = Vec<Person>),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_students(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, AppError> {
    let students = UserService::get_people(&state.db, ManagedRole::Student).await?;
    Ok(Json(students))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/admin/students",
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "Student created", body = MessageResponse),
        (status = 400, description = "Email already in use or malformed body", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePersonDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::create_person(&state.db, ManagedRole::Student, dto).await?;
    Ok(Json(MessageResponse::success()))
}

/// Update a student's name or phone
#[utoipa::path(
    patch,
    path = "/admin/students",
    request_body = UpdatePersonDto,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Empty update or malformed body", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_student(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdatePersonDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::update_person(&state.db, ManagedRole::Student, dto).await?;
    Ok(Json(MessageResponse::success()))
}
