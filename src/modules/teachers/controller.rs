use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::MessageResponse;
use gradebook_models::people::{CreatePersonDto, ManagedRole, Person, UpdatePersonDto};

use crate::docs::ErrorResponse;
use crate::middleware::auth::AdminPeopleAccess;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List active teachers
#[utoipa::path(
    get,
    path = "/admin/teachers",
    responses(
        (status = 200, description = "Active teachers", body = Vec<Person>),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, AppError> {
    let teachers = UserService::get_people(&state.db, ManagedRole::Teacher).await?;
    Ok(Json(teachers))
}

/// Create a teacher
#[utoipa::path(
    post,
    path = "/admin/teachers",
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "Teacher created", body = MessageResponse),
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
pub async fn create_teacher(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePersonDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::create_person(&state.db, ManagedRole::Teacher, dto).await?;
    Ok(Json(MessageResponse::success()))
}

/// Update a teacher's name or phone
#[utoipa::path(
    patch,
    path = "/admin/teachers",
    request_body = UpdatePersonDto,
    responses(
        (status = 200, description = "Teacher updated", body = MessageResponse),
        (status = 400, description = "Empty update or malformed body", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_teacher(
    AdminPeopleAccess(_caller): AdminPeopleAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdatePersonDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::update_person(&state.db, ManagedRole::Teacher, dto).await?;
    Ok(Json(MessageResponse::success()))
}
