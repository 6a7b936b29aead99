use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::MessageResponse;
use gradebook_models::people::{ArchiveUserParams, Person, UserFilterParams};

use super::service::UserService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::AdminUsersAccess;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// List active students or teachers
#[utoipa::path(
    get,
    path = "/admin/users",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Active people holding the role", body = Vec<Person>),
        (status = 400, description = "Missing or unknown role", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_users(
    AdminUsersAccess(_caller): AdminUsersAccess,
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<UserFilterParams>,
) -> Result<Json<Vec<Person>>, AppError> {
    let people = UserService::get_people(&state.db, params.role).await?;
    Ok(Json(people))
}

/// Archive a student or teacher
#[utoipa::path(
    delete,
    path = "/admin/users",
    params(ArchiveUserParams),
    responses(
        (status = 200, description = "Person archived", body = MessageResponse),
        (status = 400, description = "Missing or unknown role", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No active person with that role", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn archive_user(
    AdminUsersAccess(_caller): AdminUsersAccess,
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ArchiveUserParams>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::archive_person(&state.db, params.role, &params.email).await?;
    Ok(Json(MessageResponse::success()))
}
