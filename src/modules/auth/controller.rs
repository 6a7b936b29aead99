use axum::Json;
use axum::extract::State;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::{ChangePasswordDto, LoginRequest, LoginResponse, MessageResponse};

use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::{PasswordChangeAccess, now};
use crate::state::AppState;
use crate::store::PgStore;
use crate::validator::ValidatedJson;

/// Login and receive a token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body or method not allowed", body = ErrorResponse),
        (status = 403, description = "Incorrect email or password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&PgStore(&state.db), &state.tokens, dto, now()).await?;
    Ok(Json(response))
}

/// Change the caller's own password
#[utoipa::path(
    post,
    path = "/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Malformed body or method not allowed", body = ErrorResponse),
        (status = 403, description = "Unauthorized or old password incorrect", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn change_password(
    PasswordChangeAccess(caller): PasswordChangeAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::change_password(&state.db, &caller.email, dto).await?;
    Ok(Json(MessageResponse::success()))
}
