use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::MessageResponse;
use gradebook_models::courses::{Course, CourseIdParams, CreateCourseDto, UpdateCourseDto};

use super::service::CourseService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::{AdminCoursesAccess, TeacherReadAccess};
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Names of the courses the caller leads
#[utoipa::path(
    get,
    path = "/teacher/courses",
    responses(
        (status = 200, description = "Course names", body = Vec<String>),
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
pub async fn get_teacher_courses(
    TeacherReadAccess(caller): TeacherReadAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = CourseService::get_teacher_course_names(&state.db, &caller.email).await?;
    Ok(Json(names))
}

/// List all live courses
#[utoipa::path(
    get,
    path = "/admin/courses",
    responses(
        (status = 200, description = "Courses with their teachers", body = Vec<Course>),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    AdminCoursesAccess(_caller): AdminCoursesAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::get_all_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Create a course led by an existing teacher
#[utoipa::path(
    post,
    path = "/admin/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created", body = MessageResponse),
        (status = 400, description = "Unknown teacher, duplicate name or malformed body", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn create_course(
    AdminCoursesAccess(_caller): AdminCoursesAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::create_course(&state.db, dto).await?;
    Ok(Json(MessageResponse::success()))
}

/// Change a course's teacher, name or seats
#[utoipa::path(
    patch,
    path = "/admin/courses",
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = MessageResponse),
        (status = 400, description = "Unknown teacher, duplicate name or empty update", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_course(
    AdminCoursesAccess(_caller): AdminCoursesAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::update_course(&state.db, dto).await?;
    Ok(Json(MessageResponse::success()))
}

/// Soft-delete a course
#[utoipa::path(
    delete,
    path = "/admin/courses",
    params(CourseIdParams),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 400, description = "Missing or malformed id", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    AdminCoursesAccess(_caller): AdminCoursesAccess,
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseIdParams>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete_course(&state.db, params.id).await?;
    Ok(Json(MessageResponse::success()))
}
