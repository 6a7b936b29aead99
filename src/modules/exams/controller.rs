use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::auth::MessageResponse;
use gradebook_models::exams::{CreateExamDto, StudentExam, TeacherExam};

use super::service::ExamService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::{StudentExamsAccess, TeacherExamsAccess};
use crate::state::AppState;
use crate::store::PgStore;
use crate::validator::ValidatedJson;

/// The caller's own exam results
#[utoipa::path(
    get,
    path = "/student/exams",
    responses(
        (status = 200, description = "Exam results of the caller", body = Vec<StudentExam>),
        (status = 400, description = "Method not allowed", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Student"
)]
#[instrument(skip(state))]
pub async fn get_student_exams(
    StudentExamsAccess(caller): StudentExamsAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentExam>>, AppError> {
    let exams = ExamService::get_student_exams(&state.db, &caller.email).await?;
    Ok(Json(exams))
}

/// Exam results in the caller's courses
#[utoipa::path(
    get,
    path = "/teacher/exams",
    responses(
        (status = 200, description = "Exam results in courses led by the caller", body = Vec<TeacherExam>),
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
pub async fn get_teacher_exams(
    TeacherExamsAccess(caller): TeacherExamsAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherExam>>, AppError> {
    let exams = ExamService::get_teacher_exams(&state.db, &caller.email).await?;
    Ok(Json(exams))
}

/// Record an exam result in one of the caller's courses
#[utoipa::path(
    post,
    path = "/teacher/exams",
    request_body = CreateExamDto,
    responses(
        (status = 200, description = "Exam recorded", body = MessageResponse),
        (status = 400, description = "Course not led by the caller, unknown student or malformed body", body = ErrorResponse),
        (status = 403, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("token" = [])
    ),
    tag = "Teacher"
)]
#[instrument(skip(state))]
pub async fn create_exam(
    TeacherExamsAccess(caller): TeacherExamsAccess,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateExamDto>,
) -> Result<Json<MessageResponse>, AppError> {
    ExamService::record_exam(&PgStore(&state.db), &caller.email, &dto).await?;
    Ok(Json(MessageResponse::success()))
}
