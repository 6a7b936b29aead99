use axum::{Router, routing::get};

use super::controller::{create_exam, get_student_exams, get_teacher_exams};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_exams_router() -> Router<AppState> {
    Router::new()
        .route(
            "/student/exams",
            get(get_student_exams).fallback(method_not_allowed),
        )
        .route(
            "/teacher/exams",
            get(get_teacher_exams)
                .post(create_exam)
                .fallback(method_not_allowed),
        )
}
