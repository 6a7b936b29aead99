use axum::{Router, routing::get};

use super::controller::{create_student, get_student_emails, get_students, update_student};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route(
            "/teacher/students",
            get(get_student_emails).fallback(method_not_allowed),
        )
        .route(
            "/admin/students",
            get(get_students)
                .post(create_student)
                .patch(update_student)
                .fallback(method_not_allowed),
        )
}
