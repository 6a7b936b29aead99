use axum::{Router, routing::get};

use super::controller::{
    create_course, delete_course, get_courses, get_teacher_courses, update_course,
};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route(
            "/teacher/courses",
            get(get_teacher_courses).fallback(method_not_allowed),
        )
        .route(
            "/admin/courses",
            get(get_courses)
                .post(create_course)
                .patch(update_course)
                .delete(delete_course)
                .fallback(method_not_allowed),
        )
}
