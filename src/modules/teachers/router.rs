use axum::{Router, routing::get};

use super::controller::{create_teacher, get_teachers, update_teacher};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new().route(
        "/admin/teachers",
        get(get_teachers)
            .post(create_teacher)
            .patch(update_teacher)
            .fallback(method_not_allowed),
    )
}
