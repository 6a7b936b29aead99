use axum::{Router, routing::get};

use super::controller::{archive_user, get_users};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route(
        "/admin/users",
        get(get_users).delete(archive_user).fallback(method_not_allowed),
    )
}
