use axum::{Router, routing::post};

use super::controller::{change_password, login};
use crate::middleware::auth::method_not_allowed;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login).fallback(method_not_allowed))
        .route(
            "/change-password",
            post(change_password).fallback(method_not_allowed),
        )
}
