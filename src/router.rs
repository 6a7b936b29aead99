use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gradebook_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::cors::preflight;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::exams::router::init_exams_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let allowed_origins: Vec<HeaderValue> =
            config.allowed_origin.parse::<HeaderValue>().ok().into_iter().collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

pub fn init_router(state: AppState) -> Router {
    let cors_config = state.cors_config.clone();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(init_auth_router())
        .merge(init_exams_router())
        .merge(init_courses_router())
        .merge(init_students_router())
        .merge(init_teachers_router())
        .merge(init_users_router())
        .with_state(state)
        .layer(cors_layer(&cors_config))
        .layer(middleware::from_fn_with_state(cors_config, preflight))
        .layer(middleware::from_fn(logging_middleware))
}
