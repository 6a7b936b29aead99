use axum::{
    extract::{Request, State},
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use gradebook_config::CorsConfig;

/// Answers every `OPTIONS` request with 200, the CORS header set and no body.
/// Other methods pass through untouched.
pub async fn preflight(State(cors): State<CorsConfig>, req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }

    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();

    for (name, value) in [
        (ACCESS_CONTROL_ALLOW_ORIGIN, &cors.allowed_origin),
        (ACCESS_CONTROL_ALLOW_METHODS, &cors.allowed_methods),
        (ACCESS_CONTROL_ALLOW_HEADERS, &cors.allowed_headers),
    ] {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(_) => tracing::warn!(header = %name, "CORS header value is not a valid header"),
        }
    }

    response
}
