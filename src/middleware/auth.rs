use axum::http::request::Parts;
use axum::http::{Method, Uri};

use gradebook_auth::{AccessError, Role};
use gradebook_core::{AppError, Rejection};

/// The verified identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub email: String,
}

/// Logs a failed gate check and turns it into the matching response error.
pub fn deny(err: AccessError, parts: &Parts) -> AppError {
    tracing::warn!(
        method = %parts.method,
        path = %parts.uri.path(),
        reason = %err,
        "access denied"
    );
    AppError::rejected(err.rejection())
}

/// Wall clock in Unix seconds, as the token codec expects it.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Generates a policy extractor for one route.
///
/// Without a role the extractor only requires a valid token; with one it
/// runs the full gate. Either way it yields the caller's [`Caller`].
#[macro_export]
macro_rules! require_role {
    ($name:ident, [$($method:ident),+ $(,)?]) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::Caller);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = gradebook_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let allowed = [$(axum::http::Method::$method),+];

                gradebook_auth::authenticate(
                    &parts.method,
                    &parts.headers,
                    &allowed,
                    &state.tokens,
                    $crate::middleware::auth::now(),
                )
                .map(|email| $name($crate::middleware::auth::Caller { email }))
                .map_err(|err| $crate::middleware::auth::deny(err, parts))
            }
        }
    };
    ($name:ident, $role:expr, [$($method:ident),+ $(,)?]) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::Caller);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = gradebook_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let allowed = [$(axum::http::Method::$method),+];

                gradebook_auth::authorize(
                    &parts.method,
                    &parts.headers,
                    &allowed,
                    $role,
                    &state.tokens,
                    $crate::middleware::auth::now(),
                )
                .map(|email| $name($crate::middleware::auth::Caller { email }))
                .map_err(|err| $crate::middleware::auth::deny(err, parts))
            }
        }
    };
}

require_role!(StudentExamsAccess, Role::Student, [GET]);
require_role!(TeacherExamsAccess, Role::Teacher, [GET, POST]);
require_role!(TeacherReadAccess, Role::Teacher, [GET]);
require_role!(AdminCoursesAccess, Role::Admin, [GET, POST, PATCH, DELETE]);
require_role!(AdminPeopleAccess, Role::Admin, [GET, POST, PATCH]);
require_role!(AdminUsersAccess, Role::Admin, [GET, DELETE]);
require_role!(PasswordChangeAccess, [POST]);

/// Fallback for methods a route does not serve. Runs before any token check.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::warn!(method = %method, path = %uri.path(), "method not allowed");
    AppError::rejected(Rejection::ForbiddenMethod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    fn parts_for(method: Method, uri: &str) -> Parts {
        let (parts, _) = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn test_deny_maps_to_rejection() {
        let parts = parts_for(Method::GET, "/student/exams");

        let error = deny(AccessError::MissingToken, &parts);
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.rejection(), Some(Rejection::MissingToken));

        let error = deny(AccessError::ForbiddenMethod(Method::PUT), &parts);
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.rejection(), Some(Rejection::ForbiddenMethod));
    }

    #[tokio::test]
    async fn test_method_not_allowed_is_bad_request() {
        let error = method_not_allowed(Method::PUT, Uri::from_static("/admin/users")).await;
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "method not allowed");
    }
}
