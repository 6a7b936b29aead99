use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message sent for every 5xx response. The underlying error is logged only.
pub const INTERNAL_MESSAGE: &str = "something went wrong";

/// Policy failures produced by the authentication and authorization core.
///
/// Each kind maps to exactly one HTTP status, and its `Display` text is the
/// message returned to the caller. The token-related kinds deliberately share
/// the message `unauthorized` so callers cannot probe which check failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("method not allowed")]
    ForbiddenMethod,
    #[error("unauthorized")]
    MissingToken,
    #[error("unauthorized")]
    InvalidToken,
    #[error("unauthorized")]
    MissingRole,
    #[error("unauthorized")]
    InvalidIdentity,
    #[error("course not led by that teacher")]
    CourseNotOwned,
    #[error("incorrect email or password")]
    CredentialMismatch,
}

impl Rejection {
    pub fn status(self) -> StatusCode {
        match self {
            Rejection::ForbiddenMethod => StatusCode::BAD_REQUEST,
            Rejection::MissingToken => StatusCode::FORBIDDEN,
            Rejection::InvalidToken => StatusCode::FORBIDDEN,
            Rejection::MissingRole => StatusCode::FORBIDDEN,
            Rejection::InvalidIdentity => StatusCode::FORBIDDEN,
            Rejection::CourseNotOwned => StatusCode::BAD_REQUEST,
            Rejection::CredentialMismatch => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self::new(rejection.status(), rejection)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// The policy failure behind this error, if it is one.
    pub fn rejection(&self) -> Option<Rejection> {
        self.error.downcast_ref::<Rejection>().copied()
    }

    /// The message the caller sees.
    pub fn public_message(&self) -> String {
        if self.status.is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = ?self.error, "request failed");
        }

        let body = Json(json!({
            "message": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
