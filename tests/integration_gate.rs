//! Requests the access gate settles without touching the database.

mod common;

use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use gradebook_auth::Role;
use serde_json::json;
use tower::ServiceExt;

use common::{
    empty_request, expired_token_for, json_request, lazy_pool, send, setup_test_app, token_for,
};

#[tokio::test]
async fn test_missing_token_is_forbidden() {
    let app = setup_test_app(lazy_pool());

    let (status, body) = send(app, empty_request("GET", "/student/exams", None)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "unauthorized" }));
}

#[tokio::test]
async fn test_wrong_method_is_rejected_before_token_check() {
    let app = setup_test_app(lazy_pool());

    let (status, body) = send(app, empty_request("PUT", "/student/exams", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "method not allowed" }));
}

#[tokio::test]
async fn test_get_on_login_is_method_not_allowed() {
    let app = setup_test_app(lazy_pool());

    let (status, _) = send(app, empty_request("GET", "/login", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_on_teacher_exams_is_method_not_allowed() {
    let app = setup_test_app(lazy_pool());
    let token = token_for("teacher@example.com", &[Role::Teacher]);

    let (status, _) = send(app, empty_request("DELETE", "/teacher/exams", Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preflight_answers_any_path() {
    for path in ["/student/exams", "/admin/courses", "/not-a-route"] {
        let app = setup_test_app(lazy_pool());

        let response = app
            .oneshot(empty_request("OPTIONS", path, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let headers = response.headers();
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PATCH, DELETE, OPTIONS"
        );
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "Authorization, Content-Type");

        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn test_cors_origin_added_to_regular_responses() {
    let app = setup_test_app(lazy_pool());

    let mut request = empty_request("GET", "/student/exams", None);
    request
        .headers_mut()
        .insert("origin", "http://localhost:3000".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_student_token_on_teacher_route_is_forbidden() {
    let token = token_for("student@example.com", &[Role::Student]);

    for (method, path) in [
        ("GET", "/teacher/courses"),
        ("GET", "/teacher/exams"),
        ("GET", "/admin/users"),
    ] {
        let app = setup_test_app(lazy_pool());
        let (status, body) = send(app, empty_request(method, path, Some(&token))).await;

        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(body, json!({ "message": "unauthorized" }));
    }
}

#[tokio::test]
async fn test_teacher_cannot_post_exam_with_student_token() {
    let app = setup_test_app(lazy_pool());
    let token = token_for("student@example.com", &[Role::Student]);

    let request = json_request(
        "POST",
        "/teacher/exams",
        Some(&token),
        json!({ "student_email": "student@example.com", "course_name": "Math", "points": 100 }),
    );
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = setup_test_app(lazy_pool());
    let token = expired_token_for("student@example.com", &[Role::Student]);

    let (status, body) = send(app, empty_request("GET", "/student/exams", Some(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "unauthorized" }));
}

#[tokio::test]
async fn test_bearer_prefix_is_not_stripped() {
    let app = setup_test_app(lazy_pool());
    let token = token_for("student@example.com", &[Role::Student]);

    let header = format!("Bearer {token}");
    let (status, _) = send(app, empty_request("GET", "/student/exams", Some(&header))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_forbidden() {
    let app = setup_test_app(lazy_pool());
    let other = gradebook_auth::TokenCodec::new(&gradebook_config::JwtConfig {
        secret: "some-other-secret".to_string(),
        token_ttl: 3600,
    });
    let token = other
        .issue("admin@example.com", &[Role::Admin], common::now())
        .unwrap();

    let request = empty_request("GET", "/admin/users?role=student", Some(&token));
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_with_invalid_identity_is_forbidden() {
    let app = setup_test_app(lazy_pool());
    let token = token_for("not-an-email", &[Role::Teacher]);

    let (status, _) = send(app, empty_request("GET", "/teacher/courses", Some(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_change_password_requires_token() {
    let app = setup_test_app(lazy_pool());

    let request = json_request(
        "POST",
        "/change-password",
        None,
        json!({ "old_password": "password123", "new_password": "password456" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "unauthorized" }));
}

#[tokio::test]
async fn test_login_rejects_missing_field_before_lookup() {
    let app = setup_test_app(lazy_pool());
    let request = json_request("POST", "/login", None, json!({ "password": "x" }));
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "email is required" }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app(lazy_pool());

    let (status, body) = send(app, empty_request("GET", "/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/login"].is_object());
    assert!(body["paths"]["/teacher/exams"]["post"].is_object());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = setup_test_app(lazy_pool());

    let response = app
        .oneshot(empty_request("GET", "/student/exams", None))
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36);
}
