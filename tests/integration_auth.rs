mod common;

use axum::http::StatusCode;
use gradebook_auth::Role;
use serde_json::json;
use sqlx::PgPool;

use common::{codec, create_test_person, json_request, now, send, setup_test_app, token_for};

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success_carries_current_roles(pool: PgPool) {
    create_test_person(&pool, "Ada", "ada@example.com", "password123", Role::Student).await;
    sqlx::query("INSERT INTO teacher (person_id) VALUES ($1)")
        .bind("ada@example.com")
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool);
    let request = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "ada@example.com", "password": "password123" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    let claims = codec().parse(token, now()).unwrap();
    assert_eq!(claims.email, "ada@example.com");
    assert!(claims.has_role(Role::Student));
    assert!(claims.has_role(Role::Teacher));
    assert!(!claims.has_role(Role::Admin));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_wrong_password_and_unknown_email_fail_identically(pool: PgPool) {
    create_test_person(&pool, "Ada", "ada@example.com", "password123", Role::Student).await;

    let wrong_password = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "ada@example.com", "password": "not-the-password" }),
    );
    let unknown_email = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "nobody@example.com", "password": "password123" }),
    );

    let (status_a, body_a) = send(setup_test_app(pool.clone()), wrong_password).await;
    let (status_b, body_b) = send(setup_test_app(pool), unknown_email).await;

    assert_eq!(status_a, StatusCode::FORBIDDEN);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);
    assert_eq!(body_a, json!({ "message": "incorrect email or password" }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_or_empty_email_fails_like_wrong_password(pool: PgPool) {
    create_test_person(&pool, "Ada", "ada@example.com", "password123", Role::Student).await;

    let wrong_password = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "ada@example.com", "password": "not-the-password" }),
    );
    let (_, expected) = send(setup_test_app(pool.clone()), wrong_password).await;

    for email in ["nobody", ""] {
        let request = json_request(
            "POST",
            "/login",
            None,
            json!({ "email": email, "password": "password123" }),
        );
        let (status, body) = send(setup_test_app(pool.clone()), request).await;

        assert_eq!(status, StatusCode::FORBIDDEN, "{email:?}");
        assert_eq!(body, expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_archived_student_loses_role_at_next_login(pool: PgPool) {
    create_test_person(&pool, "Ada", "ada@example.com", "password123", Role::Student).await;
    sqlx::query("UPDATE student SET active = FALSE WHERE person_id = $1")
        .bind("ada@example.com")
        .execute(&pool)
        .await
        .unwrap();

    let request = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "ada@example.com", "password": "password123" }),
    );
    let (status, body) = send(setup_test_app(pool), request).await;

    assert_eq!(status, StatusCode::OK);
    let claims = codec().parse(body["token"].as_str().unwrap(), now()).unwrap();
    assert!(claims.roles.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_change_password(pool: PgPool) {
    create_test_person(&pool, "Ada", "ada@example.com", "password123", Role::Student).await;
    let token = token_for("ada@example.com", &[Role::Student]);

    let wrong_old = json_request(
        "POST",
        "/change-password",
        Some(&token),
        json!({ "old_password": "guess-guess", "new_password": "new-password-1" }),
    );
    let (status, _) = send(setup_test_app(pool.clone()), wrong_old).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let change = json_request(
        "POST",
        "/change-password",
        Some(&token),
        json!({ "old_password": "password123", "new_password": "new-password-1" }),
    );
    let (status, body) = send(setup_test_app(pool.clone()), change).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success" }));

    let login = json_request(
        "POST",
        "/login",
        None,
        json!({ "email": "ada@example.com", "password": "new-password-1" }),
    );
    let (status, _) = send(setup_test_app(pool), login).await;
    assert_eq!(status, StatusCode::OK);
}
