use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook_auth::{Role, TokenCodec};
use gradebook_config::{AppConfig, CorsConfig, DatabaseConfig, JwtConfig, LogConfig, ServerConfig};
use http_body_util::BodyExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "gradebook-integration-secret";
pub const TEST_TOKEN_TTL: i64 = 3600;

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_ttl: TEST_TOKEN_TTL,
        },
        cors: CorsConfig::default(),
        database: DatabaseConfig {
            url: "postgres://localhost/gradebook_test".to_string(),
            max_connections: 1,
            run_migrations: false,
        },
        server: ServerConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            log: LogConfig {
                directory: None,
                json: false,
            },
        },
    }
}

/// A pool that never connects unless a query runs. Enough for requests the
/// gate rejects before reaching a handler.
#[allow(dead_code)]
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&test_config().database.url)
        .unwrap()
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(AppState::new(pool, &test_config()))
}

pub fn codec() -> TokenCodec {
    TokenCodec::new(&test_config().jwt)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn token_for(email: &str, roles: &[Role]) -> String {
    codec().issue(email, roles, now()).unwrap()
}

#[allow(dead_code)]
pub fn expired_token_for(email: &str, roles: &[Role]) -> String {
    codec()
        .issue(email, roles, now() - TEST_TOKEN_TTL - 60)
        .unwrap()
}

/// Sends one request and returns the status with the body parsed as JSON,
/// or `Value::Null` for an empty body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::empty()).unwrap()
}

/// Inserts a person holding `role`. Uses a low bcrypt cost to keep tests fast.
#[allow(dead_code)]
pub async fn create_test_person(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) {
    let hashed = bcrypt::hash(password, 4).unwrap();

    sqlx::query("INSERT INTO person (name, email, password) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(email)
        .bind(&hashed)
        .execute(pool)
        .await
        .unwrap();

    let membership = match role {
        Role::Admin => "INSERT INTO admin (person_id) VALUES ($1)",
        Role::Student => "INSERT INTO student (person_id) VALUES ($1)",
        Role::Teacher => "INSERT INTO teacher (person_id) VALUES ($1)",
    };
    sqlx::query(membership)
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, teacher_email: &str, name: &str) {
    sqlx::query(
        r#"
        INSERT INTO course (teacher_id, name)
        SELECT id, $2 FROM teacher WHERE person_id = $1
        "#,
    )
    .bind(teacher_email)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_exam(pool: &PgPool, course: &str, student_email: &str, points: i32) {
    sqlx::query(
        r#"
        INSERT INTO exam (course_id, student_id, points)
        SELECT c.id, s.id, $3
        FROM course c, student s
        WHERE c.name = $1 AND s.person_id = $2
        "#,
    )
    .bind(course)
    .bind(student_email)
    .bind(points)
    .execute(pool)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub async fn count_exams(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM exam")
        .fetch_one(pool)
        .await
        .unwrap()
}
