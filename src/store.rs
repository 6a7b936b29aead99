//! PostgreSQL implementations of the lookups the auth core depends on.

use sqlx::PgPool;

use gradebook_auth::{CourseOwnership, CredentialStore, Role, RoleDirectory};

/// Borrowing adapter from a pool to the auth lookup traits.
#[derive(Debug, Clone, Copy)]
pub struct PgStore<'a>(pub &'a PgPool);

impl CredentialStore for PgStore<'_> {
    type Error = sqlx::Error;

    async fn password_hash(&self, email: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT password FROM person WHERE email = $1")
            .bind(email)
            .fetch_optional(self.0)
            .await
    }
}

impl RoleDirectory for PgStore<'_> {
    type Error = sqlx::Error;

    async fn roles_of(&self, email: &str) -> Result<Vec<Role>, sqlx::Error> {
        let (admin, student, teacher) = sqlx::query_as::<_, (bool, bool, bool)>(
            r#"
            SELECT
                EXISTS (SELECT 1 FROM admin WHERE person_id = $1 AND active),
                EXISTS (SELECT 1 FROM student WHERE person_id = $1 AND active),
                EXISTS (SELECT 1 FROM teacher WHERE person_id = $1 AND active)
            "#,
        )
        .bind(email)
        .fetch_one(self.0)
        .await?;

        let held = [(Role::Admin, admin), (Role::Student, student), (Role::Teacher, teacher)];
        Ok(held
            .into_iter()
            .filter_map(|(role, present)| present.then_some(role))
            .collect())
    }
}

impl CourseOwnership for PgStore<'_> {
    type Error = sqlx::Error;

    async fn owned_course_names(&self, teacher_email: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.name
            FROM course c
            JOIN teacher t ON t.id = c.teacher_id
            WHERE t.person_id = $1 AND t.active AND NOT c.deleted
            ORDER BY c.name
            "#,
        )
        .bind(teacher_email)
        .fetch_all(self.0)
        .await
    }
}
