//! Sample data: one admin, one teacher, one student, two courses and one
//! exam result. Every insert is idempotent, so seeding twice is harmless.

use anyhow::Context;
use sqlx::PgPool;

use gradebook_core::hash_password;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRole {
    Admin,
    Teacher,
    Student,
}

impl SampleRole {
    fn membership_sql(self) -> &'static str {
        match self {
            SampleRole::Admin => {
                "INSERT INTO admin (person_id) VALUES ($1) ON CONFLICT (person_id) DO NOTHING"
            }
            SampleRole::Teacher => {
                "INSERT INTO teacher (person_id) VALUES ($1) ON CONFLICT (person_id) DO NOTHING"
            }
            SampleRole::Student => {
                "INSERT INTO student (person_id) VALUES ($1) ON CONFLICT (person_id) DO NOTHING"
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SampleAccount {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub role: SampleRole,
}

pub const ADMIN: SampleAccount = SampleAccount {
    name: "ivan",
    phone: "0881234563",
    email: "test@test.com",
    role: SampleRole::Admin,
};

pub const STUDENT: SampleAccount = SampleAccount {
    name: "ivan1",
    phone: "0881234564",
    email: "test1@test.com",
    role: SampleRole::Student,
};

pub const TEACHER: SampleAccount = SampleAccount {
    name: "ivan2",
    phone: "0881234565",
    email: "test2@test.com",
    role: SampleRole::Teacher,
};

pub const COURSES: [&str; 2] = ["Math", "Programming Basics"];

/// Course and points of the single sample exam result.
pub const SAMPLE_EXAM: (&str, i32) = ("Math", 56);

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub people: u64,
    pub courses: u64,
    pub exams: u64,
}

/// Inserts the sample accounts, all with `password`, plus their courses and exam.
pub async fn seed_sample_data(pool: &PgPool, password: &str) -> anyhow::Result<SeedSummary> {
    let hashed_password = hash_password(password).map_err(|e| e.error)?;
    let mut summary = SeedSummary::default();

    let mut tx = pool.begin().await?;

    for account in [ADMIN, STUDENT, TEACHER] {
        summary.people += sqlx::query(
            r#"
            INSERT INTO person (name, phone, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(account.name)
        .bind(account.phone)
        .bind(account.email)
        .bind(&hashed_password)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("failed to insert {}", account.email))?
        .rows_affected();

        sqlx::query(account.role.membership_sql())
            .bind(account.email)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to grant role to {}", account.email))?;
    }

    for course in COURSES {
        summary.courses += sqlx::query(
            r#"
            INSERT INTO course (teacher_id, name)
            SELECT t.id, $2
            FROM teacher t
            WHERE t.person_id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM course c
                  WHERE c.teacher_id = t.id AND c.name = $2 AND NOT c.deleted
              )
            "#,
        )
        .bind(TEACHER.email)
        .bind(course)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("failed to insert course {}", course))?
        .rows_affected();
    }

    let (course, points) = SAMPLE_EXAM;
    summary.exams += sqlx::query(
        r#"
        INSERT INTO exam (course_id, student_id, points)
        SELECT c.id, s.id, $4
        FROM course c
        JOIN teacher t ON t.id = c.teacher_id
        JOIN student s ON s.person_id = $2
        WHERE t.person_id = $1 AND c.name = $3 AND NOT c.deleted
          AND NOT EXISTS (
              SELECT 1 FROM exam e
              WHERE e.course_id = c.id AND e.student_id = s.id AND NOT e.deleted
          )
        "#,
    )
    .bind(TEACHER.email)
    .bind(STUDENT.email)
    .bind(course)
    .bind(points)
    .execute(&mut *tx)
    .await
    .context("failed to insert sample exam")?
    .rows_affected();

    tx.commit().await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accounts_cover_every_role() {
        let accounts = [ADMIN, STUDENT, TEACHER];
        for role in [SampleRole::Admin, SampleRole::Teacher, SampleRole::Student] {
            assert_eq!(accounts.iter().filter(|a| a.role == role).count(), 1);
        }
    }

    #[test]
    fn test_sample_exam_uses_a_sample_course() {
        assert!(COURSES.contains(&SAMPLE_EXAM.0));
        assert!(SAMPLE_EXAM.1 > 0);
    }
}
