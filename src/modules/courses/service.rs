use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gradebook_auth::CourseOwnership;
use gradebook_core::AppError;
use gradebook_models::courses::{Course, CreateCourseDto, UpdateCourseDto};

use crate::store::PgStore;

const DEFAULT_SEATS: i32 = 50;

fn unique_violation(err: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return AppError::bad_request(anyhow!("teacher already leads a course named {}", name));
    }
    AppError::database(err)
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_teacher_course_names(
        db: &PgPool,
        teacher_email: &str,
    ) -> Result<Vec<String>, AppError> {
        PgStore(db)
            .owned_course_names(teacher_email)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.id,
                c.name,
                c.number_of_seats,
                p.email AS teacher_email,
                p.name AS teacher_name
            FROM course c
            JOIN teacher t ON t.id = c.teacher_id
            JOIN person p ON p.email = t.person_id
            WHERE NOT c.deleted
            ORDER BY c.name, p.email
            "#,
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    async fn teacher_id(db: &PgPool, teacher_email: &str) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM teacher WHERE person_id = $1 AND active")
            .bind(teacher_email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::bad_request(anyhow!("teacher {} not found", teacher_email)))
    }

    #[instrument(skip(db))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Uuid, AppError> {
        let teacher_id = Self::teacher_id(db, &dto.teacher_email).await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO course (teacher_id, name, number_of_seats)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(teacher_id)
        .bind(&dto.name)
        .bind(dto.number_of_seats.unwrap_or(DEFAULT_SEATS))
        .fetch_one(db)
        .await
        .map_err(|e| unique_violation(e, &dto.name))?;

        Ok(id)
    }

    #[instrument(skip(db))]
    pub async fn update_course(db: &PgPool, dto: UpdateCourseDto) -> Result<(), AppError> {
        if dto.is_empty() {
            return Err(AppError::bad_request(anyhow!("nothing to update")));
        }

        let teacher_id = match &dto.teacher_email {
            Some(email) => Some(Self::teacher_id(db, email).await?),
            None => None,
        };

        let result = sqlx::query(
            r#"
            UPDATE course
            SET teacher_id = COALESCE($2, teacher_id),
                name = COALESCE($3, name),
                number_of_seats = COALESCE($4, number_of_seats)
            WHERE id = $1 AND NOT deleted
            "#,
        )
        .bind(dto.id)
        .bind(teacher_id)
        .bind(&dto.name)
        .bind(dto.number_of_seats)
        .execute(db)
        .await
        .map_err(|e| unique_violation(e, dto.name.as_deref().unwrap_or_default()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("course not found")));
        }

        Ok(())
    }

    /// Soft delete. Exams in the course disappear from every listing.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE course SET deleted = TRUE WHERE id = $1 AND NOT deleted")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("course not found")));
        }

        Ok(())
    }
}
