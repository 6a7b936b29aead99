use std::future::Future;

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_auth::{CourseOwnership, OwnershipError, authorize_exam_write};
use gradebook_core::{AppError, Rejection};
use gradebook_models::exams::{CreateExamDto, StudentExam, TeacherExam};

use crate::store::PgStore;

/// Write side of exam results. Inserts only happen after the ownership check.
pub trait ExamLedger: CourseOwnership {
    /// Inserts one result and returns the number of rows written, which is
    /// zero when the course or the active student cannot be found.
    fn insert_exam(
        &self,
        teacher_email: &str,
        exam: &CreateExamDto,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

impl ExamLedger for PgStore<'_> {
    async fn insert_exam(
        &self,
        teacher_email: &str,
        exam: &CreateExamDto,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO exam (course_id, student_id, points)
            SELECT c.id, s.id, $3
            FROM course c
            JOIN teacher t ON t.id = c.teacher_id
            JOIN student s ON s.person_id = $4 AND s.active
            WHERE t.person_id = $1 AND c.name = $2 AND NOT c.deleted
            "#,
        )
        .bind(teacher_email)
        .bind(&exam.course_name)
        .bind(exam.points)
        .bind(&exam.student_email)
        .execute(self.0)
        .await?;

        Ok(result.rows_affected())
    }
}

pub struct ExamService;

impl ExamService {
    #[instrument(skip(db))]
    pub async fn get_student_exams(
        db: &PgPool,
        student_email: &str,
    ) -> Result<Vec<StudentExam>, AppError> {
        let exams = sqlx::query_as::<_, StudentExam>(
            r#"
            SELECT c.name AS course_name, e.points, e.created_at
            FROM exam e
            JOIN course c ON c.id = e.course_id
            JOIN student s ON s.id = e.student_id
            WHERE s.person_id = $1 AND NOT e.deleted AND NOT c.deleted
            ORDER BY e.created_at DESC
            "#,
        )
        .bind(student_email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(exams)
    }

    /// Results recorded in the courses the teacher leads.
    #[instrument(skip(db))]
    pub async fn get_teacher_exams(
        db: &PgPool,
        teacher_email: &str,
    ) -> Result<Vec<TeacherExam>, AppError> {
        let exams = sqlx::query_as::<_, TeacherExam>(
            r#"
            SELECT
                c.name AS course_name,
                p.email AS student_email,
                p.name AS student_name,
                e.points,
                e.created_at
            FROM exam e
            JOIN course c ON c.id = e.course_id
            JOIN teacher t ON t.id = c.teacher_id
            JOIN student s ON s.id = e.student_id
            JOIN person p ON p.email = s.person_id
            WHERE t.person_id = $1 AND NOT e.deleted AND NOT c.deleted
            ORDER BY e.created_at DESC
            "#,
        )
        .bind(teacher_email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(exams)
    }

    /// Records a result after confirming the teacher leads the course.
    #[instrument(skip(ledger))]
    pub async fn record_exam<L>(
        ledger: &L,
        teacher_email: &str,
        exam: &CreateExamDto,
    ) -> Result<(), AppError>
    where
        L: ExamLedger + Sync,
    {
        authorize_exam_write(ledger, teacher_email, &exam.course_name)
            .await
            .map_err(|err| match err {
                OwnershipError::CourseNotOwned => {
                    tracing::warn!(course = %exam.course_name, "course not led by caller");
                    AppError::rejected(Rejection::CourseNotOwned)
                }
                OwnershipError::Store(e) => AppError::database(e),
            })?;

        let inserted = ledger
            .insert_exam(teacher_email, exam)
            .await
            .map_err(AppError::database)?;

        if inserted == 0 {
            return Err(AppError::bad_request(anyhow!(
                "student {} not found",
                exam.student_email
            )));
        }

        Ok(())
    }
}
