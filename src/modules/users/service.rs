//! Person storage shared by the student and teacher admin routes.
//!
//! A student or teacher is a `person` row plus an active membership row in
//! the table named by [`ManagedRole::table`]. Archiving flips the membership
//! to inactive and keeps the person.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::{AppError, hash_password};
use gradebook_models::people::{CreatePersonDto, ManagedRole, Person, UpdatePersonDto};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_people(db: &PgPool, role: ManagedRole) -> Result<Vec<Person>, AppError> {
        let sql = format!(
            r#"
            SELECT p.name, p.email, p.phone
            FROM {table} r
            JOIN person p ON p.email = r.person_id
            WHERE r.active
            ORDER BY p.name, p.email
            "#,
            table = role.table()
        );

        let people = sqlx::query_as::<_, Person>(&sql)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(people)
    }

    #[instrument(skip(db))]
    pub async fn get_emails(db: &PgPool, role: ManagedRole) -> Result<Vec<String>, AppError> {
        let sql = format!(
            "SELECT person_id FROM {table} WHERE active ORDER BY person_id",
            table = role.table()
        );

        let emails = sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(emails)
    }

    /// Creates the person and the role membership in one transaction.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_person(
        db: &PgPool,
        role: ManagedRole,
        dto: CreatePersonDto,
    ) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query("INSERT INTO person (name, email, phone, password) VALUES ($1, $2, $3, $4)")
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&hashed_password)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::bad_request(anyhow!(
                            "person with email {} already exists",
                            dto.email
                        ));
                    }
                    if db_err.is_check_violation() {
                        return AppError::bad_request(anyhow!("invalid person fields"));
                    }
                }
                AppError::database(e)
            })?;

        let sql = format!("INSERT INTO {table} (person_id) VALUES ($1)", table = role.table());
        sqlx::query(&sql)
            .bind(&dto.email)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        tracing::info!(role = role.table(), "person created");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn update_person(
        db: &PgPool,
        role: ManagedRole,
        dto: UpdatePersonDto,
    ) -> Result<(), AppError> {
        if dto.name.is_none() && dto.phone.is_none() {
            return Err(AppError::bad_request(anyhow!("nothing to update")));
        }

        let sql = format!(
            r#"
            UPDATE person p
            SET name = COALESCE($2, p.name),
                phone = COALESCE($3, p.phone)
            FROM {table} r
            WHERE p.email = $1 AND r.person_id = p.email AND r.active
            "#,
            table = role.table()
        );

        let result = sqlx::query(&sql)
            .bind(&dto.email)
            .bind(&dto.name)
            .bind(&dto.phone)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("{} {} not found", role.table(), dto.email)));
        }

        Ok(())
    }

    /// Deactivates the membership; the person loses the role at next login.
    #[instrument(skip(db))]
    pub async fn archive_person(
        db: &PgPool,
        role: ManagedRole,
        email: &str,
    ) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {table} SET active = FALSE WHERE person_id = $1 AND active",
            table = role.table()
        );

        let result = sqlx::query(&sql)
            .bind(email)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("{} {} not found", role.table(), email)));
        }

        tracing::info!(role = role.table(), "person archived");
        Ok(())
    }
}
