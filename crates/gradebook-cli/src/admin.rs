use anyhow::{Context, bail};
use sqlx::PgPool;
use validator::ValidateEmail;

use gradebook_core::hash_password;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl NewAdmin {
    pub fn check(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("name must not be empty");
        }
        if !self.email.validate_email() {
            bail!("{} is not a valid email address", self.email);
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            bail!("password must be at least {} characters", MIN_PASSWORD_LENGTH);
        }
        Ok(())
    }
}

/// Inserts a person holding the Admin role.
///
/// Admins can only be created here; the API has no route for it.
pub async fn create_admin(pool: &PgPool, admin: &NewAdmin) -> anyhow::Result<()> {
    admin.check()?;

    let hashed_password = hash_password(&admin.password).map_err(|e| e.error)?;

    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO person (name, email, phone, password)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(&admin.name)
    .bind(&admin.email)
    .bind(&admin.phone)
    .bind(&hashed_password)
    .execute(&mut *tx)
    .await
    .context("failed to insert person")?;

    if inserted.rows_affected() == 0 {
        bail!("a person with email {} already exists", admin.email);
    }

    sqlx::query("INSERT INTO admin (person_id) VALUES ($1)")
        .bind(&admin.email)
        .execute(&mut *tx)
        .await
        .context("failed to grant admin role")?;

    tx.commit().await?;
    Ok(())
}
