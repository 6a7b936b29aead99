use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_auth::{CredentialStore, RoleDirectory, TokenCodec, verify_credentials};
use gradebook_core::{AppError, Rejection, hash_password};
use gradebook_models::auth::{ChangePasswordDto, LoginRequest, LoginResponse};

use crate::store::PgStore;

pub struct AuthService;

impl AuthService {
    /// Verifies the credentials, then issues a token carrying the roles the
    /// person holds right now.
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip(store, codec, dto), fields(email = %dto.email))]
    pub async fn login<S>(
        store: &S,
        codec: &TokenCodec,
        dto: LoginRequest,
        now: i64,
    ) -> Result<LoginResponse, AppError>
    where
        S: CredentialStore + RoleDirectory + Sync,
    {
        if !verify_credentials(store, &dto.email, &dto.password).await {
            return Err(AppError::rejected(Rejection::CredentialMismatch));
        }

        let roles = store.roles_of(&dto.email).await.map_err(AppError::database)?;
        let token = codec.issue(&dto.email, &roles, now)?;

        tracing::info!(roles = ?roles, "login succeeded");
        Ok(LoginResponse { token })
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        email: &str,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        if !verify_credentials(&PgStore(db), email, &dto.old_password).await {
            return Err(AppError::rejected(Rejection::CredentialMismatch));
        }

        let hashed_password = hash_password(&dto.new_password)?;

        let result = sqlx::query("UPDATE person SET password = $1 WHERE email = $2")
            .bind(&hashed_password)
            .bind(email)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("person not found")));
        }

        Ok(())
    }
}
