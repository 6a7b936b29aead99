//! # Gradebook DB
//!
//! Connection pool and embedded migrations for the Gradebook API.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&config.database).await?;
//! if config.database.run_migrations {
//!     run_migrations(&pool).await?;
//! }
//! ```

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

use gradebook_config::DatabaseConfig;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Migrations under the workspace `migrations/` directory, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a PostgreSQL pool sized by `config.max_connections`.
///
/// The returned pool is cheaply cloneable and should be stored in the
/// application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
