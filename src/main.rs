use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use gradebook::logging::init_tracing;
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook_config::AppConfig;
use gradebook_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let _log_guard = init_tracing(&config.server.log).context("failed to set up logging")?;

    let pool = init_db_pool(&config.database)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        run_migrations(&pool).await.context("failed to run migrations")?;
    }

    let state = AppState::new(pool, &config);
    let app = init_router(state);

    let listener = TcpListener::bind(config.server.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.addr))?;

    info!(addr = %config.server.addr, "server listening");
    info!("Swagger UI available at http://{}/swagger-ui", config.server.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
