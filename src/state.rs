use std::sync::Arc;

use sqlx::PgPool;

use gradebook_auth::TokenCodec;
use gradebook_config::{AppConfig, CorsConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: Arc<TokenCodec>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenCodec::new(&config.jwt)),
            cors_config: config.cors.clone(),
        }
    }
}
