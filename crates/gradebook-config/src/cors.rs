use std::env;

pub const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Authorization, Content-Type";

/// Values of the fixed CORS header set.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// A single origin, or `*`.
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            allowed_methods: ALLOWED_METHODS.to_string(),
            allowed_headers: ALLOWED_HEADERS.to_string(),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origin = env::var("ALLOWED_ORIGIN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "*".to_string());

        Self {
            allowed_origin,
            ..Self::default()
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origin == "*"
    }
}
