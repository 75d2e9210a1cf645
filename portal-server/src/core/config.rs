//! Server configuration

/// Portal server configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Base URL of the upstream invoice store REST API
    pub store_base_url: String,
    /// Optional bearer key for the invoice store
    pub store_api_key: Option<String>,
    pub request_timeout_ms: u64,
    /// Fallback tax rate when the store's settings are unreachable
    pub default_ppn: Option<f64>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store_base_url: std::env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000".into()),
            store_api_key: std::env::var("STORE_API_KEY").ok(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            default_ppn: std::env::var("DEFAULT_PPN")
                .ok()
                .and_then(|p| p.parse().ok()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
