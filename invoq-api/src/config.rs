//! API server configuration

/// Bind configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `INVOQ_API_BIND`: bind host (default: 0.0.0.0)
    /// - `PORT` or `INVOQ_API_PORT`: bind port (default: 5000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("INVOQ_API_BIND").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("INVOQ_API_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
