use std::env;

/// Listener settings for the catalog HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `SERVICE_IP` (default "127.0.0.1") and `SERVICE_PORT`
    /// (default 8080). A malformed port falls back to the default.
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        Self { ip, port }
    }

    /// The "ip:port" string the TCP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
