use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Runtime configuration for the catalog service, assembled once at startup
/// from environment variables. The bind address is resolved here so the
/// server setup only deals with ready-to-use values.
pub struct AppConfig {
    pub bind_address: String,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();

        Self {
            bind_address: server.bind_address(),
            cors: cors_config::init_cors(),
        }
    }
}
