use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_failed")]
    ConnectionFailed,
    #[error("database.migration_failed")]
    MigrationFailed,
}

/// Connection pool settings for the catalog database.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Defaults sized for a single catalog service instance.
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Opens a PostgreSQL connection pool with the given settings.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionFailed)
}

/// Applies the SQL migrations found in `migrations_dir` to the pool.
pub async fn run_migrations(pool: &PgPool, migrations_dir: &str) -> Result<(), DatabaseError> {
    let dir = Path::new(migrations_dir);
    if !dir.is_dir() {
        return Err(DatabaseError::MigrationFailed);
    }

    let migrator = sqlx::migrate::Migrator::new(dir)
        .await
        .map_err(|_| DatabaseError::MigrationFailed)?;

    migrator
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_pool_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string());

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_override_max_connections() {
        let config =
            DatabaseConfig::new("postgres://localhost/catalog".to_string()).with_max_connections(2);

        assert_eq!(config.max_connections, 2);
    }
}
