//! MySQL connection pool management

use std::fmt;
use std::time::Duration;

use pc_shared::config::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::InfrastructureError;

/// Shared MySQL connection pool
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}

impl DatabasePool {
    /// Create a pool and open the first connection
    ///
    /// # Arguments
    /// * `config` - Connection URL and pool limits
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - Pool connected to the database
    /// * `Err(InfrastructureError)` - URL invalid or database unreachable
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        if config.url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout)))
            .max_lifetime(Some(Duration::from_secs(config.max_lifetime)))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "MySQL connection pool created"
        );
        Ok(Self { pool })
    }

    /// Underlying SQLx pool, cheap to clone
    pub fn get_pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Run a trivial query to confirm the database answers
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Current pool usage
    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close every connection; further queries fail
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL connection pool closed");
    }
}
