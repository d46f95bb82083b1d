//! Connection pool setup and migrations.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Result;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://checkout.db`.
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://checkout.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Opens a connection pool with foreign keys enforced.
///
/// An in-memory database lives inside a single connection, so the pool is
/// capped at one connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?
    };

    tracing::info!(url = %config.url, "database connection established");
    Ok(pool)
}

/// Opens a fresh, migrated in-memory database.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = connect(&DatabaseConfig {
        url: IN_MEMORY_URL.to_string(),
        max_connections: 1,
    })
    .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Runs the embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
