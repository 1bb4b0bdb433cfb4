use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{error, info};

use business::domain::errors::RepositoryError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const IN_MEMORY_URL: &str = "sqlite::memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Takes the write lock up front. A deferred transaction that reads first
/// fails with SQLITE_BUSY when another connection writes before it upgrades.
pub(crate) const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(#[source] MigrateError),
}

impl DatabaseError {
    fn cause(&self) -> String {
        match self {
            DatabaseError::ConnectionError(source) => source.to_string(),
            DatabaseError::MigrationError(source) => source.to_string(),
        }
    }
}

impl From<DatabaseError> for RepositoryError {
    fn from(error: DatabaseError) -> Self {
        RepositoryError::storage_unavailable("open_database", error.cause())
    }
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values.
    ///
    /// A single connection serializes every write.
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// A private database that lives as long as its pool.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL.to_string())
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Creates a SQLite connection pool, creating the database file if missing.
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(DatabaseError::ConnectionError)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);
    if !config.is_in_memory() {
        // Readers keep going while one connection writes.
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // sqlx panics on an empty pool.
    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(config.acquire_timeout);
    if config.is_in_memory() {
        // Every in-memory connection is its own database; keep exactly one alive.
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseError::ConnectionError)
}

/// Runs the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}

/// Lazily opened database shared by every repository.
///
/// The pool is created and migrated on first access. Concurrent first
/// accesses wait on the same initialization, so only one pool is ever built.
pub struct Database {
    config: DatabaseConfig,
    pool: OnceCell<SqlitePool>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    pub async fn pool(&self) -> Result<&SqlitePool, DatabaseError> {
        self.pool
            .get_or_try_init(|| async {
                info!(
                    url = %self.config.database_url,
                    max_connections = self.config.max_connections,
                    "Opening SQLite database"
                );
                let pool = create_sqlite_pool(&self.config).await.inspect_err(|e| {
                    error!(error = %e.cause(), "Failed to open SQLite database")
                })?;
                run_migrations(&pool).await.inspect_err(|e| {
                    error!(error = %e.cause(), "Failed to migrate SQLite database")
                })?;
                info!("SQLite database ready");
                Ok(pool)
            })
            .await
    }

    /// Closes the pool if it was ever opened.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }
}
