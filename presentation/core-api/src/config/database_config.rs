use std::env;
use std::time::Duration;

use persistence::db::DatabaseConfig;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shopping_list.db";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.invalid_number ({key})")]
    InvalidNumber { key: &'static str, value: String },
    #[error("config.pool_size_zero ({key})")]
    PoolSizeZero { key: &'static str },
}

/// Load the database configuration from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://shopping_list.db")
/// - DATABASE_MAX_CONNECTIONS: pool size, at least 1 (default: 1, a single writer)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
pub fn database_config_from_env() -> Result<DatabaseConfig, ConfigError> {
    database_config_from(|key| env::var(key).ok())
}

/// Same as [`database_config_from_env`], reading variables through `lookup`.
pub fn database_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DatabaseConfig, ConfigError> {
    let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
    let mut config = DatabaseConfig::new(database_url);

    if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
        config.max_connections = parse_number("DATABASE_MAX_CONNECTIONS", &value)?;
        if config.max_connections == 0 {
            return Err(ConfigError::PoolSizeZero {
                key: "DATABASE_MAX_CONNECTIONS",
            });
        }
    }
    if let Some(value) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        config.acquire_timeout =
            Duration::from_secs(parse_number("DATABASE_ACQUIRE_TIMEOUT_SECS", &value)?);
    }
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}
