use persistence::db::DatabaseConfig;

use super::database_config::{ConfigError, database_config_from_env};

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: database_config_from_env()?,
        })
    }
}
