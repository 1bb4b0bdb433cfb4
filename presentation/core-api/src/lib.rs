//! In-process entry point of the shopping list core.
//!
//! Layout:
//! - config/: configuration read from the environment (database connection)
//! - setup/: logging initialization and dependency wiring
//! - labels, format: presentation mapping used at the UI boundary
pub mod config {
    pub mod app_config;
    pub mod database_config;
}
pub mod format;
pub mod labels;
pub mod setup {
    pub mod dependency_injection;
    pub mod logging;
}

pub use setup::dependency_injection::ShoppingCore;
