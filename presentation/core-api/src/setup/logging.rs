use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber filtered by `RUST_LOG` (default "info").
///
/// Returns `false` when a subscriber was already installed; calling it again is harmless.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_ok()
}
