use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Respects `RUST_LOG`, falling back to `info,tower_http=info,axum=info`.
/// Safe to call more than once.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
