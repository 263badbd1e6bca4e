use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

/// Loads `.env` and installs the global tracing subscriber.
///
/// `.env` is read first so that a `RUST_LOG` set there reaches the filter.
pub fn init_logging() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("RUST_LOG"))
        .init();
}

/// Filter directives from `var`, `info` when unset or invalid.
fn env_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("info"))
}
