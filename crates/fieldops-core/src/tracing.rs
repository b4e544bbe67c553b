use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at service startup.
///
/// JSON format, filtered by `RUST_LOG`; falls back to `default_directives`
/// (e.g. `"info,sqlx=warn"`) when the variable is unset or invalid.
/// Safe to call multiple times; subsequent calls are silently ignored.
pub fn init_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
