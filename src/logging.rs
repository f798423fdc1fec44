use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
