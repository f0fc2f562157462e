use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging for the binaries. Host processes embedding the
/// converter install their own subscriber; the engine itself only emits
/// `tracing` events.
pub fn init_logging() {
    // Respect RUST_LOG if set; otherwise default to verbose for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("subevents_convert=debug,info"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
