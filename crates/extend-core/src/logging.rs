use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a tracing subscriber for embedding hosts and tests.
///
/// Prints formatted events to stdout, filtered by the `RUST_LOG`
/// environment variable with a default level of "info".
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer().with_target(true).with_level(true).compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
