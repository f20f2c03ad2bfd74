use tracing_subscriber::{fmt, EnvFilter};

/// Initialise stderr logging. `RUST_LOG` wins over `--log-level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
