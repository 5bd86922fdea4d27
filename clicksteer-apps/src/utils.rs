use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "clicksteer=info,clicksteer_apps=info,clicksteer_interface=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initializes logging to stderr, so that stdout only carries messages.
///
/// The filter is taken from `RUST_LOG` if set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
