use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a tracing level name
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize stderr logging
///
/// `RUST_LOG` takes precedence when set. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("addrbook={}", level_for(verbosity))));

    // Menu output owns stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    debug!("logging initialized at verbosity {}", verbosity);
}
