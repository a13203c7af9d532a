use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so they never mix with printed results.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(default_level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
