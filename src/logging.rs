use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the changelog.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("generate_changelog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
