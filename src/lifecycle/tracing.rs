//! Logging setup.

/// Initializes the tracing subscriber for the application.
///
/// Verbosity is controlled through `RUST_LOG`, e.g. `RUST_LOG=info` or
/// `RUST_LOG=kitchen_board=debug`. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
