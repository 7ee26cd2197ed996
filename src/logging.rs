//! Re-exports of the tracing macros used across the crate, plus subscriber
//! setup for the binary.

#[allow(unused_imports)]
pub use tracing::{debug, info, warn};

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=debug dob-check -d 15 -m 8 -y 1991
/// RUST_LOG=dob_check::validate=debug dob-check -d 15 -m 8 -y 1991
/// ```
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
