//! Tracing setup for the binary

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the stdout tracing subscriber.
///
/// `log_level` applies to this crate; reqwest is kept at warn to avoid
/// request noise. `RUST_LOG` overrides everything when set.
pub fn init_tracing(log_level: &str) {
    let default_filter = format!("autoposter={log_level},reqwest=warn");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
