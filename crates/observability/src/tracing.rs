//! Subscriber wiring.
//!
//! The demo prints its report and operation log on stdout, so log records
//! are written to stderr as one JSON object per line.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable. Per-item `debug`
/// events stay hidden unless asked for.
pub const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; a second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        ::tracing::info!(items = 0, "inventory loaded");
    }
}
