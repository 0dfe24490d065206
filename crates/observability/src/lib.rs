//! Logging for the stockroom binaries.
//!
//! Stock mutations log at `debug`, load/save at `info`, and rejected removals
//! or unreadable inventory files at `warn`. Nothing here is needed by the
//! library crates; they only emit `tracing` events.

/// Install the stockroom subscriber. Repeat calls keep the first one.
pub fn init() {
    tracing::init();
}

/// JSON-on-stderr subscriber with an `RUST_LOG` filter.
pub mod tracing;
