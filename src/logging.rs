//! Process-wide logging setup.
//!
//! The library only emits `tracing` events. Binaries (or applications
//! embedding the crate) call [`init`] once to get them printed.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`
/// and defaulting to `info`.
///
/// Only the first call has any effect. If another global subscriber is
/// already installed it is left in place.
pub fn init() {
    init_with_default("info");
}

/// Like [`init`] with a custom directive used when `RUST_LOG` is unset.
pub fn init_with_default(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();

        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set; keeping it");
        }
    });
}
