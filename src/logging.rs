//! Structured logging setup using `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events. Hosts that do not install
//! their own subscriber can call one of these helpers.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialise human-readable logging on stderr.
///
/// Controlled by `RUST_LOG` (default: `info`). Panics if a global subscriber
/// is already installed; use [`try_init_cli`] when that is possible.
pub fn init_cli() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Like [`init_cli`], but returns `false` instead of panicking when a global
/// subscriber is already set.
pub fn try_init_cli() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Initialise JSON logging on stderr for machine consumption.
///
/// Returns `false` when a global subscriber is already set.
pub fn try_init_json() -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
