//! Subscriber initialization

use crate::reload::{ReloadHandle, level_filter};
use protoapi_core::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Install the global subscriber: a reloadable level filter over a stderr `fmt` layer.
///
/// Safe to call more than once. Later calls only adjust the level of the
/// subscriber installed by the first call.
pub fn init_logging(level: LogLevel) {
    let handle = ReloadHandle::global();
    if handle.is_installed() {
        reapply_level(handle, level);
        return;
    }

    let (filter, filter_handle) = reload::Layer::<LevelFilter, Registry>::new(level_filter(level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    // Another subscriber may already be global (e.g. in a test harness)
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        handle.install(filter_handle, level);
        tracing::debug!(%level, "logging initialized");
    }
}

/// Reload the level of an installed subscriber, warning when that fails.
fn reapply_level(handle: &ReloadHandle, level: LogLevel) -> bool {
    match handle.reload_level(level) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(%level, error = %e, "failed to reload log level");
            false
        }
    }
}

/// Whether [`init_logging`] installed the global subscriber
pub fn is_initialized() -> bool {
    ReloadHandle::global().is_installed()
}
