//! Runtime log level reloading

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use protoapi_core::{GenerateError, GenerateResult, LogLevel};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Handle for changing the active level filter
pub struct ReloadHandle {
    handle: Mutex<Option<FilterHandle>>,
    level: Mutex<Option<LogLevel>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: Mutex::new(None),
        }
    }

    /// Process-wide handle filled in by [`crate::init_logging`]
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    pub(crate) fn install(&self, handle: FilterHandle, level: LogLevel) {
        *self.handle.lock() = Some(handle);
        *self.level.lock() = Some(level);
    }

    /// Whether a subscriber handle has been installed
    pub fn is_installed(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Level most recently applied, if logging was initialized
    pub fn current_level(&self) -> Option<LogLevel> {
        *self.level.lock()
    }

    /// Switch the filter to `level`
    pub fn reload_level(&self, level: LogLevel) -> GenerateResult<()> {
        let guard = self.handle.lock();
        let handle = guard
            .as_ref()
            .ok_or_else(|| GenerateError::NotInitialized("logging".to_string()))?;

        handle
            .reload(level_filter(level))
            .map_err(|e| GenerateError::Config(format!("failed to reload log filter: {e}")))?;
        *self.level.lock() = Some(level);
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a generator log level onto a tracing filter
pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
