//! protoapi-logging - Tracing setup for the generator
//!
//! This crate provides:
//! - [`init_logging`] installing a stderr `fmt` subscriber with a reloadable level
//! - [`ReloadHandle`] for changing the level after initialization
//!
//! Logs go to stderr because stdout carries the compiler-plugin response.

mod init;
mod reload;

pub use init::{init_logging, is_initialized};
pub use protoapi_core::LogLevel;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
