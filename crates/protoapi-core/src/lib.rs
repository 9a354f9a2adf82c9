//! protoapi-core - Schema IR, errors and configuration
//!
//! This crate provides the foundational types shared by every protoapi backend:
//! - [`ServiceData`], [`Method`], [`MessageData`], [`MessageField`], [`EnumData`]
//!   describing a fully-resolved protocol schema
//! - [`OptionMap`] for free-form schema options
//! - [`SchemaRequest`] as handed over by the upstream schema parser
//! - [`GenerateError`] for error handling
//! - [`GeneratorConfig`] for generator configuration

mod config;
mod error;
mod ir;

pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use ir::{
    DEFAULT_SERVICE_METHOD, EnumData, EnumField, FieldLabel, MessageData, MessageField, Method,
    OPTION_COMMON_ERROR, OPTION_ERROR, OPTION_SERVICE_METHOD, OptionMap, SchemaRequest,
    ServiceData,
};

/// Log levels understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(GenerateError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EnumData, EnumField, FieldLabel, GenerateError, GenerateResult, GeneratorConfig, LogLevel,
        MessageData, MessageField, Method, OptionMap, SchemaRequest, ServiceData,
    };
}

#[cfg(test)]
mod lib_tests;
