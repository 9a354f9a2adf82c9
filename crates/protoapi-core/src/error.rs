//! Error types for protoapi generation runs

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant is fatal for the run that produced it: no partial output
/// set is returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Requested template key is absent from the asset store
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// Stored asset could not be decoded into UTF-8 text
    #[error("failed to decode asset {key}: {message}")]
    AssetDecode { key: String, message: String },

    /// Template text is malformed
    #[error("failed to compile template {template}: {message}")]
    TemplateCompile { template: String, message: String },

    /// Template execution failed against a rendering context
    #[error("failed to render template {template}: {message}")]
    Render { template: String, message: String },

    /// More than one service passed to a single-service backend
    #[error("found {0} services; only 1 service is supported")]
    TooManyServices(usize),

    /// No backend registered under this name
    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    /// Two outputs of one backend resolved to the same filename
    #[error("duplicate output file: {0}")]
    DuplicateOutput(String),

    /// Backend used before its templates were compiled
    #[error("backend not initialized: {0}")]
    NotInitialized(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Returns a stable numeric code suitable for process exit reporting
    pub fn error_code(&self) -> u32 {
        match self {
            GenerateError::AssetNotFound(_) => 1,
            GenerateError::AssetDecode { .. } => 2,
            GenerateError::TemplateCompile { .. } => 3,
            GenerateError::Render { .. } => 4,
            GenerateError::TooManyServices(_) => 5,
            GenerateError::UnknownBackend(_) => 6,
            GenerateError::DuplicateOutput(_) => 7,
            GenerateError::NotInitialized(_) => 8,
            GenerateError::Config(_) => 9,
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
