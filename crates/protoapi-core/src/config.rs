//! Generator configuration types

use crate::{GenerateError, GenerateResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator configuration
///
/// Sources, in increasing precedence when combined by the CLI: defaults,
/// a `protoapi.toml` file, the compiler-plugin parameter string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Backend name to run (see the backend registry)
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Read templates from this directory instead of the embedded assets
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory generated files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_backend() -> String {
    "ts".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            template_dir: None,
            log_level: default_log_level(),
            output_dir: default_output_dir(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> GenerateResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Create configuration from TOML text
    pub fn from_toml(text: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Create configuration from a compiler-plugin parameter string
    ///
    /// The parameter is a comma-separated list of `key=value` pairs, e.g.
    /// `lang=ts-axios,template_dir=tpl,log_level=debug`.
    pub fn from_parameter(parameter: &str) -> GenerateResult<Self> {
        let mut config = Self::default();
        config.apply_parameter(parameter)?;
        Ok(config)
    }

    /// Overlay settings from a compiler-plugin parameter string
    pub fn apply_parameter(&mut self, parameter: &str) -> GenerateResult<()> {
        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                GenerateError::Config(format!("expected key=value, got '{pair}'"))
            })?;
            let value = value.trim();
            match key.trim() {
                "lang" | "backend" => self.backend = value.to_string(),
                "template_dir" => self.template_dir = Some(PathBuf::from(value)),
                "log_level" => self.log_level = value.to_string(),
                "output_dir" => self.output_dir = PathBuf::from(value),
                other => {
                    return Err(GenerateError::Config(format!(
                        "unknown parameter key: {other}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parsed log level
    pub fn log_level(&self) -> GenerateResult<LogLevel> {
        self.log_level.parse()
    }
}
