//! Key-based template lookup over embedded or on-disk assets

use crate::{AssetError, AssetResult, embedded};
use protoapi_core::GeneratorConfig;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Source {
    Embedded,
    Directory(PathBuf),
}

/// Resolves template keys such as `ts/objs.ts.j2` to template text.
///
/// Cloning is cheap; embedded assets are process-wide and decoded once no
/// matter how many stores reference them.
#[derive(Debug, Clone)]
pub struct AssetStore {
    source: Source,
}

impl AssetStore {
    /// Store backed by the assets compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
        }
    }

    /// Store that reads every key from `dir` on each lookup.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        tracing::info!(dir = %dir.display(), "Using template directory override");
        Self {
            source: Source::Directory(dir),
        }
    }

    /// Directory mode when the config names a template dir, embedded otherwise.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match &config.template_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    /// Whether lookups go to a live directory.
    pub fn is_override(&self) -> bool {
        matches!(self.source, Source::Directory(_))
    }

    /// Fetch the template text for `key`.
    ///
    /// A leading `/` is ignored. Keys containing `..` never resolve.
    pub fn get(&self, key: &str) -> AssetResult<Arc<str>> {
        let key = normalize(key).ok_or_else(|| AssetError::NotFound(key.to_string()))?;

        match &self.source {
            Source::Embedded => embedded::find(key)
                .ok_or_else(|| AssetError::NotFound(key.to_string()))?
                .text(),
            Source::Directory(dir) => read_from_dir(dir, key),
        }
    }

    /// Whether `key` resolves in this store.
    pub fn contains(&self, key: &str) -> bool {
        let Some(key) = normalize(key) else {
            return false;
        };
        match &self.source {
            Source::Embedded => embedded::find(key).is_some(),
            Source::Directory(dir) => dir.join(key).is_file(),
        }
    }

    /// Keys of the embedded assets, sorted.
    ///
    /// Directory stores report the same list since they override the
    /// embedded keys one for one.
    pub fn keys(&self) -> Vec<&'static str> {
        embedded::keys().collect()
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::embedded()
    }
}

fn normalize(key: &str) -> Option<&str> {
    let key = key.trim_start_matches('/');
    if key.is_empty() {
        return None;
    }
    let escapes = Path::new(key)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    (!escapes).then_some(key)
}

fn read_from_dir(dir: &Path, key: &str) -> AssetResult<Arc<str>> {
    let path = dir.join(key);
    tracing::debug!(path = %path.display(), "reading template from directory");

    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(Arc::from(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::NotFound(key.to_string())),
        Err(e) => Err(AssetError::Io {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "store/store_tests.rs"]
mod store_tests;
