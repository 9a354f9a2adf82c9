//! Assembled output of one generation run.

use protoapi_core::{GenerateError, GenerateResult};
use std::collections::BTreeMap;

/// Relative filename to file content, ordered by filename.
///
/// A backend fills this only after every template rendered, so a value of
/// this type is always a complete file set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFiles {
    files: BTreeMap<String, String>,
}

impl OutputFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, failing if `filename` is already present.
    pub fn insert(
        &mut self,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> GenerateResult<()> {
        let filename = filename.into();
        if self.files.contains_key(&filename) {
            return Err(GenerateError::DuplicateOutput(filename));
        }
        tracing::debug!(file = %filename, "output assembled");
        self.files.insert(filename, content.into());
        Ok(())
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Filenames in sorted order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl IntoIterator for OutputFiles {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
