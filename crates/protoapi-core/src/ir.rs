//! Intermediate representation for protocol schemas.
//!
//! This module defines the IR used by all backends. It is a language-agnostic
//! view of a resolved schema: services with their methods, messages with their
//! fields, enums with their values, and free-form options attached to each.
//!
//! # Structure
//!
//! - [`ServiceData`]: a service with ordered [`Method`]s and an [`OptionMap`]
//! - [`MessageData`]: a message with ordered [`MessageField`]s
//! - [`EnumData`]: an enum with ordered `(name, value)` pairs
//! - [`SchemaRequest`]: everything the upstream parser hands over for one run
//!
//! IR values are immutable once built. Transformations that need a modified
//! message (appending a field, rewriting type names) go through the typed copy
//! builders [`MessageData::with_appended_field`] and [`MessageData::with_fields`]
//! and produce new values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service option naming the message used as the root of the error union.
pub const OPTION_COMMON_ERROR: &str = "common_error";

/// Method option naming the HTTP verb used by generated request code.
pub const OPTION_SERVICE_METHOD: &str = "service_method";

/// Method option naming an override error type.
pub const OPTION_ERROR: &str = "error";

/// HTTP verb used when a method carries no `service_method` option.
pub const DEFAULT_SERVICE_METHOD: &str = "POST";

/// Free-form `key -> value` options attached to schema entities.
///
/// A missing key is a valid state, not an error. Callers check presence
/// with [`OptionMap::get`] before using a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<String, String>);

impl OptionMap {
    /// Create an empty option map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether an option is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set an option, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`OptionMap::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field cardinality, serialized with the protobuf descriptor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldLabel {
    #[default]
    #[serde(rename = "LABEL_OPTIONAL")]
    Optional,
    #[serde(rename = "LABEL_REQUIRED")]
    Required,
    #[serde(rename = "LABEL_REPEATED")]
    Repeated,
}

impl FieldLabel {
    pub fn is_repeated(&self) -> bool {
        matches!(self, FieldLabel::Repeated)
    }
}

/// A field in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageField {
    /// Field name.
    pub name: String,

    /// Wire/property key, usually identical to `name`.
    pub key: String,

    /// Declared type: a schema scalar (`int32`, `string`, ...) or a message/enum name.
    pub data_type: String,

    /// Cardinality.
    #[serde(default)]
    pub label: FieldLabel,

    /// Free-text comment from the schema.
    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub options: OptionMap,
}

impl MessageField {
    /// Create a singular optional field whose key equals its name.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: name.clone(),
            name,
            data_type: data_type.into(),
            label: FieldLabel::Optional,
            comment: String::new(),
            options: OptionMap::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Copy of this field with a different declared type.
    #[must_use]
    pub fn with_data_type(&self, data_type: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key.clone(),
            data_type: data_type.into(),
            label: self.label,
            comment: self.comment.clone(),
            options: self.options.clone(),
        }
    }
}

/// A message definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    /// Message name, unique within one generation run.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<MessageField>,

    /// Whether the message itself is array-shaped.
    #[serde(default)]
    pub label: FieldLabel,

    /// Fully-qualified package path, e.g. `com.example.api`.
    #[serde(default)]
    pub package: String,
}

impl MessageData {
    pub fn new(name: impl Into<String>, fields: Vec<MessageField>) -> Self {
        Self {
            name: name.into(),
            fields,
            label: FieldLabel::Optional,
            package: String::new(),
        }
    }

    #[must_use]
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Copy of this message with `field` appended after the existing fields.
    #[must_use]
    pub fn with_appended_field(&self, field: MessageField) -> Self {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.extend(self.fields.iter().cloned());
        fields.push(field);
        self.with_fields(fields)
    }

    /// Copy of this message with its field list replaced.
    #[must_use]
    pub fn with_fields(&self, fields: Vec<MessageField>) -> Self {
        Self {
            name: self.name.clone(),
            fields,
            label: self.label,
            package: self.package.clone(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&MessageField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A single enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumField {
    pub name: String,
    pub value: i32,
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumData {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<EnumField>,
}

impl EnumData {
    pub fn new(name: impl Into<String>, values: &[(&str, i32)]) -> Self {
        Self {
            name: name.into(),
            fields: values
                .iter()
                .map(|(name, value)| EnumField {
                    name: (*name).to_string(),
                    value: *value,
                })
                .collect(),
        }
    }
}

/// A service method.
///
/// Derived attributes such as a title-cased name or a route path are computed
/// by backend-specific views that borrow the method; they are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub input_type: String,
    pub output_type: String,

    #[serde(default)]
    pub options: OptionMap,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
            options: OptionMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// HTTP verb for this method, [`DEFAULT_SERVICE_METHOD`] when unset.
    pub fn service_method(&self) -> &str {
        self.options
            .get(OPTION_SERVICE_METHOD)
            .unwrap_or(DEFAULT_SERVICE_METHOD)
    }

    /// Override error type for this method, empty when unset.
    pub fn error_type(&self) -> &str {
        self.options.get(OPTION_ERROR).unwrap_or_default()
    }
}

/// A service definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceData {
    pub name: String,

    #[serde(default)]
    pub methods: Vec<Method>,

    #[serde(default)]
    pub options: OptionMap,
}

impl ServiceData {
    pub fn new(name: impl Into<String>, methods: Vec<Method>) -> Self {
        Self {
            name: name.into(),
            methods,
            options: OptionMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Name of the message declared as the common error union root, if any.
    pub fn common_error(&self) -> Option<&str> {
        self.options.get(OPTION_COMMON_ERROR)
    }
}

/// Everything the upstream schema parser hands over for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRequest {
    /// Application name, used when no service names the output files.
    #[serde(default)]
    pub application_name: String,

    /// Package of the schema file, e.g. `com.example.api`.
    #[serde(default)]
    pub package_name: String,

    #[serde(default)]
    pub services: Vec<ServiceData>,

    #[serde(default)]
    pub messages: Vec<MessageData>,

    #[serde(default)]
    pub enums: Vec<EnumData>,

    /// File-level options.
    #[serde(default)]
    pub options: OptionMap,

    /// Raw compiler-plugin parameter string, if one was passed.
    #[serde(default)]
    pub parameter: Option<String>,
}

impl SchemaRequest {
    /// Parse a request from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
#[path = "ir/ir_tests.rs"]
mod ir_tests;
