//! Template-facing views over IR entities.

use crate::naming;
use protoapi_core::Method;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A method seen from its owning service.
///
/// Borrows the method and adds the derived attributes route-based templates
/// need: `title`, `path` (`/<Service>.<method>`), `service_type` (HTTP verb)
/// and `error_type`.
#[derive(Debug, Clone, Copy)]
pub struct MethodView<'a> {
    method: &'a Method,
    service_name: &'a str,
}

impl<'a> MethodView<'a> {
    pub fn new(method: &'a Method, service_name: &'a str) -> Self {
        Self {
            method,
            service_name,
        }
    }

    /// Views over every method of a service, in declaration order.
    pub fn all(methods: &'a [Method], service_name: &'a str) -> Vec<Self> {
        methods.iter().map(|m| Self::new(m, service_name)).collect()
    }

    pub fn method(&self) -> &'a Method {
        self.method
    }

    pub fn title(&self) -> String {
        naming::capitalize(&self.method.name)
    }

    pub fn path(&self) -> String {
        format!("/{}.{}", self.service_name, self.method.name)
    }

    pub fn service_type(&self) -> &'a str {
        self.method.service_method()
    }

    pub fn error_type(&self) -> &'a str {
        self.method.error_type()
    }
}

impl Serialize for MethodView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MethodView", 8)?;
        state.serialize_field("name", &self.method.name)?;
        state.serialize_field("input_type", &self.method.input_type)?;
        state.serialize_field("output_type", &self.method.output_type)?;
        state.serialize_field("options", &self.method.options)?;
        state.serialize_field("title", &self.title())?;
        state.serialize_field("path", &self.path())?;
        state.serialize_field("service_type", self.service_type())?;
        state.serialize_field("error_type", self.error_type())?;
        state.end()
    }
}

#[cfg(test)]
#[path = "view/view_tests.rs"]
mod view_tests;
