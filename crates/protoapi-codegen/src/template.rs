//! Template compilation and rendering.
//!
//! [`TemplateEngine`] wraps a `minijinja` environment bound to one
//! [`TypeTable`] and the generator's helper set. Compilation and rendering
//! failures come back as [`GenerateError::TemplateCompile`] and
//! [`GenerateError::Render`]; nothing panics on malformed input.
//!
//! # Helpers
//!
//! | Kind | Name | Purpose |
//! |------|------|---------|
//! | filter | `target_type` | translate a schema type name through the table |
//! | filter | `to_lower` | lowercase |
//! | filter | `upper_first` | capitalize the first letter |
//! | test | `scalar` | whether a schema type name is a table scalar |
//! | function | `service_method(options)` | `service_method` option, `"POST"` when unset |
//! | function | `error_type(options)` | `error` option, `""` when unset |
//! | function | `import_types(methods)` | deduplicated input/output type names |
//!
//! Undefined variables and attributes are errors, so a context missing a
//! field a template needs fails the render instead of emitting blanks.

use crate::naming;
use crate::types::TypeTable;
use minijinja::value::ValueKind;
use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior, Value};
use protoapi_core::{
    DEFAULT_SERVICE_METHOD, GenerateError, GenerateResult, OPTION_ERROR, OPTION_SERVICE_METHOD,
};
use serde::Serialize;

/// Handle to a template compiled into a [`TemplateEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    name: String,
}

impl CompiledTemplate {
    /// Name the template was compiled under (its asset key).
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Compiles and renders templates for one backend.
pub struct TemplateEngine {
    env: Environment<'static>,
    types: TypeTable,
}

impl TemplateEngine {
    /// Engine with the helper set bound to `types`.
    pub fn new(types: TypeTable) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_helpers(&mut env, types);
        Self { env, types }
    }

    /// Type table the helpers translate with.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Parse `source` and keep it under `name`.
    pub fn compile(&mut self, name: &str, source: &str) -> GenerateResult<CompiledTemplate> {
        tracing::debug!(template = name, "compiling template");
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(|e| GenerateError::TemplateCompile {
                template: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(CompiledTemplate {
            name: name.to_string(),
        })
    }

    /// Render a compiled template against `context`.
    pub fn render<S: Serialize>(
        &self,
        template: &CompiledTemplate,
        context: S,
    ) -> GenerateResult<String> {
        let render_error = |e: Error| GenerateError::Render {
            template: template.name.clone(),
            message: e.to_string(),
        };

        self.env
            .get_template(&template.name)
            .map_err(render_error)?
            .render(context)
            .map_err(render_error)
    }
}

fn register_helpers(env: &mut Environment<'static>, types: TypeTable) {
    env.add_filter("target_type", move |name: String| {
        types.translate(&name).to_string()
    });
    env.add_filter("to_lower", |s: String| s.to_lowercase());
    env.add_filter("upper_first", |s: String| naming::capitalize(&s));
    env.add_test("scalar", move |name: String| types.is_scalar(&name));
    env.add_function("service_method", |options: Value| {
        option_or(&options, OPTION_SERVICE_METHOD, DEFAULT_SERVICE_METHOD)
    });
    env.add_function("error_type", |options: Value| {
        option_or(&options, OPTION_ERROR, "")
    });
    env.add_function("import_types", import_types);
}

/// String option `key` of an option map, `default` when absent.
fn option_or(options: &Value, key: &str, default: &str) -> Result<String, Error> {
    if options.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected an option map, got {}", options.kind()),
        ));
    }

    let value = options.get_attr(key)?;
    if value.is_undefined() || value.is_none() {
        return Ok(default.to_string());
    }
    value.as_str().map(str::to_string).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("option {key} is not a string"),
        )
    })
}

/// Input and output type names of `methods`, first occurrence order.
fn import_types(methods: Value) -> Result<Vec<String>, Error> {
    let mut names: Vec<String> = Vec::new();
    for method in methods.try_iter()? {
        for attr in ["input_type", "output_type"] {
            let value = method.get_attr(attr)?;
            let name = value.as_str().ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("method has no string {attr}"),
                )
            })?;
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
