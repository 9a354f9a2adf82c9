//! Backend contract and shared plumbing.
//!
//! A backend turns one schema into a set of named files for one target.
//! It is used in two steps:
//!
//! 1. [`Backend::init`] loads and compiles its templates once.
//! 2. [`Backend::generate`] renders every file for the schema, or fails
//!    without returning any of them.
//!
//! | Backend | Files |
//! |---------|-------|
//! | `ts-axios`, `ts-fetch` | `<Service>.ts`, `<Service>Objs.ts`, `helper.ts` |
//! | `echo` | `<Service>.go`, `<Service>Objs.go` |
//! | `spring` | `<pkg dir>/<Service>Base.java`, one file per message and enum |
//! | `php` | `<Service>.php` |
//!
//! Without a service, only the type and helper files are produced, named
//! after the application.

mod echo;
mod php;
mod spring;
#[cfg(test)]
mod test_support;
mod ts;
mod view;

pub use echo::EchoBackend;
pub use php::PhpBackend;
pub use spring::SpringBackend;
pub use ts::{TsBackend, TsTransport};
pub use view::MethodView;

use crate::output::OutputFiles;
use crate::template::{CompiledTemplate, TemplateEngine};
use protoapi_assets::AssetStore;
use protoapi_core::{
    EnumData, GenerateError, GenerateResult, MessageData, OptionMap, SchemaRequest, ServiceData,
};

/// Base name used when neither a service nor an application name is given.
pub const DEFAULT_BASE_NAME: &str = "data";

/// A code generator for one target language and transport.
pub trait Backend: Send + Sync {
    /// Registry name of this backend.
    fn name(&self) -> &str;

    /// Load and compile templates. Must succeed before [`Backend::generate`].
    fn init(&mut self, request: &SchemaRequest, assets: &AssetStore) -> GenerateResult<()>;

    /// Render every output file for `input`.
    fn generate(&self, input: &GenerateInput<'_>) -> GenerateResult<OutputFiles>;
}

/// Borrowed view of the schema handed to [`Backend::generate`].
#[derive(Debug, Clone, Copy)]
pub struct GenerateInput<'a> {
    pub application_name: &'a str,
    pub package_name: &'a str,
    pub services: &'a [ServiceData],
    pub messages: &'a [MessageData],
    pub enums: &'a [EnumData],
    pub options: &'a OptionMap,
}

impl<'a> From<&'a SchemaRequest> for GenerateInput<'a> {
    fn from(request: &'a SchemaRequest) -> Self {
        Self {
            application_name: &request.application_name,
            package_name: &request.package_name,
            services: &request.services,
            messages: &request.messages,
            enums: &request.enums,
            options: &request.options,
        }
    }
}

impl<'a> GenerateInput<'a> {
    /// The single service of this run, if any.
    pub fn service(&self) -> GenerateResult<Option<&'a ServiceData>> {
        match self.services {
            [] => Ok(None),
            [service] => Ok(Some(service)),
            many => Err(GenerateError::TooManyServices(many.len())),
        }
    }

    /// Base name for output files: the service name, else the application name.
    pub fn base_name(&self) -> GenerateResult<&'a str> {
        Ok(match self.service()? {
            Some(service) => &service.name,
            None if !self.application_name.is_empty() => self.application_name,
            None => DEFAULT_BASE_NAME,
        })
    }
}

/// Fetch `key` from the asset store and compile it into `engine`.
pub(crate) fn compile_asset(
    engine: &mut TemplateEngine,
    assets: &AssetStore,
    key: &str,
) -> GenerateResult<CompiledTemplate> {
    let source = assets.get(key)?;
    engine.compile(key, &source)
}

pub(crate) fn not_initialized(name: &str) -> GenerateError {
    GenerateError::NotInitialized(name.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn GenerateInput___service___rejects_more_than_one() {
        let request = SchemaRequest {
            services: vec![ServiceData::new("A", vec![]), ServiceData::new("B", vec![])],
            ..SchemaRequest::default()
        };

        let result = GenerateInput::from(&request).service();

        assert_eq!(result, Err(GenerateError::TooManyServices(2)));
    }

    #[test]
    fn GenerateInput___service___outlives_the_view() {
        let request = SchemaRequest {
            services: vec![ServiceData::new("CartService", vec![])],
            ..SchemaRequest::default()
        };

        let (service, base) = {
            let input = GenerateInput::from(&request);
            (input.service().unwrap(), input.base_name().unwrap())
        };

        assert_eq!(service.map(|s| s.name.as_str()), Some("CartService"));
        assert_eq!(base, "CartService");
    }

    #[test]
    fn GenerateInput___base_name___prefers_service_then_application() {
        let mut request = SchemaRequest {
            application_name: "shop".to_string(),
            ..SchemaRequest::default()
        };
        assert_eq!(GenerateInput::from(&request).base_name(), Ok("shop"));

        request.services.push(ServiceData::new("CartService", vec![]));
        assert_eq!(GenerateInput::from(&request).base_name(), Ok("CartService"));

        let empty = SchemaRequest::default();
        assert_eq!(GenerateInput::from(&empty).base_name(), Ok(DEFAULT_BASE_NAME));
    }

    #[test]
    fn compile_asset___missing_key_is_asset_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let assets = AssetStore::from_dir(dir.path());
        let mut engine = TemplateEngine::new(crate::TypeTable::TYPESCRIPT);

        let result = compile_asset(&mut engine, &assets, "ts/objs.ts.j2");

        assert_eq!(
            result,
            Err(GenerateError::AssetNotFound("ts/objs.ts.j2".to_string()))
        );
    }
}
