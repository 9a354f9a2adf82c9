//! Generation entry point.

use crate::backend::GenerateInput;
use crate::output::OutputFiles;
use crate::registry::BackendRegistry;
use protoapi_assets::AssetStore;
use protoapi_core::{GenerateError, GenerateResult, GeneratorConfig, SchemaRequest};

/// Runs one backend over one schema request.
///
/// # Example
///
/// ```
/// use protoapi_codegen::Generator;
/// use protoapi_core::{MessageData, MessageField, SchemaRequest};
///
/// let request = SchemaRequest {
///     application_name: "people".to_string(),
///     messages: vec![MessageData::new(
///         "Person",
///         vec![MessageField::new("name", "string")],
///     )],
///     ..SchemaRequest::default()
/// };
///
/// let files = Generator::new().generate("ts", &request)?;
/// assert!(files.get("peopleObjs.ts").unwrap().contains("name: string;"));
/// # Ok::<(), protoapi_core::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    registry: BackendRegistry,
    assets: AssetStore,
}

impl Generator {
    /// Built-in backends over the embedded templates.
    pub fn new() -> Self {
        Self::with_parts(BackendRegistry::with_defaults(), AssetStore::embedded())
    }

    pub fn with_parts(registry: BackendRegistry, assets: AssetStore) -> Self {
        Self { registry, assets }
    }

    /// Built-in backends, reading templates from `config.template_dir` when set.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_parts(
            BackendRegistry::with_defaults(),
            AssetStore::from_config(config),
        )
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Generate every file `backend` produces for `request`.
    ///
    /// More than one service fails with [`GenerateError::TooManyServices`]
    /// before any backend is constructed. Any later failure returns the
    /// error alone, never a partial file set.
    pub fn generate(&self, backend: &str, request: &SchemaRequest) -> GenerateResult<OutputFiles> {
        let services = request.services.len();
        if services > 1 {
            return Err(GenerateError::TooManyServices(services));
        }

        let mut generator = self.registry.create(backend)?;
        tracing::info!(
            backend,
            services,
            messages = request.messages.len(),
            enums = request.enums.len(),
            override_templates = self.assets.is_override(),
            "starting generation"
        );

        generator.init(request, &self.assets)?;
        generator.generate(&GenerateInput::from(request))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
