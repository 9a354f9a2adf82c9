//! PHP client built on Guzzle.
//!
//! A single file holds one class per message plus the client class.

use super::{Backend, GenerateInput, MethodView, compile_asset, not_initialized};
use crate::flatten::flatten_all;
use crate::naming;
use crate::output::OutputFiles;
use crate::template::{CompiledTemplate, TemplateEngine};
use crate::types::TypeTable;
use crate::union::CommonErrorInfo;
use protoapi_assets::AssetStore;
use protoapi_core::{EnumData, GenerateResult, MessageData, SchemaRequest, ServiceData};
use serde::Serialize;
use std::sync::Arc;

const CLIENT_TEMPLATE: &str = "php/client.php.j2";

struct PhpTemplates {
    engine: TemplateEngine,
    client: CompiledTemplate,
}

/// PHP backend.
#[derive(Default)]
pub struct PhpBackend {
    templates: Option<PhpTemplates>,
}

impl PhpBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Serialize)]
struct PhpContext<'a> {
    namespace: String,
    service: Option<&'a str>,
    messages: &'a [Arc<MessageData>],
    enums: &'a [EnumData],
    enum_names: Vec<&'a str>,
    methods: Vec<MethodView<'a>>,
    r#gen: &'a CommonErrorInfo,
}

impl Backend for PhpBackend {
    fn name(&self) -> &str {
        "php"
    }

    fn init(&mut self, request: &SchemaRequest, assets: &AssetStore) -> GenerateResult<()> {
        tracing::debug!(backend = self.name(), application = %request.application_name, "loading templates");
        let mut engine = TemplateEngine::new(TypeTable::PHP);
        let client = compile_asset(&mut engine, assets, CLIENT_TEMPLATE)?;

        self.templates = Some(PhpTemplates { engine, client });
        Ok(())
    }

    fn generate(&self, input: &GenerateInput<'_>) -> GenerateResult<OutputFiles> {
        let templates = self
            .templates
            .as_ref()
            .ok_or_else(|| not_initialized(self.name()))?;
        let service = input.service()?;
        let base = input.base_name()?;

        let messages = flatten_all(input.messages);
        let common = CommonErrorInfo::new(
            service.and_then(ServiceData::common_error),
            &messages,
            &TypeTable::PHP,
        );

        let context = PhpContext {
            namespace: naming::php_namespace(input.package_name),
            service: service.map(|s| s.name.as_str()),
            messages: &messages,
            enums: input.enums,
            enum_names: input.enums.iter().map(|e| e.name.as_str()).collect(),
            methods: service
                .map(|s| MethodView::all(&s.methods, &s.name))
                .unwrap_or_default(),
            r#gen: &common,
        };

        let mut files = OutputFiles::new();
        let text = templates.engine.render(&templates.client, context)?;
        files.insert(format!("{base}.php"), text)?;

        tracing::info!(backend = self.name(), files = files.len(), "generated PHP");
        Ok(files)
    }
}
