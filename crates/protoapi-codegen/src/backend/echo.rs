//! Go server skeleton for the echo web framework.

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

const SERVICE_TEMPLATE: &str = "echo/service.go.j2";
const OBJS_TEMPLATE: &str = "echo/objs.go.j2";

struct EchoTemplates {
    engine: TemplateEngine,
    service: CompiledTemplate,
    objs: CompiledTemplate,
}

/// Go echo backend.
#[derive(Default)]
pub struct EchoBackend {
    templates: Option<EchoTemplates>,
}

impl EchoBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Go package name: the last segment of the schema package.
pub(crate) fn go_package(package_name: &str, base: &str) -> String {
    match naming::last_segment(package_name) {
        "" => base.to_lowercase(),
        segment => segment.to_string(),
    }
}

#[derive(Serialize)]
struct EchoServiceContext<'a> {
    package: &'a str,
    name: &'a str,
    methods: Vec<MethodView<'a>>,
    r#gen: &'a CommonErrorInfo,
}

#[derive(Serialize)]
struct EchoObjsContext<'a> {
    package: &'a str,
    messages: &'a [Arc<MessageData>],
    enums: &'a [EnumData],
    enum_names: Vec<&'a str>,
    r#gen: &'a CommonErrorInfo,
}

impl Backend for EchoBackend {
    fn name(&self) -> &str {
        "echo"
    }

    fn init(&mut self, request: &SchemaRequest, assets: &AssetStore) -> GenerateResult<()> {
        tracing::debug!(backend = self.name(), application = %request.application_name, "loading templates");
        let mut engine = TemplateEngine::new(TypeTable::GO);
        let service = compile_asset(&mut engine, assets, SERVICE_TEMPLATE)?;
        let objs = compile_asset(&mut engine, assets, OBJS_TEMPLATE)?;

        self.templates = Some(EchoTemplates {
            engine,
            service,
            objs,
        });
        Ok(())
    }

    fn generate(&self, input: &GenerateInput<'_>) -> GenerateResult<OutputFiles> {
        let templates = self
            .templates
            .as_ref()
            .ok_or_else(|| not_initialized(self.name()))?;
        let service = input.service()?;
        let base = input.base_name()?;
        let package = go_package(input.package_name, base);

        let messages = flatten_all(input.messages);
        let common = CommonErrorInfo::new(
            service.and_then(ServiceData::common_error),
            &messages,
            &TypeTable::GO,
        );

        let mut files = OutputFiles::new();
        if let Some(service) = service {
            let context = EchoServiceContext {
                package: &package,
                name: &service.name,
                methods: MethodView::all(&service.methods, &service.name),
                r#gen: &common,
            };
            let text = templates.engine.render(&templates.service, context)?;
            files.insert(format!("{base}.go"), text)?;
        }

        let context = EchoObjsContext {
            package: &package,
            messages: &messages,
            enums: input.enums,
            enum_names: input.enums.iter().map(|e| e.name.as_str()).collect(),
            r#gen: &common,
        };
        let text = templates.engine.render(&templates.objs, context)?;
        files.insert(format!("{base}Objs.go"), text)?;

        tracing::info!(backend = self.name(), files = files.len(), "generated Go");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "echo/echo_tests.rs"]
mod echo_tests;
