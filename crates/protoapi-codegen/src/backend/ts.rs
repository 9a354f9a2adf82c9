//! TypeScript client backend.
//!
//! One backend serves both HTTP client libraries; [`TsTransport`] only picks
//! the client template. Type files get union emulation so error shapes
//! listed by the service's common error carry a `kind` discriminant.

use super::{Backend, GenerateInput, compile_asset, not_initialized};
use crate::flatten::flatten_all;
use crate::output::OutputFiles;
use crate::template::{CompiledTemplate, TemplateEngine};
use crate::types::TypeTable;
use crate::union::{CommonErrorInfo, inject_discriminant};
use protoapi_assets::AssetStore;
use protoapi_core::{EnumData, GenerateResult, MessageData, Method, SchemaRequest, ServiceData};
use serde::Serialize;
use std::sync::Arc;

const OBJS_TEMPLATE: &str = "ts/objs.ts.j2";
const HELPER_TEMPLATE: &str = "ts/helper.ts.j2";

/// Filename of the shared helper module.
pub const HELPER_FILE: &str = "helper.ts";

/// HTTP client library targeted by the generated client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsTransport {
    Axios,
    Fetch,
}

impl TsTransport {
    fn template(self) -> &'static str {
        match self {
            TsTransport::Axios => "ts/service_axios.ts.j2",
            TsTransport::Fetch => "ts/service_fetch.ts.j2",
        }
    }

    fn backend_name(self) -> &'static str {
        match self {
            TsTransport::Axios => "ts-axios",
            TsTransport::Fetch => "ts-fetch",
        }
    }
}

struct TsTemplates {
    engine: TemplateEngine,
    service: CompiledTemplate,
    objs: CompiledTemplate,
    helper: CompiledTemplate,
}

/// TypeScript backend, parameterized by transport.
pub struct TsBackend {
    transport: TsTransport,
    templates: Option<TsTemplates>,
}

impl TsBackend {
    pub fn new(transport: TsTransport) -> Self {
        Self {
            transport,
            templates: None,
        }
    }

    pub fn transport(&self) -> TsTransport {
        self.transport
    }
}

#[derive(Serialize)]
struct TsContext<'a> {
    class_name: &'a str,
    objs_module: &'a str,
    data_types: &'a [Arc<MessageData>],
    enums: &'a [EnumData],
    functions: &'a [Method],
    r#gen: &'a CommonErrorInfo,
}

impl Backend for TsBackend {
    fn name(&self) -> &str {
        self.transport.backend_name()
    }

    fn init(&mut self, request: &SchemaRequest, assets: &AssetStore) -> GenerateResult<()> {
        tracing::debug!(backend = self.name(), application = %request.application_name, "loading templates");
        let mut engine = TemplateEngine::new(TypeTable::TYPESCRIPT);
        let service = compile_asset(&mut engine, assets, self.transport.template())?;
        let objs = compile_asset(&mut engine, assets, OBJS_TEMPLATE)?;
        let helper = compile_asset(&mut engine, assets, HELPER_TEMPLATE)?;

        self.templates = Some(TsTemplates {
            engine,
            service,
            objs,
            helper,
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
        let objs_base = format!("{base}Objs");

        let messages = flatten_all(input.messages);
        let common_error = service.and_then(ServiceData::common_error);
        let common = CommonErrorInfo::new(common_error, &messages, &TypeTable::TYPESCRIPT);
        let tagged = inject_discriminant(&messages, common_error, &TypeTable::TYPESCRIPT);
        let functions = service.map(|s| s.methods.as_slice()).unwrap_or_default();

        let context = |data_types| TsContext {
            class_name: base,
            objs_module: &objs_base,
            data_types,
            enums: input.enums,
            functions,
            r#gen: &common,
        };

        let mut files = OutputFiles::new();
        if service.is_some() {
            let client = templates
                .engine
                .render(&templates.service, context(&messages))?;
            files.insert(format!("{base}.ts"), client)?;
        }
        let objs = templates.engine.render(&templates.objs, context(&tagged))?;
        files.insert(format!("{objs_base}.ts"), objs)?;
        let helper = templates
            .engine
            .render(&templates.helper, context(&messages))?;
        files.insert(HELPER_FILE, helper)?;

        tracing::info!(backend = self.name(), files = files.len(), "generated TypeScript");
        Ok(files)
    }
}
