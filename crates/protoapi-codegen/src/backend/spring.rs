//! Java Spring service skeleton.
//!
//! Files land in the directory of the schema package, one class per file
//! as Java requires: `<Service>Base.java` with the request mappings, then
//! one file per message and per enum.

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

const SERVICE_TEMPLATE: &str = "spring/service.java.j2";
const STRUCT_TEMPLATE: &str = "spring/struct.java.j2";
const ENUM_TEMPLATE: &str = "spring/enum.java.j2";

struct SpringTemplates {
    engine: TemplateEngine,
    service: CompiledTemplate,
    message: CompiledTemplate,
    enumeration: CompiledTemplate,
}

/// Java Spring backend.
#[derive(Default)]
pub struct SpringBackend {
    templates: Option<SpringTemplates>,
}

impl SpringBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Serialize)]
struct ServiceContext<'a> {
    package: &'a str,
    name: &'a str,
    methods: Vec<MethodView<'a>>,
    r#gen: &'a CommonErrorInfo,
}

#[derive(Serialize)]
struct MessageContext<'a> {
    package: &'a str,
    message: &'a MessageData,
    uses_list: bool,
    r#gen: &'a CommonErrorInfo,
}

#[derive(Serialize)]
struct EnumContext<'a> {
    package: &'a str,
    enum_data: &'a EnumData,
}

/// Relative path of `class` inside the package directory.
fn class_file(dir: &str, class: &str) -> String {
    if dir.is_empty() {
        format!("{class}.java")
    } else {
        format!("{dir}/{class}.java")
    }
}

impl Backend for SpringBackend {
    fn name(&self) -> &str {
        "spring"
    }

    fn init(&mut self, request: &SchemaRequest, assets: &AssetStore) -> GenerateResult<()> {
        tracing::debug!(backend = self.name(), application = %request.application_name, "loading templates");
        let mut engine = TemplateEngine::new(TypeTable::JAVA);
        let service = compile_asset(&mut engine, assets, SERVICE_TEMPLATE)?;
        let message = compile_asset(&mut engine, assets, STRUCT_TEMPLATE)?;
        let enumeration = compile_asset(&mut engine, assets, ENUM_TEMPLATE)?;

        self.templates = Some(SpringTemplates {
            engine,
            service,
            message,
            enumeration,
        });
        Ok(())
    }

    fn generate(&self, input: &GenerateInput<'_>) -> GenerateResult<OutputFiles> {
        let templates = self
            .templates
            .as_ref()
            .ok_or_else(|| not_initialized(self.name()))?;
        let service = input.service()?;
        let package = input.package_name;
        let dir = naming::package_dir(package);

        let messages = flatten_all(input.messages);
        let common = CommonErrorInfo::new(
            service.and_then(ServiceData::common_error),
            &messages,
            &TypeTable::JAVA,
        );

        let mut files = OutputFiles::new();
        if let Some(service) = service {
            let context = ServiceContext {
                package,
                name: &service.name,
                methods: MethodView::all(&service.methods, &service.name),
                r#gen: &common,
            };
            let text = templates.engine.render(&templates.service, context)?;
            files.insert(class_file(&dir, &format!("{}Base", service.name)), text)?;
        }

        for message in &messages {
            let context = MessageContext {
                package,
                message,
                uses_list: message.fields.iter().any(|f| f.label.is_repeated()),
                r#gen: &common,
            };
            let text = templates.engine.render(&templates.message, context)?;
            files.insert(class_file(&dir, &message.name), text)?;
        }

        for enum_data in input.enums {
            let context = EnumContext { package, enum_data };
            let text = templates.engine.render(&templates.enumeration, context)?;
            files.insert(class_file(&dir, &enum_data.name), text)?;
        }

        tracing::info!(backend = self.name(), files = files.len(), "generated Java");
        Ok(files)
    }
}
