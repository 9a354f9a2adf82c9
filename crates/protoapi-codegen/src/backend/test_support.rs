//! Shared schema fixtures for backend tests.

use super::{Backend, GenerateInput};
use crate::output::OutputFiles;
use protoapi_assets::AssetStore;
use protoapi_core::{
    EnumData, FieldLabel, GenerateResult, MessageData, MessageField, Method, SchemaRequest,
    ServiceData,
};

/// `HelloService` in `com.example` with a common error union and an enum.
pub(crate) fn hello_request() -> SchemaRequest {
    let service = ServiceData::new(
        "HelloService",
        vec![
            Method::new("sayHello", "HelloRequest", "HelloResponse"),
            Method::new("getGreeting", "HelloRequest", "HelloResponse")
                .with_option("service_method", "GET")
                .with_option("error", "AuthError"),
        ],
    )
    .with_option("common_error", "CommonError");

    SchemaRequest {
        application_name: "hello".to_string(),
        package_name: "com.example".to_string(),
        services: vec![service],
        messages: vec![
            MessageData::new(
                "HelloRequest",
                vec![
                    MessageField::new("name", "string"),
                    MessageField::new("tags", "string").with_label(FieldLabel::Repeated),
                    MessageField::new("mood", "Mood"),
                ],
            )
            .in_package("com.example"),
            MessageData::new(
                "HelloResponse",
                vec![
                    MessageField::new("greeting", "string"),
                    MessageField::new("sender", ".com.example.HelloRequest"),
                ],
            )
            .in_package("com.example"),
            MessageData::new(
                "CommonError",
                vec![MessageField::new("auth", ".com.example.AuthError")],
            )
            .in_package("com.example"),
            MessageData::new("AuthError", vec![MessageField::new("code", "int32")])
                .in_package("com.example"),
        ],
        enums: vec![EnumData::new("Mood", &[("HAPPY", 0), ("SAD", 1)])],
        ..SchemaRequest::default()
    }
}

/// Same schema without any service.
pub(crate) fn serviceless_request() -> SchemaRequest {
    SchemaRequest {
        services: vec![],
        ..hello_request()
    }
}

/// Initialize `backend` from the embedded templates and run it.
pub(crate) fn run(backend: &mut dyn Backend, request: &SchemaRequest) -> GenerateResult<OutputFiles> {
    backend.init(request, &AssetStore::embedded())?;
    backend.generate(&GenerateInput::from(request))
}

pub(crate) fn filenames(files: &OutputFiles) -> Vec<&str> {
    files.filenames().collect()
}
