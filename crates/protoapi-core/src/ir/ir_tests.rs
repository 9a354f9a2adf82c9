#![allow(non_snake_case)]

use super::*;

fn person() -> MessageData {
    MessageData::new(
        "Person",
        vec![
            MessageField::new("name", "string"),
            MessageField::new("age", "int32"),
        ],
    )
    .in_package("com.example")
}

// OptionMap tests

#[test]
fn OptionMap___get___returns_none_for_missing_key() {
    let options = OptionMap::new();

    assert_eq!(options.get(OPTION_COMMON_ERROR), None);
    assert!(!options.contains(OPTION_COMMON_ERROR));
}

#[test]
fn OptionMap___insert___replaces_existing_value() {
    let mut options = OptionMap::new().with("a", "1");

    let previous = options.insert("a", "2");

    assert_eq!(previous.as_deref(), Some("1"));
    assert_eq!(options.get("a"), Some("2"));
    assert_eq!(options.len(), 1);
}

#[test]
fn OptionMap___from_iter___collects_pairs() {
    let options: OptionMap = [("x", "1"), ("y", "2")].into_iter().collect();

    assert_eq!(options.get("y"), Some("2"));
    assert_eq!(options.iter().count(), 2);
}

#[test]
fn OptionMap___serde___is_a_plain_json_object() {
    let options = OptionMap::new().with(OPTION_SERVICE_METHOD, "GET");

    let json = serde_json::to_string(&options).unwrap();

    assert_eq!(json, r#"{"service_method":"GET"}"#);
}

// FieldLabel tests

#[test]
fn FieldLabel___serializes_with_descriptor_names() {
    let json = serde_json::to_string(&FieldLabel::Repeated).unwrap();

    assert_eq!(json, r#""LABEL_REPEATED""#);
}

#[test]
fn FieldLabel___is_repeated___only_for_repeated() {
    assert!(FieldLabel::Repeated.is_repeated());
    assert!(!FieldLabel::Optional.is_repeated());
    assert!(!FieldLabel::Required.is_repeated());
}

// MessageData tests

#[test]
fn MessageData___with_appended_field___keeps_original_untouched() {
    let original = person();

    let derived = original.with_appended_field(MessageField::new("kind", "string"));

    assert_eq!(original.fields.len(), 2);
    assert_eq!(derived.fields.len(), 3);
    assert_eq!(derived.fields[2].name, "kind");
}

#[test]
fn MessageData___with_appended_field___preserves_order_and_metadata() {
    let original = person();

    let derived = original.with_appended_field(MessageField::new("kind", "string"));

    assert_eq!(derived.name, "Person");
    assert_eq!(derived.package, "com.example");
    assert_eq!(&derived.fields[..2], &original.fields[..]);
}

#[test]
fn MessageData___field___finds_by_name() {
    let message = person();

    assert_eq!(message.field("age").map(|f| f.data_type.as_str()), Some("int32"));
    assert!(message.field("missing").is_none());
}

#[test]
fn MessageField___with_data_type___copies_every_other_attribute() {
    let field = MessageField::new("tags", ".com.example.Tag")
        .with_label(FieldLabel::Repeated)
        .with_key("tagList")
        .with_comment("all tags");

    let copy = field.with_data_type("Tag");

    assert_eq!(copy.data_type, "Tag");
    assert_eq!(copy.key, "tagList");
    assert_eq!(copy.label, FieldLabel::Repeated);
    assert_eq!(copy.comment, "all tags");
}

// Method tests

#[test]
fn Method___service_method___defaults_to_post() {
    let method = Method::new("Hello", "HelloRequest", "HelloResponse");

    assert_eq!(method.service_method(), "POST");
}

#[test]
fn Method___service_method___reads_option() {
    let method = Method::new("Hello", "HelloRequest", "HelloResponse")
        .with_option(OPTION_SERVICE_METHOD, "GET");

    assert_eq!(method.service_method(), "GET");
}

#[test]
fn Method___error_type___defaults_to_empty() {
    let method = Method::new("Hello", "HelloRequest", "HelloResponse");

    assert_eq!(method.error_type(), "");
}

#[test]
fn Method___error_type___reads_option() {
    let method =
        Method::new("Hello", "HelloRequest", "HelloResponse").with_option(OPTION_ERROR, "HelloError");

    assert_eq!(method.error_type(), "HelloError");
}

// ServiceData tests

#[test]
fn ServiceData___common_error___absent_by_default() {
    let service = ServiceData::new("HelloService", vec![]);

    assert!(service.common_error().is_none());
}

#[test]
fn ServiceData___common_error___reads_option() {
    let service =
        ServiceData::new("HelloService", vec![]).with_option(OPTION_COMMON_ERROR, "CommonError");

    assert_eq!(service.common_error(), Some("CommonError"));
}

// SchemaRequest tests

#[test]
fn SchemaRequest___from_json___fills_defaults() {
    let json = r#"{
        "package_name": "com.example",
        "messages": [
            {"name": "Person", "fields": [
                {"name": "name", "key": "name", "data_type": "string"},
                {"name": "tags", "key": "tags", "data_type": "string", "label": "LABEL_REPEATED"}
            ]}
        ]
    }"#;

    let request = SchemaRequest::from_json(json.as_bytes()).unwrap();

    assert_eq!(request.package_name, "com.example");
    assert!(request.services.is_empty());
    assert_eq!(request.messages[0].fields[0].label, FieldLabel::Optional);
    assert_eq!(request.messages[0].fields[1].label, FieldLabel::Repeated);
    assert!(request.parameter.is_none());
}

#[test]
fn SchemaRequest___from_json___rejects_malformed_input() {
    let result = SchemaRequest::from_json(b"{ not json");

    assert!(result.is_err());
}

#[test]
fn EnumData___new___keeps_declaration_order() {
    let status = EnumData::new("Status", &[("OK", 0), ("FAILED", 2), ("UNKNOWN", 1)]);

    let names: Vec<_> = status.fields.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["OK", "FAILED", "UNKNOWN"]);
    assert_eq!(status.fields[1].value, 2);
}
