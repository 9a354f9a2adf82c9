#![allow(non_snake_case)]

use super::*;

#[test]
fn MethodView___derived_attributes() {
    let method = Method::new("sayHello", "HelloRequest", "HelloResponse");

    let view = MethodView::new(&method, "HelloService");

    assert_eq!(view.title(), "SayHello");
    assert_eq!(view.path(), "/HelloService.sayHello");
    assert_eq!(view.service_type(), "POST");
    assert_eq!(view.error_type(), "");
}

#[test]
fn MethodView___reads_method_options() {
    let method = Method::new("Get", "Req", "Resp")
        .with_option("service_method", "GET")
        .with_option("error", "GetError");

    let view = MethodView::new(&method, "Svc");

    assert_eq!(view.service_type(), "GET");
    assert_eq!(view.error_type(), "GetError");
}

#[test]
fn MethodView___serializes_base_and_derived_fields() {
    let method = Method::new("ping", "Ping", "Pong");
    let view = MethodView::new(&method, "Svc");

    let json = serde_json::to_value(view).unwrap();

    assert_eq!(json["name"], "ping");
    assert_eq!(json["input_type"], "Ping");
    assert_eq!(json["title"], "Ping");
    assert_eq!(json["path"], "/Svc.ping");
    assert_eq!(json["service_type"], "POST");
    assert_eq!(json["options"], serde_json::json!({}));
}

#[test]
fn MethodView___all___keeps_declaration_order() {
    let methods = vec![Method::new("b", "X", "Y"), Method::new("a", "X", "Y")];

    let views = MethodView::all(&methods, "Svc");

    let names: Vec<_> = views.iter().map(|v| v.method().name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}
