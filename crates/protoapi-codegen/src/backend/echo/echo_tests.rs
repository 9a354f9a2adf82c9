#![allow(non_snake_case)]

use super::*;
use crate::backend::test_support::{filenames, hello_request, run, serviceless_request};

#[test]
fn go_package___uses_last_package_segment() {
    assert_eq!(go_package("com.example.api", "Svc"), "api");
    assert_eq!(go_package("", "HelloService"), "helloservice");
}

#[test]
fn EchoBackend___generate___emits_service_and_objs() {
    let files = run(&mut EchoBackend::new(), &hello_request()).unwrap();

    assert_eq!(filenames(&files), vec!["HelloService.go", "HelloServiceObjs.go"]);
    assert!(files.get("HelloService.go").unwrap().contains("package example\n"));
    assert!(files.get("HelloServiceObjs.go").unwrap().contains("package example\n"));
}

#[test]
fn EchoBackend___service___interface_uses_titles_and_error_types() {
    let files = run(&mut EchoBackend::new(), &hello_request()).unwrap();
    let service = files.get("HelloService.go").unwrap();

    assert!(service.contains("\tSayHello(*HelloRequest) (*HelloResponse)\n"));
    assert!(service.contains("\tGetGreeting(*HelloRequest) (*HelloResponse, *AuthError)\n"));
}

#[test]
fn EchoBackend___service___routes_follow_service_method() {
    let files = run(&mut EchoBackend::new(), &hello_request()).unwrap();
    let service = files.get("HelloService.go").unwrap();

    assert!(service.contains("e.POST(\"/HelloService.sayHello\", _sayHello_Handler(srv))"));
    assert!(!service.contains("e.GET(\"/HelloService.sayHello\""));
    assert!(service.contains("e.GET(\"/HelloService.getGreeting\", _getGreeting_Handler(srv))"));
    assert!(!service.contains("e.POST(\"/HelloService.getGreeting\""));
}

#[test]
fn EchoBackend___objs___maps_field_types() {
    let files = run(&mut EchoBackend::new(), &hello_request()).unwrap();
    let objs = files.get("HelloServiceObjs.go").unwrap();

    assert!(objs.contains("\tName string `json:\"name\" form:\"name\" query:\"name\"`"));
    assert!(objs.contains("\tTags []string `json:\"tags\""));
    assert!(objs.contains("\tMood Mood `json:\"mood\""));
    assert!(objs.contains("\tSender *HelloRequest `json:\"sender\""));
    assert!(objs.contains("\tCode int32 `json:\"code\""));
}

#[test]
fn EchoBackend___objs___renders_enum_constants() {
    let files = run(&mut EchoBackend::new(), &hello_request()).unwrap();
    let objs = files.get("HelloServiceObjs.go").unwrap();

    assert!(objs.contains("type Mood int\n"));
    assert!(objs.contains("\tSAD Mood = 1\n"));
}

#[test]
fn EchoBackend___no_service___emits_objs_only() {
    let files = run(&mut EchoBackend::new(), &serviceless_request()).unwrap();

    assert_eq!(filenames(&files), vec!["helloObjs.go"]);
}
