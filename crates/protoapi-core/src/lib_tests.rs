#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn LogLevel___ordering___trace_less_than_debug() {
    assert!(LogLevel::Trace < LogLevel::Debug);
}

#[test]
fn LogLevel___ordering___error_less_than_off() {
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case("trace", LogLevel::Trace)]
#[test_case("DEBUG", LogLevel::Debug)]
#[test_case("info", LogLevel::Info)]
#[test_case("warning", LogLevel::Warn)]
#[test_case("error", LogLevel::Error)]
#[test_case("off", LogLevel::Off)]
fn LogLevel___from_str___parses_known_names(input: &str, expected: LogLevel) {
    let level: LogLevel = input.parse().unwrap();

    assert_eq!(level, expected);
}

#[test]
fn LogLevel___from_str___rejects_unknown_name() {
    let result = "verbose".parse::<LogLevel>();

    assert!(matches!(result, Err(GenerateError::Config(_))));
}

#[test]
fn LogLevel___display___is_uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
    assert_eq!(LogLevel::Off.to_string(), "OFF");
}
