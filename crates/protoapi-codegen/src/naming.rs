//! Naming convention utilities for generated code.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `sayHello` | [`capitalize`] | `SayHello` |
//! | `com.example.api` | [`last_segment`] | `api` |
//! | `com.example.api` | [`package_dir`] | `com/example/api` |
//! | `com.example.api` | [`php_namespace`] | `Com\Example\Api` |

/// Capitalize the first letter of a string, leaving the rest as is.
///
/// # Examples
///
/// ```
/// use protoapi_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("sayHello"), "SayHello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Last `.`-separated segment of a package name.
///
/// ```
/// use protoapi_codegen::naming::last_segment;
///
/// assert_eq!(last_segment("com.example.api"), "api");
/// assert_eq!(last_segment("hello"), "hello");
/// ```
pub fn last_segment(package: &str) -> &str {
    package.rsplit('.').next().unwrap_or(package)
}

/// Directory path for a dotted package name, empty for an empty package.
pub fn package_dir(package: &str) -> String {
    package
        .split('.')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// PHP namespace for a dotted package name.
pub fn php_namespace(package: &str) -> String {
    package
        .split('.')
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("\\")
}
