//! Local package flattening.
//!
//! Field types that reference a message in the message's own package arrive
//! fully qualified (`.com.example.Person` or `com.example.Person`). Templates
//! expect the bare name, so the local prefix is stripped before rendering.

use protoapi_core::{MessageData, MessageField};
use std::sync::Arc;

/// `data_type` with the `package` prefix removed, if it carries one.
pub fn strip_local_package<'a>(data_type: &'a str, package: &str) -> &'a str {
    if package.is_empty() {
        return data_type;
    }
    let unqualified = data_type.strip_prefix('.').unwrap_or(data_type);
    unqualified
        .strip_prefix(package)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|name| !name.is_empty())
        .unwrap_or(data_type)
}

/// Message with local field types reduced to bare names.
///
/// Returns the same [`Arc`] when no field changes.
pub fn flatten_local_package(message: &Arc<MessageData>) -> Arc<MessageData> {
    let changed = message
        .fields
        .iter()
        .any(|f| strip_local_package(&f.data_type, &message.package) != f.data_type);
    if !changed {
        return Arc::clone(message);
    }

    let fields: Vec<MessageField> = message
        .fields
        .iter()
        .map(|f| f.with_data_type(strip_local_package(&f.data_type, &message.package)))
        .collect();
    Arc::new(message.with_fields(fields))
}

/// Wrap and flatten a whole message set, preserving order.
pub fn flatten_all(messages: &[MessageData]) -> Vec<Arc<MessageData>> {
    messages
        .iter()
        .map(|m| flatten_local_package(&Arc::new(m.clone())))
        .collect()
}
