//! Tagged-union emulation for targets without sum types.
//!
//! A service may name a "common error" message through the `common_error`
//! option. Each field of that message declares one member of an error
//! union. Every message whose name equals a member type (after translation)
//! gets a derived copy with a trailing `kind` string field the target code
//! can switch on.
//!
//! The transform never mutates its input. Messages that are not members are
//! returned as the same [`Arc`], members as new ones.

use crate::types::TypeTable;
use protoapi_core::{FieldLabel, MessageData, MessageField, OptionMap};
use serde::Serialize;
use std::sync::Arc;

/// Name and key of the injected discriminant field.
pub const DISCRIMINANT_FIELD: &str = "kind";

/// Declared type of the injected discriminant field.
pub const DISCRIMINANT_TYPE: &str = "string";

/// The synthetic discriminant field appended to union members.
pub fn discriminant_field() -> MessageField {
    MessageField {
        name: DISCRIMINANT_FIELD.to_string(),
        key: DISCRIMINANT_FIELD.to_string(),
        data_type: DISCRIMINANT_TYPE.to_string(),
        label: FieldLabel::Optional,
        comment: String::new(),
        options: OptionMap::new(),
    }
}

/// Fields of the common-error message named `common_error`, if it resolves.
pub fn common_error_fields<'a>(
    messages: &'a [Arc<MessageData>],
    common_error: &str,
) -> Option<&'a [MessageField]> {
    messages
        .iter()
        .find(|m| m.name == common_error)
        .map(|m| m.fields.as_slice())
}

/// Translated member type names of the union rooted at `common_error`.
///
/// Empty when the option is absent or names no known message.
pub fn union_members(
    messages: &[Arc<MessageData>],
    common_error: Option<&str>,
    types: &TypeTable,
) -> Vec<String> {
    common_error
        .and_then(|name| common_error_fields(messages, name))
        .map(|fields| {
            fields
                .iter()
                .map(|f| types.translate(&f.data_type).to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Append a discriminant field to every union member in `messages`.
///
/// Output order and length match the input. With no resolvable common
/// error the result holds exactly the input elements.
pub fn inject_discriminant(
    messages: &[Arc<MessageData>],
    common_error: Option<&str>,
    types: &TypeTable,
) -> Vec<Arc<MessageData>> {
    let members = union_members(messages, common_error, types);
    if members.is_empty() {
        if let Some(name) = common_error {
            tracing::debug!(common_error = name, "common error unresolved, union emulation skipped");
        }
        return messages.to_vec();
    }

    messages
        .iter()
        .map(|message| {
            let translated = types.translate(&message.name);
            if members.iter().any(|m| m == translated) {
                tracing::debug!(message = %message.name, "injecting union discriminant");
                Arc::new(message.with_appended_field(discriminant_field()))
            } else {
                Arc::clone(message)
            }
        })
        .collect()
}

/// Common-error helpers exposed to every template as `gen`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommonErrorInfo {
    /// Whether the service declares a `common_error` option at all.
    pub has_common_error: bool,

    /// Option value, empty when absent.
    pub common_error: String,

    /// Union suffix such as `" | AuthError | BindError"`.
    pub common_error_sub_types: String,
}

impl CommonErrorInfo {
    pub fn new(
        common_error: Option<&str>,
        messages: &[Arc<MessageData>],
        types: &TypeTable,
    ) -> Self {
        let common_error_sub_types = union_members(messages, common_error, types)
            .iter()
            .map(|member| format!(" | {member}"))
            .collect();

        Self {
            has_common_error: common_error.is_some(),
            common_error: common_error.unwrap_or_default().to_string(),
            common_error_sub_types,
        }
    }
}
