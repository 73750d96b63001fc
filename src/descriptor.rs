// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved value objects handed to the rendering layer.
//!
//! - [`FieldDescriptor`] — one resolved column of a screen
//! - [`ActionDescriptor`] — one list, object or batch action
//!
//! Both accept user overrides through `set_property`, which maps recognised
//! keys onto typed fields and keeps everything else in an ordered
//! [`OptionMap`].

mod action;
mod field;

use serde_json::Value;

pub use self::{
    action::{ActionDescriptor, ActionScope},
    field::FieldDescriptor
};
use crate::error::{AdminError, Result};

/// Ordered option bag (`name → value`).
pub type OptionMap = serde_json::Map<String, Value>;

/// Read a string override.
pub(crate) fn string_value(owner: &str, option: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| AdminError::option(owner, option, "expected a string"))
}

/// Read a nullable string override.
pub(crate) fn optional_string(owner: &str, option: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => string_value(owner, option, other).map(Some)
    }
}

/// Read a boolean override.
pub(crate) fn bool_value(owner: &str, option: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| AdminError::option(owner, option, "expected a boolean"))
}

/// Read an option map override; `null` is an empty map.
pub(crate) fn map_value(owner: &str, option: &str, value: &Value) -> Result<OptionMap> {
    match value {
        Value::Null => Ok(OptionMap::new()),
        Value::Object(map) => Ok(map.clone()),
        _ => Err(AdminError::option(owner, option, "expected a mapping"))
    }
}

/// Read a list of names; a bare string is a one-element list.
pub(crate) fn string_list(owner: &str, option: &str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(single) => Ok(vec![single.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| string_value(owner, option, item))
            .collect(),
        _ => Err(AdminError::option(owner, option, "expected a list of strings"))
    }
}

/// Read a credentials expression.
///
/// Strings are kept verbatim, `null` clears the requirement and any other
/// shape is kept as its JSON rendering.
pub(crate) fn credentials_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(expr) => Some(expr.clone()),
        other => Some(other.to_string())
    }
}
