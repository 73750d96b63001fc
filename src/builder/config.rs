// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder variables.
//!
//! A builder sees the generator's global `params` overlaid by its own
//! `params`. A top-level key set by the builder replaces the global one,
//! except `fields`, which merges per field and then per option:
//!
//! ```text
//! global   fields: { title: { label: Title, help: Short } }
//! builder  fields: { title: { label: Headline }, body: { formType: editor } }
//! merged   fields: { title: { label: Headline, help: Short }, body: { formType: editor } }
//! ```

use serde_json::Value;

use crate::{
    descriptor::OptionMap,
    error::{AdminError, Result}
};

/// Merged key-value variables of one builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variables {
    params: OptionMap
}

impl Variables {
    /// Wrap an already merged parameter map.
    #[must_use]
    pub fn new(params: OptionMap) -> Self {
        Self { params }
    }

    /// Overlay builder parameters on global ones.
    #[must_use]
    pub fn merged(global: &OptionMap, local: &OptionMap) -> Self {
        let mut params = global.clone();
        for (key, value) in local {
            if key == "fields"
                && let (Some(Value::Object(base)), Value::Object(overlay)) = (params.get_mut(key), value)
            {
                merge_fields(base, overlay);
                continue;
            }
            params.insert(key.clone(), value.clone());
        }
        Self { params }
    }

    /// All variables.
    #[must_use]
    pub fn params(&self) -> &OptionMap {
        &self.params
    }

    /// Value of a variable; `null` counts as unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key).filter(|value| !value.is_null())
    }

    /// Value of a variable or `null`.
    #[must_use]
    pub fn value(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&Value::Null)
    }

    /// Whether a variable is set and not `null`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// String variable; unset is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for non-string values.
    pub fn string(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            None => Ok(""),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(_) => Err(AdminError::config(key, "expected a string"))
        }
    }

    /// Required string variable.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] when unset, empty or not
    /// a string.
    pub fn required_string(&self, key: &str) -> Result<&str> {
        match self.string(key)? {
            "" => Err(AdminError::config(key, "is required")),
            text => Ok(text)
        }
    }

    /// List variable; unset is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for non-list values.
    pub fn list(&self, key: &str) -> Result<&[Value]> {
        match self.get(key) {
            None => Ok(Default::default()),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(AdminError::config(key, "expected a list"))
        }
    }

    /// Override options of one field (`fields.<name>`).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] when `fields` or the
    /// field entry is not a mapping.
    pub fn field_options(&self, name: &str) -> Result<Option<&OptionMap>> {
        let fields = match self.get("fields") {
            None => return Ok(None),
            Some(Value::Object(fields)) => fields,
            Some(_) => return Err(AdminError::config("fields", "expected a mapping"))
        };
        match fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(options)) => Ok(Some(options)),
            Some(_) => Err(AdminError::config(format!("fields.{name}"), "expected a mapping"))
        }
    }

    /// Configured actions of a section, in declaration order.
    ///
    /// The section is either a mapping `name -> options` or a list of names.
    /// Options that are `null` (or a bare name) are reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for other shapes.
    pub fn action_entries(&self, section: &str) -> Result<Vec<(String, Option<OptionMap>)>> {
        match self.get(section) {
            None => Ok(Vec::new()),
            Some(Value::Array(names)) => names
                .iter()
                .map(|name| {
                    name.as_str()
                        .map(|name| (name.to_owned(), None))
                        .ok_or_else(|| AdminError::config(section, format!("expected an action name, got {name}")))
                })
                .collect(),
            Some(Value::Object(actions)) => actions
                .iter()
                .map(|(name, options)| {
                    action_options(section, name, options).map(|options| (name.clone(), options))
                })
                .collect(),
            Some(_) => Err(AdminError::config(section, "expected a mapping or a list of actions"))
        }
    }

    /// Options of one action of a section, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for a malformed entry.
    pub fn action_options(&self, section: &str, name: &str) -> Result<Option<OptionMap>> {
        match self.get(section) {
            Some(Value::Object(actions)) => match actions.get(name) {
                Some(options) => action_options(section, name, options),
                None => Ok(None)
            },
            _ => Ok(None)
        }
    }
}

fn action_options(section: &str, name: &str, options: &Value) -> Result<Option<OptionMap>> {
    match options {
        Value::Null => Ok(None),
        Value::Object(options) => Ok(Some(options.clone())),
        _ => Err(AdminError::config(format!("{section}.{name}"), "expected a mapping"))
    }
}

fn merge_fields(base: &mut OptionMap, overlay: &OptionMap) {
    for (field, options) in overlay {
        match (base.get_mut(field), options) {
            (_, Value::Null) => {}
            (Some(Value::Object(current)), Value::Object(options)) => {
                current.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            _ => {
                base.insert(field.clone(), options.clone());
            }
        }
    }
}
