// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Display layout resolution.
//!
//! The `display` variable of a builder comes in two shapes, told apart once
//! at parse time:
//!
//! ```yaml
//! # flat list
//! display: [title, published, author]
//!
//! # fieldsets: rows (lists) and loose fields (scalars) may be mixed
//! display:
//!   General:
//!     - [title, slug]
//!     - published
//!   Meta: [author]
//! ```
//!
//! # Resolution Order
//!
//! The first non-empty source wins:
//!
//! 1. `display`
//! 2. `tabs`, unioned in declaration order
//! 3. every field of the model, in catalog order

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::error::{AdminError, Result};

/// Fieldset name used when the layout is a flat list.
pub const DEFAULT_FIELDSET: &str = "NONE";

/// Entry of a fieldset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldsetEntry {
    /// Several fields rendered on one row.
    Row(Vec<String>),
    /// A loose field, rendered on its own row.
    Field(String)
}

impl FieldsetEntry {
    /// Fields of the entry as a row.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        match self {
            Self::Row(fields) => fields,
            Self::Field(field) => std::slice::from_ref(field)
        }
    }

    /// Row key of a loose field: the field's own name. Rows have none.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Row(_) => None,
            Self::Field(field) => Some(field)
        }
    }
}

/// Parsed display configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Ordered field names.
    FieldList(Vec<String>),
    /// Fieldset name to rows and loose fields.
    Fieldsets(IndexMap<String, Vec<FieldsetEntry>>)
}

impl Layout {
    /// Parse a display value.
    ///
    /// `null`, an empty list and an empty mapping all mean "not configured".
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for entries that are
    /// neither field names nor rows of field names.
    pub fn parse(key: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) if items.is_empty() => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            Value::Array(items) => names(key, items).map(|list| Some(Self::FieldList(list))),
            Value::Object(map) => {
                let mut fieldsets = IndexMap::new();
                for (name, entries) in map {
                    fieldsets.insert(name.clone(), fieldset_entries(key, entries)?);
                }
                Ok(Some(Self::Fieldsets(fieldsets)))
            }
            _ => Err(AdminError::config(key, "expected a list of fields or a fieldset mapping"))
        }
    }

    /// Parse a `tabs` value and merge its tabs into a single layout.
    ///
    /// Tabs are either a list of layouts or a mapping of tab name to layout.
    /// When every tab is a flat list the lists are concatenated; otherwise
    /// the result is a fieldset mapping in which a flat tab becomes a
    /// fieldset named after the tab and fieldsets sharing a name are joined.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for malformed tabs.
    pub fn parse_tabs(key: &str, value: &Value) -> Result<Option<Self>> {
        let mut tabs = Vec::new();
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(tab) = Self::parse(key, item)? {
                        tabs.push((None, tab));
                    }
                }
            }
            Value::Object(map) => {
                for (name, item) in map {
                    if let Some(tab) = Self::parse(key, item)? {
                        tabs.push((Some(name.as_str()), tab));
                    }
                }
            }
            _ => return Err(AdminError::config(key, "expected a list or mapping of tabs"))
        }
        Ok(merge_tabs(tabs))
    }

    /// Resolve the layout of a builder.
    ///
    /// `all_fields` is only called when neither `display` nor `tabs` yields
    /// anything.
    ///
    /// # Errors
    ///
    /// Propagates parse errors and errors from `all_fields`.
    pub fn resolve<F>(display: &Value, tabs: &Value, all_fields: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Vec<String>>
    {
        if let Some(layout) = Self::parse("display", display)? {
            return Ok(layout);
        }
        if let Some(layout) = Self::parse_tabs("tabs", tabs)? {
            return Ok(layout);
        }
        all_fields().map(Self::FieldList)
    }

    /// Flat field order, first occurrence of each name kept.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        let names: IndexSet<&String> = match self {
            Self::FieldList(list) => list.iter().collect(),
            Self::Fieldsets(fieldsets) => fieldsets
                .values()
                .flatten()
                .flat_map(FieldsetEntry::fields)
                .collect()
        };
        names.into_iter().cloned().collect()
    }

    /// Fieldset to rows tree; a flat list is one [`DEFAULT_FIELDSET`] with
    /// one field per row.
    #[must_use]
    pub fn fieldsets(&self) -> IndexMap<String, Vec<Vec<String>>> {
        match self {
            Self::FieldList(list) => IndexMap::from([(
                DEFAULT_FIELDSET.to_owned(),
                list.iter().map(|field| vec![field.clone()]).collect()
            )]),
            Self::Fieldsets(fieldsets) => fieldsets
                .iter()
                .map(|(name, entries)| {
                    let rows = entries.iter().map(|entry| entry.fields().to_vec()).collect();
                    (name.clone(), rows)
                })
                .collect()
        }
    }

    /// Fieldset to entries tree; loose fields stay [`FieldsetEntry::Field`]
    /// so they can be keyed by name. A flat list is one [`DEFAULT_FIELDSET`]
    /// of loose fields.
    #[must_use]
    pub fn fieldset_entries(&self) -> IndexMap<String, Vec<FieldsetEntry>> {
        match self {
            Self::FieldList(list) => IndexMap::from([(
                DEFAULT_FIELDSET.to_owned(),
                list.iter().cloned().map(FieldsetEntry::Field).collect()
            )]),
            Self::Fieldsets(fieldsets) => fieldsets.clone()
        }
    }
}

fn names(key: &str, items: &[Value]) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| AdminError::config(key, format!("expected a field name, got {item}")))
        })
        .collect()
}

fn fieldset_entries(key: &str, value: &Value) -> Result<Vec<FieldsetEntry>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(field) => Ok(vec![FieldsetEntry::Field(field.clone())]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(field) => Ok(FieldsetEntry::Field(field.clone())),
                Value::Array(row) => names(key, row).map(FieldsetEntry::Row),
                other => Err(AdminError::config(
                    key,
                    format!("expected a field name or a row, got {other}")
                ))
            })
            .collect(),
        other => Err(AdminError::config(key, format!("expected fieldset rows, got {other}")))
    }
}

fn merge_tabs(tabs: Vec<(Option<&str>, Layout)>) -> Option<Layout> {
    if tabs.is_empty() {
        return None;
    }

    if tabs.iter().all(|(_, tab)| matches!(tab, Layout::FieldList(_))) {
        let fields = tabs
            .into_iter()
            .flat_map(|(_, tab)| match tab {
                Layout::FieldList(list) => list,
                Layout::Fieldsets(_) => Vec::new()
            })
            .collect();
        return Some(Layout::FieldList(fields));
    }

    let mut merged: IndexMap<String, Vec<FieldsetEntry>> = IndexMap::new();
    for (name, tab) in tabs {
        match tab {
            Layout::FieldList(list) => merged
                .entry(name.unwrap_or(DEFAULT_FIELDSET).to_owned())
                .or_default()
                .extend(list.into_iter().map(FieldsetEntry::Field)),
            Layout::Fieldsets(fieldsets) => {
                for (fieldset, entries) in fieldsets {
                    merged.entry(fieldset).or_default().extend(entries);
                }
            }
        }
    }
    Some(Layout::Fieldsets(merged))
}
