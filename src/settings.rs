// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide admin settings.
//!
//! These are the global defaults every generator shares: whether `required`
//! is guessed from NOT NULL constraints, the db type to widget mappings for
//! forms and filters, and assets added to every screen.
//!
//! # Example
//!
//! ```yaml
//! guess_required: true
//! default_required: false
//! form_types:
//!   VARCHAR: text
//!   model: entity
//! stylesheets:
//!   - css/admin.css
//! ```
//!
//! Mapping keys written in upper case name a column type constant; any other
//! key is used literally. A `form_types` or `filter_types` key replaces the
//! whole stock mapping.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Global defaults provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Guess `required` from the NOT NULL constraint.
    pub guess_required: bool,

    /// `required` value used when guessing is disabled.
    pub default_required: bool,

    /// Db type to form widget mapping.
    pub form_types: IndexMap<String, String>,

    /// Db type to filter widget mapping.
    pub filter_types: IndexMap<String, String>,

    /// Stylesheets added to every builder.
    pub stylesheets: Vec<Value>,

    /// Javascripts added to every builder.
    pub javascripts: Vec<Value>,

    /// Base template every admin screen extends.
    pub base_admin_template: String
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            guess_required:      true,
            default_required:    true,
            form_types:          default_form_types(),
            filter_types:        default_filter_types(),
            stylesheets:         Vec::new(),
            javascripts:         Vec::new(),
            base_admin_template: String::from("admin/base.html")
        }
    }
}

impl AdminSettings {
    /// Parse settings from YAML, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::Yaml`] on malformed input.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

const COMMON_TYPES: [(&str, &str); 16] = [
    ("TIMESTAMP", "datetime"),
    ("BU_TIMESTAMP", "datetime"),
    ("DATE", "date"),
    ("BU_DATE", "date"),
    ("TIME", "time"),
    ("FLOAT", "number"),
    ("REAL", "number"),
    ("DOUBLE", "number"),
    ("DECIMAL", "number"),
    ("TINYINT", "integer"),
    ("SMALLINT", "integer"),
    ("INTEGER", "integer"),
    ("BIGINT", "integer"),
    ("NUMERIC", "integer"),
    ("CHAR", "text"),
    ("VARCHAR", "text")
];

/// Stock form widget mapping.
#[must_use]
pub fn default_form_types() -> IndexMap<String, String> {
    let specific = [
        ("LONGVARCHAR", "textarea"),
        ("CLOB", "textarea"),
        ("CLOB_EMU", "textarea"),
        ("BLOB", "file"),
        ("BOOLEAN", "checkbox"),
        ("BOOLEAN_EMU", "checkbox"),
        ("ENUM", "choice"),
        ("PHP_ARRAY", "collection"),
        ("model", "model"),
        ("collection", "collection")
    ];
    to_map(COMMON_TYPES.iter().chain(specific.iter()))
}

/// Stock filter widget mapping.
#[must_use]
pub fn default_filter_types() -> IndexMap<String, String> {
    let specific = [
        ("LONGVARCHAR", "text"),
        ("CLOB", "text"),
        ("CLOB_EMU", "text"),
        ("BOOLEAN", "choice"),
        ("BOOLEAN_EMU", "choice"),
        ("ENUM", "choice"),
        ("model", "model"),
        ("collection", "model")
    ];
    to_map(COMMON_TYPES.iter().chain(specific.iter()))
}

fn to_map<'a>(pairs: impl Iterator<Item = &'a (&'a str, &'a str)>) -> IndexMap<String, String> {
    pairs
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}
