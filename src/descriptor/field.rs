// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field descriptor.

use convert_case::{Case, Casing};
use serde_json::Value;

use super::{
    OptionMap, bool_value, credentials_value, map_value, optional_string, string_list,
    string_value
};
use crate::{
    error::Result,
    guesser::{DbType, SortType}
};

/// One resolved column of an admin screen.
///
/// Created once per builder and field name, then cached by the builder. The
/// only mutation after construction is the single pass of user overrides.
///
/// # Recognised Overrides
///
/// | Key | Effect |
/// |-----|--------|
/// | `label`, `help` | display texts |
/// | `groups` | column groups (list or single name) |
/// | `sortable`, `filterable` | list behaviour flags |
/// | `credentials` | access expression for the column |
/// | `dbType` | storage tag, re-derives the sort category |
/// | `formType`, `filterType` | widget names |
/// | `formOptions`, `filterOptions` | whole option bags |
/// | `primaryKey` | string/null: linked primary key, bool: key flag |
///
/// Anything else is stored verbatim in [`FieldDescriptor::properties`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name:           String,
    db_type:        DbType,
    sort_type:      SortType,
    form_type:      String,
    filter_type:    String,
    form_options:   OptionMap,
    filter_options: OptionMap,
    primary_key:    Option<String>,
    is_primary_key: bool,
    label:          String,
    help:           Option<String>,
    groups:         Vec<String>,
    sortable:       bool,
    filterable:     bool,
    credentials:    Option<String>,
    properties:     OptionMap
}

impl FieldDescriptor {
    /// Create a descriptor with empty option bags.
    pub fn new(
        name: impl Into<String>,
        db_type: DbType,
        form_type: impl Into<String>,
        filter_type: impl Into<String>
    ) -> Self {
        let name = name.into();
        Self {
            label: humanize(&name),
            sort_type: SortType::of(&db_type),
            name,
            db_type,
            form_type: form_type.into(),
            filter_type: filter_type.into(),
            form_options: OptionMap::new(),
            filter_options: OptionMap::new(),
            primary_key: None,
            is_primary_key: false,
            help: None,
            groups: Vec::new(),
            sortable: true,
            filterable: true,
            credentials: None,
            properties: OptionMap::new()
        }
    }

    /// Canonical field name (possibly a dotted path).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage tag.
    #[must_use]
    pub fn db_type(&self) -> &DbType {
        &self.db_type
    }

    /// Sort category derived from the storage tag.
    #[must_use]
    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    /// Form widget name.
    #[must_use]
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    /// Filter widget name.
    #[must_use]
    pub fn filter_type(&self) -> &str {
        &self.filter_type
    }

    /// Options of the form widget.
    #[must_use]
    pub fn form_options(&self) -> &OptionMap {
        &self.form_options
    }

    /// Options of the filter widget.
    #[must_use]
    pub fn filter_options(&self) -> &OptionMap {
        &self.filter_options
    }

    /// Primary key of the related class, for relation fields.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Whether the field itself is the model's primary key.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Help text.
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Column groups this field belongs to.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Whether the list can sort on this field.
    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether the list can filter on this field.
    #[must_use]
    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Access expression required to see the field.
    #[must_use]
    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    /// Unrecognised overrides, in declaration order.
    #[must_use]
    pub fn properties(&self) -> &OptionMap {
        &self.properties
    }

    pub(crate) fn set_form_options(&mut self, options: OptionMap) {
        self.form_options = options;
    }

    pub(crate) fn set_filter_options(&mut self, options: OptionMap) {
        self.filter_options = options;
    }

    pub(crate) fn set_primary_key(&mut self, primary_key: Option<String>) {
        self.primary_key = primary_key;
    }

    pub(crate) fn set_is_primary_key(&mut self, is_primary_key: bool) {
        self.is_primary_key = is_primary_key;
    }

    /// Apply one user override.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidOption`] when a recognised key has
    /// a value of the wrong shape.
    pub fn set_property(&mut self, option: &str, value: &Value) -> Result<()> {
        let owner = self.name.as_str();
        match option {
            "label" => self.label = string_value(owner, option, value)?,
            "help" => self.help = optional_string(owner, option, value)?,
            "groups" => self.groups = string_list(owner, option, value)?,
            "sortable" => self.sortable = bool_value(owner, option, value)?,
            "filterable" => self.filterable = bool_value(owner, option, value)?,
            "credentials" => self.credentials = credentials_value(value),
            "dbType" => {
                self.db_type = DbType::parse(&string_value(owner, option, value)?);
                self.sort_type = SortType::of(&self.db_type);
            }
            "formType" => self.form_type = string_value(owner, option, value)?,
            "filterType" => self.filter_type = string_value(owner, option, value)?,
            "formOptions" => self.form_options = map_value(owner, option, value)?,
            "filterOptions" => self.filter_options = map_value(owner, option, value)?,
            "primaryKey" => match value {
                Value::Bool(flag) => self.is_primary_key = *flag,
                other => self.primary_key = optional_string(owner, option, other)?
            },
            _ => {
                self.properties.insert(option.to_owned(), value.clone());
            }
        }
        Ok(())
    }
}

fn humanize(name: &str) -> String {
    name.replace('.', "_").to_case(Case::Sentence)
}
