// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Contextual widget option synthesis.
//!
//! # Form Options
//!
//! Rules are evaluated in order, the first match wins:
//!
//! | # | Condition | Options |
//! |---|-----------|---------|
//! | 1 | virtual db type | `{}` |
//! | 2 | boolean db type and `choice*`/`*choice` widget | yes/no choices + empty value |
//! | 3 | `model*`/`*model` widget on a relation | `{class, multiple: false}` |
//! | 4 | `collection*`/`*collection` widget | `{allow_add, allow_delete, by_reference}` |
//! | 5 | enum db type | `{required, choices}` |
//! | 6 | anything else | `{required}` |
//!
//! # Filter Options
//!
//! Filters are never required. Boolean and enum columns get their choices
//! regardless of widget; model and collection widgets reuse the form options
//! with `required: false` laid over them.

use serde_json::{Value, json};

use super::{DbType, FieldGuesser};
use crate::{
    descriptor::OptionMap,
    error::Result,
    schema::SchemaCatalog,
    translate::{BOOLEAN_NO, BOOLEAN_YES, BOOLEAN_YES_OR_NO, DOMAIN}
};

/// Widget name pattern, matched case-insensitively as prefix or suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPattern {
    /// `choice`
    Choice,
    /// `model`
    Model,
    /// `collection`
    Collection
}

impl WidgetPattern {
    const fn keyword(&self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::Model => "model",
            Self::Collection => "collection"
        }
    }

    /// Check if `widget` starts or ends with the pattern keyword.
    #[must_use]
    pub fn matches(&self, widget: &str) -> bool {
        let widget = widget.to_ascii_lowercase();
        widget.starts_with(self.keyword()) || widget.ends_with(self.keyword())
    }
}

impl<C: SchemaCatalog> FieldGuesser<C> {
    /// Options for the form widget of a field.
    ///
    /// `model` and `field_path` locate the field; dotted paths are resolved
    /// first so relation and column lookups happen on the leaf class.
    ///
    /// # Errors
    ///
    /// Propagates path resolution and catalog errors.
    pub fn form_options(
        &self,
        widget: &str,
        db_type: &DbType,
        model: &str,
        field_path: &str
    ) -> Result<OptionMap> {
        if db_type.is_virtual() {
            return Ok(OptionMap::new());
        }

        if db_type.is_boolean() && WidgetPattern::Choice.matches(widget) {
            return Ok(self.boolean_choices());
        }

        let leaf = self.resolve(model, field_path)?;

        if WidgetPattern::Model.matches(widget)
            && let Some(relation) = self.relation(&leaf.class, &leaf.field)?
        {
            return Ok(options([
                ("class", json!(relation.target_class())),
                ("multiple", json!(false))
            ]));
        }

        if WidgetPattern::Collection.matches(widget) {
            return Ok(options([
                ("allow_add", json!(true)),
                ("allow_delete", json!(true)),
                ("by_reference", json!(false))
            ]));
        }

        let required = self.is_required(&leaf.class, &leaf.field)?;

        if db_type.is_enum() {
            return Ok(options([
                ("required", json!(required)),
                ("choices", self.enum_choices(&leaf.class, &leaf.field)?)
            ]));
        }

        Ok(options([("required", json!(required))]))
    }

    /// Options for the filter widget of a field.
    ///
    /// # Errors
    ///
    /// Propagates path resolution and catalog errors.
    pub fn filter_options(
        &self,
        widget: &str,
        db_type: &DbType,
        model: &str,
        field_path: &str
    ) -> Result<OptionMap> {
        let mut filter = options([("required", json!(false))]);

        if db_type.is_virtual() {
            return Ok(filter);
        }

        if db_type.is_boolean() {
            filter.extend(self.boolean_choices());
        }

        if db_type.is_enum() {
            let leaf = self.resolve(model, field_path)?;
            filter.insert("choices".into(), self.enum_choices(&leaf.class, &leaf.field)?);
            return Ok(filter);
        }

        if WidgetPattern::Model.matches(widget) || WidgetPattern::Collection.matches(widget) {
            let mut merged = self.form_options(widget, db_type, model, field_path)?;
            merged.extend(filter);
            return Ok(merged);
        }

        Ok(filter)
    }

    /// Localized yes/no choices with a shared empty value.
    fn boolean_choices(&self) -> OptionMap {
        let mut choices = OptionMap::new();
        choices.insert("0".into(), json!(self.translator.trans(BOOLEAN_NO, DOMAIN)));
        choices.insert("1".into(), json!(self.translator.trans(BOOLEAN_YES, DOMAIN)));

        options([
            ("choices", Value::Object(choices)),
            ("empty_value", json!(self.translator.trans(BOOLEAN_YES_OR_NO, DOMAIN)))
        ])
    }

    /// Enum value set as self-mapped pairs.
    fn enum_choices(&self, class: &str, field: &str) -> Result<Value> {
        let choices: OptionMap = self
            .column(class, field)?
            .map(|column| {
                column
                    .value_set
                    .iter()
                    .map(|v| (v.clone(), json!(v)))
                    .collect()
            })
            .unwrap_or_default();
        Ok(Value::Object(choices))
    }
}

fn options<const N: usize>(pairs: [(&str, Value); N]) -> OptionMap {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
