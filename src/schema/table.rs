// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table metadata.

use serde::Deserialize;

use super::{ColumnMap, RelationMap};

/// Columns and relations of one model class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableMap {
    /// Model class identity.
    #[serde(rename = "class")]
    pub class_name: String,

    /// Storage table name.
    #[serde(rename = "table")]
    pub table_name: String,

    /// Columns in catalog order.
    #[serde(default)]
    pub columns: Vec<ColumnMap>,

    /// Relations declared on this class.
    #[serde(default)]
    pub relations: Vec<RelationMap>
}

impl TableMap {
    /// Create an empty table map.
    pub fn new(class_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            table_name: table_name.into(),
            columns:    Vec::new(),
            relations:  Vec::new()
        }
    }

    /// Append a column.
    #[must_use]
    pub fn column(mut self, column: ColumnMap) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a relation.
    #[must_use]
    pub fn relation(mut self, relation: RelationMap) -> Self {
        self.relations.push(relation);
        self
    }

    /// Check for a column by storage name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Find a column by storage name, falling back to normalized and source
    /// names.
    #[must_use]
    pub fn find_column(&self, property: &str) -> Option<&ColumnMap> {
        self.columns
            .iter()
            .find(|c| c.name == property)
            .or_else(|| self.columns.iter().find(|c| c.answers_to(property)))
    }

    /// Find a relation by classified name, singular or plural.
    #[must_use]
    pub fn find_relation(&self, rel_name: &str) -> Option<&RelationMap> {
        self.relations.iter().find(|r| r.matches(rel_name))
    }

    /// Primary key columns in catalog order.
    #[must_use]
    pub fn primary_key_columns(&self) -> Vec<&ColumnMap> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }
}
