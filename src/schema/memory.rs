// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory schema catalog.
//!
//! Useful for tests and for drivers that export their schema to YAML ahead of
//! a generation run.
//!
//! ```yaml
//! - class: Article
//!   table: article
//!   columns:
//!     - { name: id, type: INTEGER, primary_key: true }
//!     - { name: title, type: VARCHAR, not_null: true }
//!   relations:
//!     - { name: Author, cardinality: many_to_one, local_class: Article, foreign_class: User }
//! ```

use indexmap::IndexMap;

use super::{SchemaCatalog, TableMap};
use crate::error::Result;

/// Catalog backed by a map of table maps keyed by class.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tables: IndexMap<String, TableMap>
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table, replacing any table with the same class.
    #[must_use]
    pub fn with_table(mut self, table: TableMap) -> Self {
        self.insert(table);
        self
    }

    /// Register a table, replacing any table with the same class.
    pub fn insert(&mut self, table: TableMap) {
        self.tables.insert(table.class_name.clone(), table);
    }

    /// Parse a YAML list of tables.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::Yaml`] when the document does not match
    /// the table layout.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let tables: Vec<TableMap> = serde_yaml::from_str(source)?;
        Ok(tables.into_iter().fold(Self::new(), Self::with_table))
    }

    /// Registered classes in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl SchemaCatalog for InMemoryCatalog {
    fn table(&self, class: &str) -> Option<TableMap> {
        self.tables.get(class).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Cardinality, ColumnType};

    const CATALOG: &str = r"
- class: Article
  table: article
  columns:
    - { name: id, type: INTEGER, primary_key: true }
    - { name: title, type: VARCHAR, not_null: true }
  relations:
    - { name: Author, cardinality: many_to_one, local_class: Article, foreign_class: User }
- class: User
  table: user
  columns:
    - { name: id, type: INTEGER, primary_key: true }
";

    #[test]
    fn parses_tables_in_order() {
        let catalog = InMemoryCatalog::from_yaml(CATALOG).unwrap();
        assert_eq!(catalog.classes().collect::<Vec<_>>(), vec!["Article", "User"]);

        let article = catalog.table("Article").unwrap();
        assert_eq!(article.columns[1].column_type, ColumnType::Varchar);
        assert_eq!(article.relations[0].cardinality, Cardinality::ManyToOne);
    }

    #[test]
    fn unknown_class() {
        let catalog = InMemoryCatalog::from_yaml(CATALOG).unwrap();
        assert!(catalog.table("Ghost").is_none());
    }

    #[test]
    fn invalid_document() {
        assert!(InMemoryCatalog::from_yaml("- class: Broken").is_err());
    }
}
