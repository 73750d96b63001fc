// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema catalog boundary.
//!
//! The persistence layer is an external collaborator. This module defines the
//! read-only shape the guesser consumes from it and the trait through which it
//! is queried.
//!
//! # Data Structures
//!
//! ```text
//! TableMap
//! ├── class_name: String      (model class, e.g. "Article")
//! ├── table_name: String      (storage table, e.g. "article")
//! ├── columns: Vec<ColumnMap>
//! │   └── ColumnMap
//! │       ├── name: String          (storage name)
//! │       ├── php_name: Option      (mixed-case source name)
//! │       ├── column_type: ColumnType
//! │       ├── not_null / primary_key: bool
//! │       └── value_set: Vec<String> (enum values)
//! └── relations: Vec<RelationMap>
//!     └── RelationMap
//!         ├── name / plural_name
//!         ├── cardinality: Cardinality
//!         └── local_class / foreign_class
//! ```

mod column;
mod memory;
mod relation;
mod table;

pub use column::{ColumnMap, ColumnType};
pub use memory::InMemoryCatalog;
pub use relation::{Cardinality, RelationMap};
pub use table::TableMap;

/// Source of table metadata, keyed by model class.
///
/// Implementations are queried synchronously and are expected to be static
/// for the lifetime of a generation run. Returning `None` means the class is
/// unknown to the persistence layer.
pub trait SchemaCatalog {
    /// Look up the table map of a model class.
    fn table(&self, class: &str) -> Option<TableMap>;
}

impl<T: SchemaCatalog + ?Sized> SchemaCatalog for &T {
    fn table(&self, class: &str) -> Option<TableMap> {
        (**self).table(class)
    }
}
