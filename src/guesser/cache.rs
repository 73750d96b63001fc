// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Memoized catalog lookups.
//!
//! The cache lives as long as the guesser that owns it, which is one
//! generation run. There is no eviction: the schema is assumed static for the
//! run. Interior mutability is single-threaded; runs that resolve builders in
//! parallel need one guesser per thread.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    error::{AdminError, Result},
    schema::{ColumnMap, SchemaCatalog, TableMap}
};

/// Class to table and (class, field) to column memo.
#[derive(Debug, Default)]
pub struct MetadataCache {
    tables:  RefCell<HashMap<String, Rc<TableMap>>>,
    columns: RefCell<HashMap<(String, String), Option<Rc<ColumnMap>>>>
}

impl MetadataCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table map of `class`, querying the catalog on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownQuerySource`] when the catalog does not
    /// know the class. Misses are not memoized.
    pub fn table<C: SchemaCatalog>(&self, catalog: &C, class: &str) -> Result<Rc<TableMap>> {
        if let Some(table) = self.tables.borrow().get(class) {
            return Ok(Rc::clone(table));
        }

        trace!(class, "table cache miss");
        let table = catalog
            .table(class)
            .map(Rc::new)
            .ok_or_else(|| AdminError::UnknownQuerySource {
                class: class.to_owned()
            })?;
        self.tables
            .borrow_mut()
            .insert(class.to_owned(), Rc::clone(&table));
        Ok(table)
    }

    /// Column of `class` answering to `property`, memoized including misses.
    ///
    /// # Errors
    ///
    /// Propagates [`AdminError::UnknownQuerySource`] from [`Self::table`].
    pub fn column<C: SchemaCatalog>(
        &self,
        catalog: &C,
        class: &str,
        property: &str
    ) -> Result<Option<Rc<ColumnMap>>> {
        let key = (class.to_owned(), property.to_owned());
        if let Some(column) = self.columns.borrow().get(&key) {
            return Ok(column.clone());
        }

        trace!(class, property, "column cache miss");
        let table = self.table(catalog, class)?;
        let column = table.find_column(property).cloned().map(Rc::new);
        self.columns.borrow_mut().insert(key, column.clone());
        Ok(column)
    }

    /// Number of cached tables.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.borrow().len()
    }
}
