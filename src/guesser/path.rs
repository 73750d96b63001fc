// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dotted field path resolution.
//!
//! `author.country.name` starting at `Article` walks the `Author` relation of
//! `Article`, then the `Country` relation of its target class, and resolves to
//! the `name` field of the last class:
//!
//! ```text
//! Article ──author──▶ User ──country──▶ Country . name
//! ```
//!
//! Every segment but the last must name a relation (to-one or to-many) of the
//! class reached so far. Cardinality of intermediate hops does not matter.

use convert_case::{Case, Casing};

use super::FieldGuesser;
use crate::{
    error::{AdminError, Result},
    schema::{RelationMap, SchemaCatalog}
};

/// Terminal class and field of a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Class owning the leaf field.
    pub class: String,
    /// Leaf field name.
    pub field: String
}

impl<C: SchemaCatalog> FieldGuesser<C> {
    /// Resolve `field_path` starting at `model`.
    ///
    /// # Errors
    ///
    /// - [`AdminError::InvalidAssociationSegment`] when a non-terminal segment
    ///   is not a relation of the current class
    /// - [`AdminError::UnknownQuerySource`] when a class on the way is unknown
    pub fn resolve(&self, model: &str, field_path: &str) -> Result<ResolvedField> {
        let mut segments: Vec<&str> = field_path.split('.').collect();
        let field = segments.pop().unwrap_or_default();
        let mut class = model.to_owned();

        for segment in segments {
            let relation = self.relation(&class, segment)?.ok_or_else(|| {
                AdminError::InvalidAssociationSegment {
                    segment: segment.to_owned(),
                    class:   class.clone()
                }
            })?;
            class = relation.target_class().to_owned();
        }

        Ok(ResolvedField {
            class,
            field: field.to_owned()
        })
    }

    /// Relation of `class` named by `field`, if any.
    ///
    /// The field name is classified (`order_items` → `OrderItems`) and matched
    /// against both singular and plural relation names.
    pub(crate) fn relation(&self, class: &str, field: &str) -> Result<Option<RelationMap>> {
        let table = self.cache.table(&self.catalog, class)?;
        let rel_name = field.to_case(Case::Pascal);
        Ok(table.find_relation(&rel_name).cloned())
    }
}
