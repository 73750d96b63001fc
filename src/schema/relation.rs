// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation metadata.
//!
//! Relations follow the persistence layer convention for which table is
//! "local" and which is "foreign":
//!
//! | Cardinality | `local_class` | `foreign_class` |
//! |-------------|---------------|-----------------|
//! | many-to-one | declaring class | referenced class |
//! | one-to-one | declaring class | referenced class |
//! | one-to-many | referencing (many) class | declaring class |
//! | many-to-many | related class | declaring class |
//!
//! The single-valued end seen from the declaring class is therefore always
//! [`RelationMap::target_class`].

use serde::Deserialize;

/// Relation cardinality as seen from the declaring class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Foreign key on the declaring class.
    ManyToOne,
    /// Unique foreign key.
    OneToOne,
    /// Foreign key on the related class.
    OneToMany,
    /// Cross-reference table.
    ManyToMany
}

impl Cardinality {
    /// Single-valued from the declaring side.
    #[must_use]
    pub const fn is_to_one(&self) -> bool {
        matches!(self, Self::ManyToOne | Self::OneToOne)
    }

    /// Multi-valued from the declaring side.
    #[must_use]
    pub const fn is_to_many(&self) -> bool {
        !self.is_to_one()
    }
}

/// One relation of a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationMap {
    /// Relation name in classified form (e.g. `Author`).
    pub name: String,

    /// Plural relation name (e.g. `Books`).
    #[serde(default)]
    pub plural_name: Option<String>,

    /// Cardinality from the declaring class.
    pub cardinality: Cardinality,

    /// Local class, see the module table.
    pub local_class: String,

    /// Foreign class, see the module table.
    pub foreign_class: String
}

impl RelationMap {
    /// Many-to-one relation from `from` to `to`.
    pub fn many_to_one(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>
    ) -> Self {
        Self {
            name:          name.into(),
            plural_name:   None,
            cardinality:   Cardinality::ManyToOne,
            local_class:   from.into(),
            foreign_class: to.into()
        }
    }

    /// One-to-many relation from `from` to the many side `to`.
    pub fn one_to_many(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>
    ) -> Self {
        Self {
            name:          name.into(),
            plural_name:   None,
            cardinality:   Cardinality::OneToMany,
            local_class:   to.into(),
            foreign_class: from.into()
        }
    }

    /// Set the plural relation name.
    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural_name = Some(plural.into());
        self
    }

    /// Check if `rel_name` names this relation, singular or plural.
    #[must_use]
    pub fn matches(&self, rel_name: &str) -> bool {
        self.name == rel_name || self.plural_name.as_deref() == Some(rel_name)
    }

    /// Class on the other end of the relation.
    #[must_use]
    pub fn target_class(&self) -> &str {
        if self.cardinality.is_to_one() {
            &self.foreign_class
        } else {
            &self.local_class
        }
    }
}
