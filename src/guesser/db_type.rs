// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Db type tags attached to resolved fields.

use std::fmt;

use crate::schema::ColumnType;

/// Storage category of a resolved field.
///
/// | Variant | Token | Source |
/// |---------|-------|--------|
/// | `Column` | `VARCHAR`, `BOOLEAN`, ... | column type |
/// | `Model` | `model` | to-one relation |
/// | `Collection` | `collection` | to-many relation |
/// | `Virtual` | `virtual` | no backing column |
/// | `Other` | anything else | user override |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DbType {
    /// Intrinsic column type.
    Column(ColumnType),
    /// Single-valued relation.
    Model,
    /// Multi-valued relation.
    Collection,
    /// Field without a backing column.
    Virtual,
    /// Token unknown to the catalog, usually from an override.
    Other(String)
}

impl DbType {
    /// Parse a db type token or a widget mapping key.
    ///
    /// Column tokens (and the `PHP_ARRAY` constant name) resolve to
    /// [`DbType::Column`]; `model`, `collection` and `virtual` to their
    /// variants; anything else is kept literally.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if let Some(ty) = ColumnType::from_token(token) {
            return Self::Column(ty);
        }
        match token {
            "model" => Self::Model,
            "collection" => Self::Collection,
            "virtual" => Self::Virtual,
            other => Self::Other(other.to_owned())
        }
    }

    /// Token of this db type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Column(ty) => ty.as_str(),
            Self::Model => "model",
            Self::Collection => "collection",
            Self::Virtual => "virtual",
            Self::Other(token) => token
        }
    }

    /// No backing column.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual)
    }

    /// Native or emulated boolean column.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Column(ty) if ty.is_boolean())
    }

    /// Enumerated column.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Column(ColumnType::Enum))
    }
}

impl From<ColumnType> for DbType {
    fn from(ty: ColumnType) -> Self {
        Self::Column(ty)
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens() {
        assert_eq!(DbType::parse("VARCHAR"), DbType::Column(ColumnType::Varchar));
        assert_eq!(DbType::parse("PHP_ARRAY"), DbType::Column(ColumnType::PhpArray));
        assert_eq!(DbType::parse("model"), DbType::Model);
        assert_eq!(DbType::parse("collection"), DbType::Collection);
        assert_eq!(DbType::parse("virtual"), DbType::Virtual);
        assert_eq!(DbType::parse("geometry"), DbType::Other("geometry".into()));
    }

    #[test]
    fn lower_case_column_token_is_literal() {
        assert_eq!(DbType::parse("boolean"), DbType::Other("boolean".into()));
    }

    #[test]
    fn display_uses_token() {
        assert_eq!(DbType::Column(ColumnType::PhpArray).to_string(), "ARRAY");
        assert_eq!(DbType::Model.to_string(), "model");
    }

    #[test]
    fn predicates() {
        assert!(DbType::Column(ColumnType::BooleanEmu).is_boolean());
        assert!(DbType::Column(ColumnType::Enum).is_enum());
        assert!(DbType::Virtual.is_virtual());
        assert!(!DbType::Model.is_boolean());
    }
}
