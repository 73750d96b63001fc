// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column metadata.

use std::fmt;

use convert_case::{Case, Casing};
use serde::Deserialize;

/// Storage type of a column as reported by the catalog.
///
/// Tokens are the upper-case names used by the persistence layer and by the
/// widget mapping configuration (`VARCHAR`, `BOOLEAN_EMU`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ColumnType {
    /// Fixed-length string.
    #[serde(rename = "CHAR")]
    Char,
    /// Variable-length string.
    #[serde(rename = "VARCHAR")]
    Varchar,
    /// Long text.
    #[serde(rename = "LONGVARCHAR")]
    LongVarchar,
    /// Character large object.
    #[serde(rename = "CLOB")]
    Clob,
    /// Emulated character large object.
    #[serde(rename = "CLOB_EMU")]
    ClobEmu,
    /// Arbitrary precision number.
    #[serde(rename = "NUMERIC")]
    Numeric,
    /// Fixed precision decimal.
    #[serde(rename = "DECIMAL")]
    Decimal,
    /// 8-bit integer.
    #[serde(rename = "TINYINT")]
    TinyInt,
    /// 16-bit integer.
    #[serde(rename = "SMALLINT")]
    SmallInt,
    /// 32-bit integer.
    #[serde(rename = "INTEGER")]
    Integer,
    /// 64-bit integer.
    #[serde(rename = "BIGINT")]
    BigInt,
    /// Single precision float.
    #[serde(rename = "REAL")]
    Real,
    /// Float.
    #[serde(rename = "FLOAT")]
    Float,
    /// Double precision float.
    #[serde(rename = "DOUBLE")]
    Double,
    /// Fixed-length binary.
    #[serde(rename = "BINARY")]
    Binary,
    /// Variable-length binary.
    #[serde(rename = "VARBINARY")]
    VarBinary,
    /// Long binary.
    #[serde(rename = "LONGVARBINARY")]
    LongVarBinary,
    /// Binary large object.
    #[serde(rename = "BLOB")]
    Blob,
    /// Calendar date.
    #[serde(rename = "DATE")]
    Date,
    /// Time of day.
    #[serde(rename = "TIME")]
    Time,
    /// Date and time.
    #[serde(rename = "TIMESTAMP")]
    Timestamp,
    /// Date outside the native range.
    #[serde(rename = "BU_DATE")]
    BuDate,
    /// Timestamp outside the native range.
    #[serde(rename = "BU_TIMESTAMP")]
    BuTimestamp,
    /// Native boolean.
    #[serde(rename = "BOOLEAN")]
    Boolean,
    /// Boolean stored as an integer.
    #[serde(rename = "BOOLEAN_EMU")]
    BooleanEmu,
    /// Serialized object.
    #[serde(rename = "OBJECT")]
    Object,
    /// Serialized array.
    #[serde(rename = "ARRAY", alias = "PHP_ARRAY")]
    PhpArray,
    /// Enumerated value set.
    #[serde(rename = "ENUM")]
    Enum
}

impl ColumnType {
    /// Every column type, in catalog declaration order.
    pub const ALL: [Self; 28] = [
        Self::Char,
        Self::Varchar,
        Self::LongVarchar,
        Self::Clob,
        Self::ClobEmu,
        Self::Numeric,
        Self::Decimal,
        Self::TinyInt,
        Self::SmallInt,
        Self::Integer,
        Self::BigInt,
        Self::Real,
        Self::Float,
        Self::Double,
        Self::Binary,
        Self::VarBinary,
        Self::LongVarBinary,
        Self::Blob,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::BuDate,
        Self::BuTimestamp,
        Self::Boolean,
        Self::BooleanEmu,
        Self::Object,
        Self::PhpArray,
        Self::Enum
    ];

    /// Upper-case token of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::LongVarchar => "LONGVARCHAR",
            Self::Clob => "CLOB",
            Self::ClobEmu => "CLOB_EMU",
            Self::Numeric => "NUMERIC",
            Self::Decimal => "DECIMAL",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Real => "REAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Binary => "BINARY",
            Self::VarBinary => "VARBINARY",
            Self::LongVarBinary => "LONGVARBINARY",
            Self::Blob => "BLOB",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::BuDate => "BU_DATE",
            Self::BuTimestamp => "BU_TIMESTAMP",
            Self::Boolean => "BOOLEAN",
            Self::BooleanEmu => "BOOLEAN_EMU",
            Self::Object => "OBJECT",
            Self::PhpArray => "ARRAY",
            Self::Enum => "ENUM"
        }
    }

    /// Parse an upper-case token.
    ///
    /// Accepts `PHP_ARRAY` as the constant name of the `ARRAY` token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "PHP_ARRAY" {
            return Some(Self::PhpArray);
        }
        Self::ALL.into_iter().find(|ty| ty.as_str() == token)
    }

    /// String and blob-like types.
    #[must_use]
    pub const fn is_alphabetic(&self) -> bool {
        matches!(
            self,
            Self::Char | Self::Varchar | Self::LongVarchar | Self::Blob | Self::Clob | Self::ClobEmu
        )
    }

    /// Integer, float and decimal family.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Float
                | Self::Real
                | Self::Double
                | Self::Decimal
                | Self::TinyInt
                | Self::SmallInt
                | Self::Integer
                | Self::BigInt
                | Self::Numeric
        )
    }

    /// Native or emulated boolean.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean | Self::BooleanEmu)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnMap {
    /// Storage name (e.g. `created_at`).
    pub name: String,

    /// Mixed-case source name (e.g. `CreatedAt`).
    ///
    /// Derived from `name` when the catalog does not provide one.
    #[serde(default)]
    pub php_name: Option<String>,

    /// Storage type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// NOT NULL constraint.
    #[serde(default)]
    pub not_null: bool,

    /// Part of the primary key.
    #[serde(default)]
    pub primary_key: bool,

    /// Allowed values of an `ENUM` column.
    #[serde(default)]
    pub value_set: Vec<String>
}

impl ColumnMap {
    /// Create a nullable, non-key column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            php_name: None,
            column_type,
            not_null: false,
            primary_key: false,
            value_set: Vec::new()
        }
    }

    /// Mark the column NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as primary key (implies NOT NULL).
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    /// Set the mixed-case source name.
    #[must_use]
    pub fn with_php_name(mut self, php_name: impl Into<String>) -> Self {
        self.php_name = Some(php_name.into());
        self
    }

    /// Set the enum value set.
    #[must_use]
    pub fn with_value_set<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.value_set = values.into_iter().map(Into::into).collect();
        self
    }

    /// Mixed-case source name.
    #[must_use]
    pub fn php_name(&self) -> String {
        self.php_name
            .clone()
            .unwrap_or_else(|| self.name.to_case(Case::Pascal))
    }

    /// Name normalized to the generator convention (`underscore_separated`).
    #[must_use]
    pub fn field_name(&self) -> String {
        self.php_name().to_case(Case::Snake)
    }

    /// Check if the column answers to `property`.
    ///
    /// Matches the storage name, the normalized name, or the source name with
    /// an upper-cased first letter.
    #[must_use]
    pub fn answers_to(&self, property: &str) -> bool {
        self.name == property || self.field_name() == property || self.php_name() == ucfirst(property)
    }
}

fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for ty in ColumnType::ALL {
            assert_eq!(ColumnType::from_token(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn php_array_constant_name() {
        assert_eq!(ColumnType::from_token("PHP_ARRAY"), Some(ColumnType::PhpArray));
        assert_eq!(ColumnType::PhpArray.as_str(), "ARRAY");
    }

    #[test]
    fn unknown_token() {
        assert_eq!(ColumnType::from_token("varchar"), None);
        assert_eq!(ColumnType::from_token("GEOMETRY"), None);
    }

    #[test]
    fn derived_names() {
        let column = ColumnMap::new("created_at", ColumnType::Timestamp);
        assert_eq!(column.php_name(), "CreatedAt");
        assert_eq!(column.field_name(), "created_at");
    }

    #[test]
    fn explicit_php_name_drives_field_name() {
        let column = ColumnMap::new("pub_flag", ColumnType::Boolean).with_php_name("IsPublished");
        assert_eq!(column.field_name(), "is_published");
        assert!(column.answers_to("is_published"));
        assert!(column.answers_to("pub_flag"));
        assert!(column.answers_to("isPublished"));
        assert!(!column.answers_to("published"));
    }

    #[test]
    fn primary_key_implies_not_null() {
        let column = ColumnMap::new("id", ColumnType::Integer).primary_key();
        assert!(column.primary_key);
        assert!(column.not_null);
    }

    #[test]
    fn deserialize_from_yaml() {
        let column: ColumnMap =
            serde_yaml::from_str("{ name: status, type: ENUM, value_set: [draft, live] }").unwrap();
        assert_eq!(column.column_type, ColumnType::Enum);
        assert_eq!(column.value_set, vec!["draft", "live"]);
        assert!(!column.not_null);
    }
}
