// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sort category classification.

use std::fmt;

use super::DbType;

/// How a list column sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortType {
    /// String and blob-like columns.
    Alphabetic,
    /// Integer, float and decimal columns.
    Numeric,
    /// Everything else.
    Default
}

impl SortType {
    /// Classify a db type. The table is fixed.
    #[must_use]
    pub fn of(db_type: &DbType) -> Self {
        match db_type {
            DbType::Column(ty) if ty.is_alphabetic() => Self::Alphabetic,
            DbType::Column(ty) if ty.is_numeric() => Self::Numeric,
            _ => Self::Default
        }
    }

    /// Name used by templates.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Numeric => "numeric",
            Self::Default => "default"
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
