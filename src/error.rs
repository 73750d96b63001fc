// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for admin resolution.
//!
//! Every failure here is a configuration or schema defect. Nothing is retried
//! and there is no degraded mode: a builder either resolves completely or the
//! generation run for it aborts with one of these errors.
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`AdminError::UnresolvableFieldType`] | guesser, builder | No widget mapped for a db type |
//! | [`AdminError::InvalidAssociationSegment`] | path resolution | Dotted segment is not a relation |
//! | [`AdminError::NoPrimaryKey`] | guesser | Zero or several primary keys |
//! | [`AdminError::UnknownQuerySource`] | metadata cache | Catalog has no table for a class |
//! | [`AdminError::InvalidConfiguration`] | config parsing | Malformed generator variable |
//! | [`AdminError::InvalidOption`] | descriptors | Override value has the wrong shape |

use thiserror::Error;

/// Builder identity attached to field errors raised during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderContext {
    /// Builder key (`list`, `edit`, ...).
    pub builder:   String,
    /// Base generator name the builder belongs to.
    pub generator: String
}

/// Errors raised while resolving admin configuration.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The db type of a field has no entry in the active widget mapping.
    #[error(
        "the dbType \"{db_type}\" is not yet implemented (column \"{field}\" in \"{class}\"){}",
        describe_context(.context)
    )]
    UnresolvableFieldType {
        /// Db type token that failed the lookup.
        db_type: String,
        /// Field path being resolved.
        field:   String,
        /// Model class owning the field.
        class:   String,
        /// Builder that requested the field, when known.
        context: Option<BuilderContext>
    },

    /// A non-terminal segment of a dotted path is not a relation.
    #[error("field \"{segment}\" for class \"{class}\" is not an association")]
    InvalidAssociationSegment {
        /// Offending path segment.
        segment: String,
        /// Class the segment was looked up on.
        class:   String
    },

    /// The model does not have exactly one primary key column.
    #[error("no valid primary key found for \"{class}\" ({found} primary key columns)")]
    NoPrimaryKey {
        /// Model class.
        class: String,
        /// Number of primary key columns reported by the catalog.
        found: usize
    },

    /// The schema catalog has no metadata for the class.
    #[error("can't find query source for class \"{class}\"")]
    UnknownQuerySource {
        /// Requested class.
        class: String
    },

    /// A generator variable or settings entry is malformed.
    #[error("invalid configuration for \"{key}\": {reason}")]
    InvalidConfiguration {
        /// Variable path (e.g. `list.display`).
        key:    String,
        /// What was wrong with it.
        reason: String
    },

    /// A descriptor override has a value of the wrong shape.
    #[error("invalid value for option \"{option}\" of \"{owner}\": {reason}")]
    InvalidOption {
        /// Field or action name.
        owner:  String,
        /// Option key.
        option: String,
        /// Expected shape.
        reason: String
    },

    /// A javascript asset references a route that cannot be generated.
    #[error("unable to generate route \"{route}\": {reason}")]
    UnknownRoute {
        /// Route name.
        route:  String,
        /// Why the route could not be generated.
        reason: String
    },

    /// A YAML document could not be parsed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error)
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Build an [`AdminError::InvalidConfiguration`].
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            key:    key.into(),
            reason: reason.into()
        }
    }

    /// Build an [`AdminError::InvalidOption`].
    pub fn option(
        owner: impl Into<String>,
        option: impl Into<String>,
        reason: impl Into<String>
    ) -> Self {
        Self::InvalidOption {
            owner:  owner.into(),
            option: option.into(),
            reason: reason.into()
        }
    }

    /// Attach builder identity to an unresolvable field error.
    ///
    /// Other variants pass through untouched.
    #[must_use]
    pub fn with_builder_context(self, context: BuilderContext) -> Self {
        match self {
            Self::UnresolvableFieldType {
                db_type,
                field,
                class,
                context: None
            } => Self::UnresolvableFieldType {
                db_type,
                field,
                class,
                context: Some(context)
            },
            other => other
        }
    }
}

fn describe_context(context: &Option<BuilderContext>) -> String {
    match context {
        Some(ctx) => format!(
            " in builder \"{}\" of generator \"{}\"",
            ctx.builder, ctx.generator
        ),
        None => String::new()
    }
}
