// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # entity-admin
//!
//! Resolve admin CRUD screens from an entity schema and a declarative
//! generator file.
//!
//! Given a schema catalog (tables, columns, relations) and a YAML generator
//! file, this crate computes everything a template layer needs to render the
//! list, show, new and edit screens of a model: which fields appear and in
//! what order, their storage, sort, form and filter types, widget options,
//! fieldsets, and the list, object and batch actions with their credentials.
//! It never renders anything itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_admin::{AdminSettings, BuilderKind, Generator, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::from_yaml(r#"
//! - class: Article
//!   table: article
//!   columns:
//!     - { name: id, type: INTEGER, primary_key: true, not_null: true }
//!     - { name: title, type: VARCHAR, not_null: true }
//!     - { name: published, type: BOOLEAN }
//!     - { name: author_id, type: INTEGER }
//!   relations:
//!     - { name: Author, cardinality: many_to_one, local_class: Article, foreign_class: User }
//! - class: User
//!   table: user
//!   columns:
//!     - { name: id, type: INTEGER, primary_key: true, not_null: true }
//! "#)?;
//!
//! let generator = Generator::from_yaml("article", r#"
//! params:
//!   model: Article
//!   display: [title, published, author]
//! "#, catalog, AdminSettings::default())?;
//!
//! let edit = generator.builder(BuilderKind::Edit);
//! let columns = edit.columns()?;
//!
//! assert_eq!(columns["title"].form_type(), "text");
//! assert_eq!(columns["author"].form_options()["class"], "User");
//! # Ok::<(), entity_admin::AdminError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`schema`] | Catalog collaborator and in-memory implementation |
//! | [`guesser`] | Db type, widget, option and primary key guessing |
//! | [`layout`] | `display` / `tabs` normalization |
//! | [`descriptor`] | Resolved field and action value objects |
//! | [`action`] | Action discovery registry and built-ins |
//! | [`builder`] | Per-screen configuration compiler |
//! | [`generator`] | Generator file and builder factory |
//! | [`settings`] | Process-wide defaults |
//! | [`translate`] | Translation collaborator |
//!
//! ## Logging
//!
//! Resolution steps are reported through [`tracing`]: `debug` when a builder
//! resolves a collection, `trace` for cache misses, dropped layout
//! references and action fallbacks. No subscriber is installed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod builder;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod guesser;
pub mod layout;
pub mod schema;
pub mod settings;
pub mod translate;

pub use action::{ActionContext, ActionRegistry};
pub use builder::{Builder, BuilderKind, RouteGenerator};
pub use descriptor::{ActionDescriptor, ActionScope, FieldDescriptor, OptionMap};
pub use error::{AdminError, BuilderContext, Result};
pub use generator::{Generator, GeneratorFile};
pub use guesser::{DbType, FieldGuesser, SortType};
pub use layout::{FieldsetEntry, Layout};
pub use schema::{InMemoryCatalog, SchemaCatalog};
pub use settings::AdminSettings;
pub use translate::{StaticTranslator, Translator};
