// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Action discovery.
//!
//! Actions are looked up by name in one of three independent namespaces.
//! The name is normalized into a type identifier and searched in an explicit
//! registry of factories:
//!
//! ```text
//! "save-and-list" ──► "save_and_list_action" ──► "SaveAndListAction"
//!                                                   │
//!            ┌──────────────────────────────────────┘
//!            ▼
//!   registry[(Generic, "SaveAndListAction")] ──► factory(name, ctx)
//! ```
//!
//! A missing entry is not an error: the caller falls back to a bare
//! [`ActionDescriptor`].
//!
//! # Built-ins
//!
//! | Scope | Actions |
//! |-------|---------|
//! | generic | `new`, `list`, `excel`, `save`, `save-and-list`, `save-and-add` |
//! | object | `edit`, `show`, `delete` |
//! | batch | `delete` |

mod builtin;

use std::collections::HashMap;

use convert_case::{Case, Casing};
use tracing::trace;

use crate::descriptor::{ActionDescriptor, ActionScope};

/// Route context handed to action factories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionContext {
    /// Route prefix of list-level actions.
    pub base_actions_route:   String,
    /// Route of per-object actions.
    pub object_actions_route: String
}

/// Constructor of a specialized action.
pub type ActionFactory = fn(&str, &ActionContext) -> ActionDescriptor;

/// Registry of specialized action implementations.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    factories: HashMap<(ActionScope, String), ActionFactory>
}

impl ActionRegistry {
    /// Empty registry; every lookup falls back to bare descriptors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with the built-in actions.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::register(&mut registry);
        registry
    }

    /// Register `factory` for `name` in `scope`, replacing any previous one.
    pub fn register(&mut self, scope: ActionScope, name: &str, factory: ActionFactory) {
        self.factories.insert((scope, class_name(name)), factory);
    }

    /// Whether a specialized implementation exists.
    #[must_use]
    pub fn contains(&self, scope: ActionScope, name: &str) -> bool {
        self.factories.contains_key(&(scope, class_name(name)))
    }

    /// Instantiate the specialized implementation of `name`, if any.
    #[must_use]
    pub fn find(&self, scope: ActionScope, name: &str, ctx: &ActionContext) -> Option<ActionDescriptor> {
        let key = (scope, class_name(name));
        match self.factories.get(&key) {
            Some(factory) => Some(factory(name, ctx)),
            None => {
                trace!(scope = %scope, class = %key.1, "no specialized action");
                None
            }
        }
    }
}

/// Type identifier of an action name.
///
/// Hyphens and underscores both separate words.
///
/// ```
/// use entity_admin::action::class_name;
///
/// assert_eq!(class_name("save-and-list"), "SaveAndListAction");
/// assert_eq!(class_name("edit"), "EditAction");
/// ```
#[must_use]
pub fn class_name(name: &str) -> String {
    format!("{}_action", name.replace('-', "_")).to_case(Case::Pascal)
}
