// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Action descriptor.

use std::fmt;

use convert_case::{Case, Casing};
use serde_json::Value;

use super::{OptionMap, bool_value, credentials_value, optional_string, string_value};
use crate::error::Result;

/// Namespace an action lives in.
///
/// The three scopes are independent: `delete` may exist as both an object
/// and a batch action with different behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionScope {
    /// List-level action (`new`, `excel`, ...).
    Generic,
    /// Per-row action (`edit`, `delete`, ...).
    Object,
    /// Action applied to a selection of rows.
    Batch
}

impl ActionScope {
    /// Scope name used in routes and templates.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Object => "object",
            Self::Batch => "batch"
        }
    }
}

impl fmt::Display for ActionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invocable operation of an admin screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    name:           String,
    scope:          ActionScope,
    label:          String,
    icon:           Option<String>,
    route:          Option<String>,
    confirm:        Option<String>,
    csrf_protected: bool,
    credentials:    Option<String>,
    properties:     OptionMap
}

impl ActionDescriptor {
    /// Bare descriptor holding only the name.
    pub fn new(name: impl Into<String>, scope: ActionScope) -> Self {
        let name = name.into();
        Self {
            label: name.to_case(Case::Sentence),
            name,
            scope,
            icon: None,
            route: None,
            confirm: None,
            csrf_protected: false,
            credentials: None,
            properties: OptionMap::new()
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the route.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Ask for confirmation with `message`.
    #[must_use]
    pub fn with_confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm = Some(message.into());
        self
    }

    /// Require a CSRF token.
    #[must_use]
    pub fn csrf_protected(mut self) -> Self {
        self.csrf_protected = true;
        self
    }

    /// Set an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Action name, unique within its scope.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the action.
    #[must_use]
    pub fn scope(&self) -> ActionScope {
        self.scope
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Icon name.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Route invoked by the action.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Confirmation message.
    #[must_use]
    pub fn confirm(&self) -> Option<&str> {
        self.confirm.as_deref()
    }

    /// Whether the action requires a CSRF token.
    #[must_use]
    pub fn is_csrf_protected(&self) -> bool {
        self.csrf_protected
    }

    /// Access expression required to invoke the action.
    #[must_use]
    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    /// Replace the access requirement.
    pub fn set_credentials(&mut self, credentials: Option<String>) {
        self.credentials = credentials;
    }

    /// Open property bag.
    #[must_use]
    pub fn properties(&self) -> &OptionMap {
        &self.properties
    }

    /// Apply one user or global option.
    ///
    /// `label`, `icon`, `route`, `confirm`, `csrfProtected` and
    /// `credentials` are typed; other keys go to the property bag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidOption`] for a typed key with a
    /// value of the wrong shape.
    pub fn set_property(&mut self, option: &str, value: &Value) -> Result<()> {
        let owner = self.name.as_str();
        match option {
            "label" => self.label = string_value(owner, option, value)?,
            "icon" => self.icon = optional_string(owner, option, value)?,
            "route" => self.route = optional_string(owner, option, value)?,
            "confirm" => self.confirm = optional_string(owner, option, value)?,
            "csrfProtected" => self.csrf_protected = bool_value(owner, option, value)?,
            "credentials" => self.credentials = credentials_value(value),
            _ => {
                self.properties.insert(option.to_owned(), value.clone());
            }
        }
        Ok(())
    }

    /// Apply every option of a bag in order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid option.
    pub fn apply(&mut self, options: &OptionMap) -> Result<()> {
        options
            .iter()
            .try_for_each(|(option, value)| self.set_property(option, value))
    }
}
