// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Namespace and route naming helpers.
//!
//! | Helper | `namespace_prefix: Acme\Blog`, `subfolder: Admin` |
//! |--------|----------------------------------------------------|
//! | [`Builder::namespace_prefix_with_subfolder`] | `Acme\Blog\Admin` |
//! | [`Builder::route_prefix_with_subfolder`] | `Acme_Blog_Admin` |
//! | [`Builder::namespace_prefix_for_template`] | `AcmeBlog` |
//! | [`Builder::base_actions_route`] | `Acme_Blog_Admin_<bundle>_<generator>` |
//! | [`Builder::object_actions_route`] | `<base actions route>_object` |

use super::Builder;
use crate::{action::ActionContext, error::Result, schema::SchemaCatalog};

impl<C: SchemaCatalog> Builder<'_, C> {
    /// Namespace prefix followed by `\<subfolder>` when a subfolder is set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for non-string
    /// variables.
    pub fn namespace_prefix_with_subfolder(&self) -> Result<String> {
        let prefix = self.variables().string("namespace_prefix")?;
        Ok(match self.subfolder()? {
            Some(subfolder) => format!("{prefix}\\{subfolder}"),
            None => prefix.to_owned()
        })
    }

    /// Namespace prefix and subfolder joined with `_`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for non-string
    /// variables.
    pub fn route_prefix_with_subfolder(&self) -> Result<String> {
        let prefix = self.variables().string("namespace_prefix")?;
        let joined = match self.subfolder()? {
            Some(subfolder) => format!("{prefix}_{subfolder}"),
            None => prefix.to_owned()
        };
        Ok(joined.replace('\\', "_"))
    }

    /// Namespace prefix without separators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for a non-string
    /// prefix.
    pub fn namespace_prefix_for_template(&self) -> Result<String> {
        Ok(self
            .variables()
            .string("namespace_prefix")?
            .replace('\\', ""))
    }

    /// Route prefix of list-level actions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for non-string
    /// variables.
    pub fn base_actions_route(&self) -> Result<String> {
        Ok(format!(
            "{}_{}_{}",
            self.route_prefix_with_subfolder()?,
            self.variables().string("bundle_name")?,
            self.base_generator_name()
        )
        .replace('\\', "_"))
    }

    /// Route of per-object actions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for non-string
    /// variables.
    pub fn object_actions_route(&self) -> Result<String> {
        Ok(format!("{}_object", self.base_actions_route()?))
    }

    pub(super) fn action_context(&self) -> Result<ActionContext> {
        Ok(ActionContext {
            base_actions_route:   self.base_actions_route()?,
            object_actions_route: self.object_actions_route()?
        })
    }

    fn subfolder(&self) -> Result<Option<&str>> {
        match self.variables().string("subfolder")? {
            "" => Ok(None),
            subfolder => Ok(Some(subfolder))
        }
    }
}
