// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Localization boundary for the few labels the guesser synthesizes.

use std::collections::HashMap;

/// Translation domain of every key produced by this crate.
pub const DOMAIN: &str = "Admin";

/// Key of the "no" choice label.
pub const BOOLEAN_NO: &str = "boolean.no";

/// Key of the "yes" choice label.
pub const BOOLEAN_YES: &str = "boolean.yes";

/// Key of the empty choice label shared by boolean widgets.
pub const BOOLEAN_YES_OR_NO: &str = "boolean.yes_or_no";

/// Key to localized string lookup.
pub trait Translator {
    /// Translate `key` within `domain`.
    fn trans(&self, key: &str, domain: &str) -> String;
}

/// Translator backed by a fixed catalogue, falling back to the key itself.
#[derive(Debug, Clone)]
pub struct StaticTranslator {
    messages: HashMap<String, String>
}

impl StaticTranslator {
    /// Catalogue with no messages at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new()
        }
    }

    /// Add or replace a message.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }
}

impl Default for StaticTranslator {
    /// English boolean labels.
    fn default() -> Self {
        Self::empty()
            .with(BOOLEAN_NO, "No")
            .with(BOOLEAN_YES, "Yes")
            .with(BOOLEAN_YES_OR_NO, "Yes or No")
    }
}

impl Translator for StaticTranslator {
    fn trans(&self, key: &str, _domain: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
