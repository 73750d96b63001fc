// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator file and builder factory.
//!
//! A generator file describes every screen of one model:
//!
//! ```yaml
//! generator: admingenerator.generator.propel
//! params:
//!   model: Article
//!   namespace_prefix: Acme
//!   bundle_name: BlogBundle
//!   credentials: "hasRole('ROLE_ADMIN')"
//!   fields:
//!     title: { label: Headline }
//!   object_actions:
//!     delete: ~
//! builders:
//!   list:
//!     params:
//!       display: [title, published, author]
//!       actions: { new: ~ }
//!   edit:
//!     params:
//!       tabs: [{ General: [title, published] }, { Meta: [author] }]
//!   excel: ~
//! ```
//!
//! The [`Generator`] owns everything shared by its builders for one
//! generation run: the [`FieldGuesser`] and its cache, the action registry
//! and the optional route generator.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    action::ActionRegistry,
    builder::{Builder, BuilderKind, RouteGenerator, Variables},
    descriptor::{OptionMap, credentials_value},
    error::Result,
    guesser::FieldGuesser,
    schema::SchemaCatalog,
    settings::AdminSettings,
    translate::Translator
};

/// Parsed generator file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorFile {
    /// Generator service name.
    pub generator: String,

    /// Global variables shared by every builder.
    #[serde(deserialize_with = "nullable")]
    pub params: OptionMap,

    /// Builder sections, in declaration order.
    #[serde(deserialize_with = "nullable")]
    pub builders: IndexMap<String, Option<BuilderSection>>
}

/// One `builders.<key>` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderSection {
    /// Builder variables.
    #[serde(deserialize_with = "nullable")]
    pub params: OptionMap
}

impl GeneratorFile {
    /// Parse a generator file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::Yaml`] on malformed input.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Variables declared by one builder section.
    #[must_use]
    pub fn builder_params(&self, key: &str) -> Option<&OptionMap> {
        self.builders
            .get(key)
            .and_then(Option::as_ref)
            .map(|section| &section.params)
    }
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shared state of one generation run.
pub struct Generator<C> {
    base_generator_name: String,
    file:                GeneratorFile,
    globals:             Variables,
    settings:            AdminSettings,
    guesser:             FieldGuesser<C>,
    registry:            ActionRegistry,
    router:              Option<Box<dyn RouteGenerator>>
}

impl<C: SchemaCatalog> Generator<C> {
    /// Create a generator with the built-in actions registered.
    pub fn new(
        base_generator_name: impl Into<String>,
        file: GeneratorFile,
        catalog: C,
        settings: AdminSettings
    ) -> Self {
        Self {
            base_generator_name: base_generator_name.into(),
            globals: Variables::new(file.params.clone()),
            file,
            guesser: FieldGuesser::new(catalog, &settings),
            settings,
            registry: ActionRegistry::with_builtins(),
            router: None
        }
    }

    /// Parse the generator file and create a generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::Yaml`] on malformed input.
    pub fn from_yaml(
        base_generator_name: impl Into<String>,
        source: &str,
        catalog: C,
        settings: AdminSettings
    ) -> Result<Self> {
        Ok(Self::new(
            base_generator_name,
            GeneratorFile::from_yaml(source)?,
            catalog,
            settings
        ))
    }

    /// Replace the action registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the route generator used by route-based javascripts.
    #[must_use]
    pub fn with_router(mut self, router: impl RouteGenerator + 'static) -> Self {
        self.router = Some(Box::new(router));
        self
    }

    /// Replace the translator used for boolean labels.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.guesser = self.guesser.with_translator(translator);
        self
    }

    /// Name of the generator, used in routes and error messages.
    #[must_use]
    pub fn base_generator_name(&self) -> &str {
        &self.base_generator_name
    }

    /// Base template every admin screen extends.
    #[must_use]
    pub fn base_admin_template(&self) -> &str {
        &self.settings.base_admin_template
    }

    /// Parsed generator file.
    #[must_use]
    pub fn file(&self) -> &GeneratorFile {
        &self.file
    }

    /// Global admin settings.
    #[must_use]
    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    /// Field guesser shared by every builder.
    #[must_use]
    pub fn guesser(&self) -> &FieldGuesser<C> {
        &self.guesser
    }

    /// Action registry.
    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Route generator, if any.
    #[must_use]
    pub fn router(&self) -> Option<&dyn RouteGenerator> {
        self.router.as_deref()
    }

    /// Global variable at a dotted path (`actions.edit.label`).
    #[must_use]
    pub fn global(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.globals.get(segments.next()?)?;
        segments
            .try_fold(first, |value, segment| value.get(segment))
            .filter(|value| !value.is_null())
    }

    /// Global credentials every action inherits.
    #[must_use]
    pub fn global_credentials(&self) -> Option<String> {
        self.globals
            .get("credentials")
            .and_then(credentials_value)
            .filter(|credentials| !credentials.is_empty())
    }

    /// Global options of one action of a section (`actions`,
    /// `object_actions`), read from the unmerged global variables.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for a malformed
    /// entry.
    pub fn global_action_options(&self, section: &str, name: &str) -> Result<Option<OptionMap>> {
        self.globals.action_options(section, name)
    }

    /// Builder of one screen.
    #[must_use]
    pub fn builder(&self, kind: BuilderKind) -> Builder<'_, C> {
        let empty = OptionMap::new();
        let local = self.file.builder_params(kind.yaml_key()).unwrap_or(&empty);
        Builder::new(self, kind, Variables::merged(&self.file.params, local))
    }

    /// Builders of every section declared in the generator file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::InvalidConfiguration`] for an unknown
    /// builder key.
    pub fn builders(&self) -> Result<Vec<Builder<'_, C>>> {
        self.file
            .builders
            .keys()
            .map(|key| Ok(self.builder(key.parse()?)))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{guesser::tests::shop_catalog, schema::InMemoryCatalog};

    pub(crate) fn settings() -> AdminSettings {
        AdminSettings {
            stylesheets: vec![json!({ "path": "css/admin.css", "media": "screen" })],
            ..AdminSettings::default()
        }
    }

    pub(crate) fn generator(source: &str) -> Generator<InMemoryCatalog> {
        Generator::from_yaml("order", source, shop_catalog(), settings()).unwrap()
    }

    #[test]
    fn parses_sections() {
        let file = GeneratorFile::from_yaml(
            r#"
            generator: admingenerator.generator.propel
            params:
              model: Order
            builders:
              list:
                params:
                  display: [reference]
              edit:
                params: ~
              excel: ~
            "#
        )
        .unwrap();

        assert_eq!(file.generator, "admingenerator.generator.propel");
        assert_eq!(file.builders.keys().collect::<Vec<_>>(), ["list", "edit", "excel"]);
        assert_eq!(file.builder_params("list").unwrap()["display"], json!(["reference"]));
        assert!(file.builder_params("edit").unwrap().is_empty());
        assert!(file.builder_params("excel").is_none());
        assert!(file.builder_params("show").is_none());
    }

    #[test]
    fn empty_document_sections() {
        let file = GeneratorFile::from_yaml("params: ~\nbuilders: ~").unwrap();
        assert_eq!(file, GeneratorFile::default());
    }

    #[test]
    fn builder_variables_overlay_globals() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [reference]
              fields:
                reference: { label: Ref, help: Unique }
            builders:
              edit:
                params:
                  display: [reference, total]
                  fields:
                    reference: { label: Reference }
            "#
        );

        let edit = generator.builder(BuilderKind::Edit);
        assert_eq!(edit.variables().value("display"), &json!(["reference", "total"]));
        let reference = &edit.columns().unwrap()["reference"];
        assert_eq!(reference.label(), "Reference");
        assert_eq!(reference.help(), Some("Unique"));

        let show = generator.builder(BuilderKind::Show);
        assert_eq!(show.variables().value("display"), &json!(["reference"]));
        assert_eq!(show.columns().unwrap()["reference"].label(), "Ref");
    }

    #[test]
    fn global_lookup() {
        let generator = generator(
            r#"
            params:
              model: Order
              credentials: ROLE_ADMIN
              actions:
                new: { label: Create }
            "#
        );
        assert_eq!(generator.global("actions.new.label"), Some(&json!("Create")));
        assert_eq!(generator.global("actions.list"), None);
        assert_eq!(generator.global_credentials().as_deref(), Some("ROLE_ADMIN"));
        assert_eq!(
            generator
                .global_action_options("actions", "new")
                .unwrap()
                .unwrap()["label"],
            json!("Create")
        );
    }

    #[test]
    fn empty_credentials_are_ignored() {
        let generator = generator("params: { model: Order, credentials: '' }");
        assert_eq!(generator.global_credentials(), None);
    }

    #[test]
    fn builders_follow_declaration_order() {
        let generator = generator(
            r#"
            params: { model: Order }
            builders: { edit: ~, list: ~, nested_list: ~ }
            "#
        );
        let kinds: Vec<BuilderKind> = generator
            .builders()
            .unwrap()
            .iter()
            .map(Builder::kind)
            .collect();
        assert_eq!(kinds, [BuilderKind::Edit, BuilderKind::List, BuilderKind::NestedList]);
    }

    #[test]
    fn unknown_builder_key() {
        let generator = generator("builders: { index: ~ }");
        assert!(generator.builders().is_err());
    }

    #[test]
    fn template_comes_from_settings() {
        let generator = generator("params: { model: Order }");
        assert_eq!(generator.base_admin_template(), "admin/base.html");
        assert_eq!(generator.base_generator_name(), "order");
    }
}
