// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-screen configuration compiler.
//!
//! A [`Builder`] turns the variables of one screen (`list`, `edit`, ...) into
//! the resolved model the rendering layer consumes:
//!
//! ```text
//! variables ──► Layout ──► field order ──► FieldGuesser ──► FieldDescriptor
//!                                             ▲                 │
//!                              fields.<name> overrides ─────────┘
//!
//! actions / object_actions ──► ActionRegistry ──► credentials ──► options
//! ```
//!
//! # Architecture
//!
//! ```text
//! builder.rs (coordinator: columns, fieldsets, actions)
//! ├── assets.rs  - stylesheets and javascripts
//! ├── config.rs  - merged builder variables
//! └── routes.rs  - namespace and route naming
//! ```
//!
//! Every collection is resolved on first access and cached for the
//! builder's lifetime; later calls return the same instance.

mod assets;
mod config;
mod routes;

use std::{cell::OnceCell, fmt, str::FromStr};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

pub use self::{
    assets::{DEFAULT_MEDIA, Javascript, RouteGenerator, Stylesheet},
    config::Variables
};
use crate::{
    descriptor::{ActionDescriptor, ActionScope, FieldDescriptor},
    error::{AdminError, BuilderContext, Result},
    generator::Generator,
    guesser::DbType,
    layout::{FieldsetEntry, Layout},
    schema::SchemaCatalog
};

/// Screen a builder compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    /// Paginated, filterable list.
    List,
    /// Tree list.
    NestedList,
    /// Read-only view of one object.
    Show,
    /// Creation form.
    New,
    /// Edition form.
    Edit,
    /// Spreadsheet export.
    Excel,
    /// Object and batch action handlers.
    Actions
}

impl BuilderKind {
    /// Every kind, in generation order.
    pub const ALL: [Self; 7] = [
        Self::List,
        Self::NestedList,
        Self::Show,
        Self::New,
        Self::Edit,
        Self::Excel,
        Self::Actions
    ];

    /// Key of the builder section in the generator file.
    #[must_use]
    pub const fn yaml_key(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::NestedList => "nested_list",
            Self::Show => "show",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Excel => "excel",
            Self::Actions => "actions"
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.yaml_key())
    }
}

impl FromStr for BuilderKind {
    type Err = AdminError;

    fn from_str(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.yaml_key() == key)
            .ok_or_else(|| AdminError::config(format!("builders.{key}"), "unknown builder"))
    }
}

/// Configuration compiler of one screen.
pub struct Builder<'g, C> {
    generator:      &'g Generator<C>,
    kind:           BuilderKind,
    variables:      Variables,
    layout:         OnceCell<Layout>,
    columns:        OnceCell<IndexMap<String, FieldDescriptor>>,
    actions:        OnceCell<IndexMap<String, ActionDescriptor>>,
    object_actions: OnceCell<IndexMap<String, ActionDescriptor>>
}

impl<'g, C: SchemaCatalog> Builder<'g, C> {
    pub(crate) fn new(generator: &'g Generator<C>, kind: BuilderKind, variables: Variables) -> Self {
        Self {
            generator,
            kind,
            variables,
            layout: OnceCell::new(),
            columns: OnceCell::new(),
            actions: OnceCell::new(),
            object_actions: OnceCell::new()
        }
    }

    /// Owning generator.
    #[must_use]
    pub fn generator(&self) -> &'g Generator<C> {
        self.generator
    }

    /// Screen compiled by this builder.
    #[must_use]
    pub fn kind(&self) -> BuilderKind {
        self.kind
    }

    /// Key of the builder section (`list`, `edit`, ...).
    #[must_use]
    pub fn yaml_key(&self) -> &'static str {
        self.kind.yaml_key()
    }

    /// Merged builder variables.
    #[must_use]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Name of the generator this builder belongs to.
    #[must_use]
    pub fn base_generator_name(&self) -> &'g str {
        self.generator.base_generator_name()
    }

    /// Base template every admin screen extends.
    #[must_use]
    pub fn base_admin_template(&self) -> &'g str {
        self.generator.base_admin_template()
    }

    /// Model class of the screen.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] when `model` is not set.
    pub fn model(&self) -> Result<&str> {
        self.variables.required_string("model")
    }

    /// Name of the model's primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoPrimaryKey`] for zero or composite keys.
    pub fn model_primary_key_name(&self) -> Result<String> {
        self.generator
            .guesser()
            .model_primary_key_name(self.model()?)
    }

    /// Resolved display layout.
    ///
    /// # Errors
    ///
    /// Propagates layout parse errors and catalog errors.
    pub fn layout(&self) -> Result<&Layout> {
        if let Some(layout) = self.layout.get() {
            return Ok(layout);
        }
        let layout = Layout::resolve(
            self.variables.value("display"),
            self.variables.value("tabs"),
            || self.generator.guesser().all_fields(self.model()?)
        )?;
        Ok(self.layout.get_or_init(|| layout))
    }

    /// Resolved fields, keyed by name, in display order.
    ///
    /// # Errors
    ///
    /// Fails on the first field that cannot be resolved; unresolvable field
    /// types carry this builder's identity.
    pub fn columns(&self) -> Result<&IndexMap<String, FieldDescriptor>> {
        if let Some(columns) = self.columns.get() {
            return Ok(columns);
        }
        let columns = self
            .find_columns()
            .map_err(|err| err.with_builder_context(self.context()))?;
        debug!(
            builder = self.yaml_key(),
            generator = self.base_generator_name(),
            count = columns.len(),
            "resolved columns"
        );
        Ok(self.columns.get_or_init(|| columns))
    }

    /// Resolved fields named anywhere in `selector`.
    ///
    /// The selector is a field name or any nesting of lists and mappings of
    /// names (a tab, a fieldset, a row). The result follows the order of
    /// [`Builder::columns`]; names without a resolved field are skipped.
    ///
    /// # Errors
    ///
    /// Propagates [`Builder::columns`] errors.
    pub fn columns_for(&self, selector: &Value) -> Result<Vec<&FieldDescriptor>> {
        let mut names = Vec::new();
        collect_names(selector, &mut names);

        let columns = self.columns()?;
        for name in names.iter().filter(|name| !columns.contains_key(**name)) {
            trace!(builder = self.yaml_key(), field = %name, "dropped stale layout reference");
        }

        Ok(columns
            .values()
            .filter(|column| names.contains(&column.name()))
            .collect())
    }

    /// Column groups of every field, concatenated in field order.
    ///
    /// # Errors
    ///
    /// Propagates [`Builder::columns`] errors.
    pub fn column_groups(&self) -> Result<Vec<String>> {
        Ok(self
            .columns()?
            .values()
            .flat_map(|column| column.groups().iter().cloned())
            .collect())
    }

    /// Fieldset to rows tree of the display layout.
    ///
    /// # Errors
    ///
    /// Propagates [`Builder::layout`] errors.
    pub fn fieldsets(&self) -> Result<IndexMap<String, Vec<Vec<String>>>> {
        Ok(self.layout()?.fieldsets())
    }

    /// Fieldset to entries tree of the display layout, keeping loose fields
    /// apart from rows.
    ///
    /// # Errors
    ///
    /// Propagates [`Builder::layout`] errors.
    pub fn fieldset_entries(&self) -> Result<IndexMap<String, Vec<FieldsetEntry>>> {
        Ok(self.layout()?.fieldset_entries())
    }

    /// List-level actions, keyed by name, in declaration order.
    ///
    /// Each name is looked up among generic then object implementations and
    /// falls back to a bare descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] or
    /// [`AdminError::InvalidOption`] for malformed action configuration.
    pub fn actions(&self) -> Result<&IndexMap<String, ActionDescriptor>> {
        if let Some(actions) = self.actions.get() {
            return Ok(actions);
        }
        let actions = self.find_actions("actions", &[ActionScope::Generic, ActionScope::Object])?;
        Ok(self.actions.get_or_init(|| actions))
    }

    /// Per-object actions, keyed by name, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] or
    /// [`AdminError::InvalidOption`] for malformed action configuration.
    pub fn object_actions(&self) -> Result<&IndexMap<String, ActionDescriptor>> {
        if let Some(actions) = self.object_actions.get() {
            return Ok(actions);
        }
        let actions = self.find_actions("object_actions", &[ActionScope::Object])?;
        Ok(self.object_actions.get_or_init(|| actions))
    }

    /// Specialized generic action named `name`.
    ///
    /// # Errors
    ///
    /// Propagates route helper errors.
    pub fn find_generic_action(&self, name: &str) -> Result<Option<ActionDescriptor>> {
        self.find_action(ActionScope::Generic, name)
    }

    /// Specialized object action named `name`.
    ///
    /// # Errors
    ///
    /// Propagates route helper errors.
    pub fn find_object_action(&self, name: &str) -> Result<Option<ActionDescriptor>> {
        self.find_action(ActionScope::Object, name)
    }

    /// Specialized batch action named `name`.
    ///
    /// Batch actions are not enumerated; each call builds a fresh descriptor
    /// without credential inheritance or option overrides.
    ///
    /// # Errors
    ///
    /// Propagates route helper errors.
    pub fn find_batch_action(&self, name: &str) -> Result<Option<ActionDescriptor>> {
        self.find_action(ActionScope::Batch, name)
    }

    /// Stylesheets of the admin settings followed by the builder's own.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for malformed entries.
    pub fn stylesheets(&self) -> Result<Vec<Stylesheet>> {
        let mut stylesheets = Vec::new();
        assets::stylesheets(
            "admin.stylesheets",
            &self.generator.settings().stylesheets,
            &mut stylesheets
        )?;
        assets::stylesheets("stylesheets", self.variables.list("stylesheets")?, &mut stylesheets)?;
        Ok(stylesheets)
    }

    /// Javascripts of the admin settings followed by the builder's own.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidConfiguration`] for malformed entries and
    /// [`AdminError::UnknownRoute`] for routes that cannot be generated.
    pub fn javascripts(&self) -> Result<Vec<Javascript>> {
        let router = self.generator.router();
        let mut javascripts = Vec::new();
        assets::javascripts(
            "admin.javascripts",
            &self.generator.settings().javascripts,
            router,
            &mut javascripts
        )?;
        assets::javascripts(
            "javascripts",
            self.variables.list("javascripts")?,
            router,
            &mut javascripts
        )?;
        Ok(javascripts)
    }

    fn context(&self) -> BuilderContext {
        BuilderContext {
            builder:   self.yaml_key().to_owned(),
            generator: self.base_generator_name().to_owned()
        }
    }

    fn find_columns(&self) -> Result<IndexMap<String, FieldDescriptor>> {
        let mut columns = IndexMap::new();
        for name in self.layout()?.field_names() {
            let column = self.create_column(&name)?;
            columns.insert(name, column);
        }
        Ok(columns)
    }

    fn create_column(&self, name: &str) -> Result<FieldDescriptor> {
        let model = self.model()?;
        let guesser = self.generator.guesser();
        let overrides = self.variables.field_options(name)?;
        let option = |key: &str| {
            overrides
                .and_then(|options| options.get(key))
                .filter(|value| !value.is_null())
        };
        let text = |key: &str, value: &Value| {
            value
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| AdminError::option(name, key, "expected a string"))
        };

        let owner = guesser.resolve(model, name)?.class;

        let db_type = match option("dbType") {
            Some(value) => DbType::parse(&text("dbType", value)?),
            None => guesser.db_type(model, name)?
        };
        let form_type = match option("formType") {
            Some(value) => text("formType", value)?,
            None => guesser.form_type(&db_type, &owner, name)?
        };
        let filter_type = match option("filterType") {
            Some(value) => text("filterType", value)?,
            None => guesser.filter_type(&db_type, &owner, name)?
        };

        let mut column = FieldDescriptor::new(name, db_type, form_type, filter_type);

        if option("formOptions").is_none() {
            let widget = match self.kind {
                BuilderKind::List => column.filter_type(),
                _ => column.form_type()
            };
            let options = guesser.form_options(widget, column.db_type(), model, name)?;
            column.set_form_options(options);
        }
        if option("filterOptions").is_none() {
            let options =
                guesser.filter_options(column.filter_type(), column.db_type(), model, name)?;
            column.set_filter_options(options);
        }
        if option("primaryKey").is_none() {
            column.set_primary_key(guesser.primary_key_for(model, name)?);
        }
        column.set_is_primary_key(guesser.is_primary_key(model, name)?);

        if let Some(overrides) = overrides {
            for (option, value) in overrides {
                column.set_property(option, value)?;
            }
        }

        trace!(
            builder = self.yaml_key(),
            field = name,
            db_type = %column.db_type(),
            form_type = column.form_type(),
            "created column"
        );
        Ok(column)
    }

    fn find_action(&self, scope: ActionScope, name: &str) -> Result<Option<ActionDescriptor>> {
        let ctx = self.action_context()?;
        Ok(self.generator.registry().find(scope, name, &ctx))
    }

    fn find_actions(
        &self,
        section: &str,
        scopes: &[ActionScope]
    ) -> Result<IndexMap<String, ActionDescriptor>> {
        let ctx = self.action_context()?;
        let registry = self.generator.registry();
        let credentials = self.generator.global_credentials();
        let fallback_scope = scopes.first().copied().unwrap_or(ActionScope::Generic);

        let mut actions = IndexMap::new();
        for (name, options) in self.variables.action_entries(section)? {
            let mut action = scopes
                .iter()
                .find_map(|scope| registry.find(*scope, &name, &ctx))
                .unwrap_or_else(|| {
                    trace!(section, action = %name, "bare action");
                    ActionDescriptor::new(name.as_str(), fallback_scope)
                });

            if let Some(credentials) = &credentials {
                action.set_credentials(Some(credentials.clone()));
            }

            let global = self.generator.global_action_options(section, &name)?;
            if let Some(options) = options.as_ref().or(global.as_ref()) {
                action.apply(options)?;
            }

            actions.insert(name, action);
        }

        debug!(
            builder = self.yaml_key(),
            section,
            count = actions.len(),
            "resolved actions"
        );
        Ok(actions)
    }
}

impl<C> fmt::Debug for Builder<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("kind", &self.kind)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

fn collect_names<'v>(selector: &'v Value, names: &mut Vec<&'v str>) {
    match selector {
        Value::String(name) => names.push(name),
        Value::Array(items) => items.iter().for_each(|item| collect_names(item, names)),
        Value::Object(map) => map.values().for_each(|item| collect_names(item, names)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::generator::tests::generator;

    #[test]
    fn kind_keys_round_trip() {
        for kind in BuilderKind::ALL {
            assert_eq!(kind.yaml_key().parse::<BuilderKind>().unwrap(), kind);
        }
        assert!("index".parse::<BuilderKind>().is_err());
    }

    #[test]
    fn columns_follow_display_order() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [status, reference, customer]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let names: Vec<&String> = builder.columns().unwrap().keys().collect();
        assert_eq!(names, ["status", "reference", "customer"]);
    }

    #[test]
    fn columns_default_to_every_field() {
        let generator = generator("params: { model: Country }");
        let builder = generator.builder(BuilderKind::Show);
        let names: Vec<&String> = builder.columns().unwrap().keys().collect();
        assert_eq!(names, ["code", "name"]);
        assert!(builder.columns().unwrap()["code"].is_primary_key());
    }

    #[test]
    fn list_builder_uses_filter_widget_for_form_options() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [paid]
            "#
        );
        let list = generator.builder(BuilderKind::List);
        let edit = generator.builder(BuilderKind::Edit);

        let list_paid = &list.columns().unwrap()["paid"];
        let edit_paid = &edit.columns().unwrap()["paid"];
        assert_eq!(list_paid.filter_type(), "choice");
        assert_eq!(list_paid.form_options()["empty_value"], json!("Yes or No"));
        assert_eq!(edit_paid.form_type(), "checkbox");
        assert_eq!(Value::Object(edit_paid.form_options().clone()), json!({ "required": false }));
    }

    #[test]
    fn overrides_replace_guesses() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [reference, full_label]
              fields:
                reference:
                  label: Order number
                  formOptions: { attr: { maxlength: 16 } }
                  localizedDate: short
                full_label:
                  dbType: VARCHAR
                  groups: [summary]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let columns = builder.columns().unwrap();

        let reference = &columns["reference"];
        assert_eq!(reference.label(), "Order number");
        assert_eq!(
            Value::Object(reference.form_options().clone()),
            json!({ "attr": { "maxlength": 16 } })
        );
        assert_eq!(reference.properties()["localizedDate"], json!("short"));

        let label = &columns["full_label"];
        assert_eq!(label.form_type(), "text");
        assert_eq!(builder.column_groups().unwrap(), vec!["summary"]);
    }

    #[test]
    fn virtual_field_gets_sentinel_widgets() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [full_label]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let column = &builder.columns().unwrap()["full_label"];
        assert_eq!(column.db_type(), &DbType::Virtual);
        assert_eq!(column.form_type(), "virtual_form");
        assert!(column.form_options().is_empty());
        assert_eq!(column.primary_key(), None);
    }

    #[test]
    fn relation_column_links_primary_key() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [customer, customer.country]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let columns = builder.columns().unwrap();
        assert_eq!(columns["customer"].primary_key(), Some("id"));
        assert_eq!(columns["customer.country"].primary_key(), Some("code"));
        assert_eq!(columns["customer"].form_options()["class"], json!("Customer"));
    }

    #[test]
    fn unmapped_type_names_builder() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [payload]
            "#
        );
        let builder = generator.builder(BuilderKind::New);
        let err = builder.columns().unwrap_err();
        match err {
            AdminError::UnresolvableFieldType {
                db_type,
                field,
                class,
                context: Some(context)
            } => {
                assert_eq!(db_type, "OBJECT");
                assert_eq!(field, "payload");
                assert_eq!(class, "Order");
                assert_eq!(context.builder, "new");
                assert_eq!(context.generator, "order");
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn unmapped_type_names_owning_class_of_path() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [customer.name]
              fields:
                customer.name: { dbType: OBJECT }
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        match builder.columns().unwrap_err() {
            AdminError::UnresolvableFieldType { field, class, .. } => {
                assert_eq!(field, "customer.name");
                assert_eq!(class, "Customer");
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn column_groups_keep_field_order_and_repeats() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [id, reference, customer_id]
              fields:
                id: { groups: [a, b] }
                customer_id: { groups: [b] }
            "#
        );
        let builder = generator.builder(BuilderKind::List);
        assert_eq!(builder.column_groups().unwrap(), vec!["a", "b", "b"]);
    }

    #[test]
    fn fieldset_entries_keep_loose_fields() {
        let generator = generator(
            r#"
            params:
              model: Order
              display:
                General: [[reference, status], paid]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let entries = builder.fieldset_entries().unwrap();
        assert_eq!(
            entries["General"],
            vec![
                FieldsetEntry::Row(vec!["reference".into(), "status".into()]),
                FieldsetEntry::Field("paid".into()),
            ]
        );
        assert_eq!(entries["General"][1].key(), Some("paid"));
        assert_eq!(entries["General"][0].key(), None);
    }

    #[test]
    fn invalid_association_is_reported() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [reference.length]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        assert!(matches!(
            builder.columns().unwrap_err(),
            AdminError::InvalidAssociationSegment { .. }
        ));
    }

    #[test]
    fn missing_model_is_a_configuration_error() {
        let generator = generator("params: { display: [title] }");
        let builder = generator.builder(BuilderKind::Edit);
        assert!(matches!(
            builder.columns().unwrap_err(),
            AdminError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn columns_for_nested_selectors() {
        let generator = generator(
            r#"
            params:
              model: Order
              display: [reference, status, total, paid]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);

        let selected = builder
            .columns_for(&json!({ "General": [["paid", "gone"], "reference"] }))
            .unwrap();
        let names: Vec<&str> = selected.iter().map(|column| column.name()).collect();
        assert_eq!(names, ["reference", "paid"]);

        let single = builder.columns_for(&json!("status")).unwrap();
        assert_eq!(single.len(), 1);
        assert!(builder.columns_for(&json!("unknown")).unwrap().is_empty());
    }

    #[test]
    fn find_batch_action_is_not_cached() {
        let generator = generator(
            r#"
            params:
              model: Order
              credentials: ROLE_ADMIN
            "#
        );
        let builder = generator.builder(BuilderKind::Actions);
        let first = builder.find_batch_action("delete").unwrap().unwrap();
        let second = builder.find_batch_action("delete").unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.credentials(), None);
        assert!(builder.find_batch_action("archive").unwrap().is_none());
    }

    #[test]
    fn object_actions_search_only_object_scope() {
        let generator = generator(
            r#"
            params:
              model: Order
              actions: [new, edit]
              object_actions: [new, edit]
            "#
        );
        let builder = generator.builder(BuilderKind::List);

        let actions = builder.actions().unwrap();
        assert_eq!(actions["new"].scope(), ActionScope::Generic);
        assert_eq!(actions["edit"].scope(), ActionScope::Object);
        assert!(actions["edit"].route().is_some());

        let object_actions = builder.object_actions().unwrap();
        assert_eq!(object_actions["new"].route(), None);
        assert_eq!(object_actions["new"].label(), "New");
    }

    #[test]
    fn stylesheets_and_javascripts_concatenate() {
        let generator = generator(
            r#"
            params:
              model: Order
              stylesheets: [css/order.css]
              javascripts: [{ path: js/order.js }]
            "#
        );
        let builder = generator.builder(BuilderKind::Edit);
        let stylesheets = builder.stylesheets().unwrap();
        assert_eq!(
            stylesheets,
            vec![
                Stylesheet {
                    path:  "css/admin.css".into(),
                    media: "screen".into()
                },
                Stylesheet {
                    path:  "css/order.css".into(),
                    media: DEFAULT_MEDIA.into()
                },
            ]
        );
        let javascripts = builder.javascripts().unwrap();
        assert_eq!(javascripts.len(), 1);
        assert_eq!(javascripts[0].path, "js/order.js");
    }

    #[test]
    fn route_helpers() {
        let generator = generator(
            r#"
            params:
              model: Order
              namespace_prefix: 'Acme\Shop'
              subfolder: Admin
              bundle_name: ShopBundle
            "#
        );
        let builder = generator.builder(BuilderKind::List);
        assert_eq!(builder.namespace_prefix_with_subfolder().unwrap(), "Acme\\Shop\\Admin");
        assert_eq!(builder.route_prefix_with_subfolder().unwrap(), "Acme_Shop_Admin");
        assert_eq!(builder.namespace_prefix_for_template().unwrap(), "AcmeShop");
        assert_eq!(builder.base_actions_route().unwrap(), "Acme_Shop_Admin_ShopBundle_order");
        assert_eq!(
            builder.object_actions_route().unwrap(),
            "Acme_Shop_Admin_ShopBundle_order_object"
        );
    }

    #[test]
    fn route_helpers_without_subfolder() {
        let generator = generator(
            r#"
            params:
              model: Order
              namespace_prefix: Acme
              bundle_name: ShopBundle
            "#
        );
        let builder = generator.builder(BuilderKind::List);
        assert_eq!(builder.namespace_prefix_with_subfolder().unwrap(), "Acme");
        assert_eq!(builder.base_actions_route().unwrap(), "Acme_ShopBundle_order");
    }
}
