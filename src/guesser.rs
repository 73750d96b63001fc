// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata guesser.
//!
//! Answers type and relation questions about a model class given only its
//! identity and a (possibly dotted) field path. Every answer is derived from
//! the [`SchemaCatalog`] and memoized for the guesser's lifetime.
//!
//! # Architecture
//!
//! ```text
//! guesser.rs (coordinator: db/widget types, required, primary keys)
//! ├── cache.rs    - class → table, (class, field) → column memo
//! ├── db_type.rs  - DbType tag
//! ├── options.rs  - form/filter option synthesis
//! ├── path.rs     - dotted path resolution
//! └── sort.rs     - sort category table
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let guesser = FieldGuesser::new(catalog, &AdminSettings::default());
//!
//! let db_type = guesser.db_type("Article", "author")?;        // DbType::Model
//! let widget = guesser.form_type(&db_type, "Article", "author")?; // "model"
//! let options = guesser.form_options(&widget, &db_type, "Article", "author")?;
//! ```

mod cache;
mod db_type;
mod options;
mod path;
mod sort;

use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

pub use self::{
    cache::MetadataCache,
    db_type::DbType,
    options::WidgetPattern,
    path::ResolvedField,
    sort::SortType
};
use crate::{
    error::{AdminError, Result},
    schema::{ColumnMap, SchemaCatalog},
    settings::AdminSettings,
    translate::{StaticTranslator, Translator}
};

/// Widget used for form fields without a backing column.
pub const VIRTUAL_FORM_WIDGET: &str = "virtual_form";

/// Widget used for filter fields without a backing column.
pub const VIRTUAL_FILTER_WIDGET: &str = "virtual_filter";

/// Db type to widget lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetMap {
    entries:  IndexMap<DbType, String>,
    fallback: &'static str
}

impl WidgetMap {
    /// Build from configuration keys, parsing each key once.
    ///
    /// `fallback` is returned for virtual fields the mapping does not cover.
    #[must_use]
    pub fn from_config(config: &IndexMap<String, String>, fallback: &'static str) -> Self {
        Self {
            entries: config
                .iter()
                .map(|(key, widget)| (DbType::parse(key), widget.clone()))
                .collect(),
            fallback
        }
    }

    /// Widget for `db_type`, if mapped.
    #[must_use]
    pub fn get(&self, db_type: &DbType) -> Option<&str> {
        self.entries
            .get(db_type)
            .map(String::as_str)
            .or_else(|| db_type.is_virtual().then_some(self.fallback))
    }
}

/// Schema-driven field type guesser.
///
/// Owns its [`MetadataCache`]; create one per generation run and share it by
/// reference between builders.
pub struct FieldGuesser<C> {
    catalog:          C,
    cache:            MetadataCache,
    guess_required:   bool,
    default_required: bool,
    form_types:       WidgetMap,
    filter_types:     WidgetMap,
    translator:       Box<dyn Translator>
}

impl<C: SchemaCatalog> FieldGuesser<C> {
    /// Create a guesser over `catalog` with the given global settings.
    pub fn new(catalog: C, settings: &AdminSettings) -> Self {
        Self {
            catalog,
            cache: MetadataCache::new(),
            guess_required: settings.guess_required,
            default_required: settings.default_required,
            form_types: WidgetMap::from_config(&settings.form_types, VIRTUAL_FORM_WIDGET),
            filter_types: WidgetMap::from_config(&settings.filter_types, VIRTUAL_FILTER_WIDGET),
            translator: Box::new(StaticTranslator::default())
        }
    }

    /// Replace the translator used for boolean labels.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Memoized lookups performed so far.
    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }

    /// Every column of `class`, normalized to `underscore_separated` names.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownQuerySource`] for unknown classes.
    pub fn all_fields(&self, class: &str) -> Result<Vec<String>> {
        let table = self.cache.table(&self.catalog, class)?;
        Ok(table.columns.iter().map(ColumnMap::field_name).collect())
    }

    /// Db type of a field path.
    ///
    /// A leaf naming a to-one relation is `model`, a to-many relation
    /// `collection`; otherwise the column type, or `virtual` when there is no
    /// such column.
    ///
    /// # Errors
    ///
    /// Propagates path resolution and catalog errors.
    pub fn db_type(&self, model: &str, field_path: &str) -> Result<DbType> {
        let leaf = self.resolve(model, field_path)?;

        if let Some(relation) = self.relation(&leaf.class, &leaf.field)? {
            return Ok(if relation.cardinality.is_to_one() {
                DbType::Model
            } else {
                DbType::Collection
            });
        }

        let db_type = self
            .column(&leaf.class, &leaf.field)?
            .map_or(DbType::Virtual, |column| DbType::Column(column.column_type));
        trace!(model, field_path, %db_type, "guessed db type");
        Ok(db_type)
    }

    /// Sort category of a db type.
    #[must_use]
    pub fn sort_type(&self, db_type: &DbType) -> SortType {
        SortType::of(db_type)
    }

    /// Form widget of a db type.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvableFieldType`] when the type is neither
    /// mapped nor virtual.
    pub fn form_type(&self, db_type: &DbType, class: &str, field: &str) -> Result<String> {
        widget(&self.form_types, db_type, class, field)
    }

    /// Filter widget of a db type.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvableFieldType`] when the type is neither
    /// mapped nor virtual.
    pub fn filter_type(&self, db_type: &DbType, class: &str, field: &str) -> Result<String> {
        widget(&self.filter_types, db_type, class, field)
    }

    /// Whether a field of `class` is required.
    ///
    /// With guessing disabled this is the configured default; otherwise the
    /// column's NOT NULL constraint, `false` for non-columns.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors.
    pub fn is_required(&self, class: &str, field: &str) -> Result<bool> {
        if !self.guess_required {
            return Ok(self.default_required);
        }
        Ok(self
            .column(class, field)?
            .is_some_and(|column| column.not_null))
    }

    /// Mixed-case source name of a column of `class`.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors.
    pub fn php_name(&self, class: &str, field: &str) -> Result<Option<String>> {
        Ok(self.column(class, field)?.map(|column| column.php_name()))
    }

    /// Name of the sole primary key column of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoPrimaryKey`] for zero or composite keys.
    pub fn model_primary_key_name(&self, class: &str) -> Result<String> {
        let table = self.cache.table(&self.catalog, class)?;
        match table.primary_key_columns().as_slice() {
            [pk] => Ok(pk.field_name()),
            pks => Err(AdminError::NoPrimaryKey {
                class: class.to_owned(),
                found: pks.len()
            })
        }
    }

    /// Primary key of the class a relation leaf points to.
    ///
    /// A non-relation leaf has no primary key to link to and yields `None`.
    ///
    /// # Errors
    ///
    /// Propagates path resolution errors and [`AdminError::NoPrimaryKey`] for
    /// the related class.
    pub fn primary_key_for(&self, model: &str, field_path: &str) -> Result<Option<String>> {
        let leaf = self.resolve(model, field_path)?;
        match self.relation(&leaf.class, &leaf.field)? {
            Some(relation) => self.model_primary_key_name(relation.target_class()).map(Some),
            None => Ok(None)
        }
    }

    /// Whether the leaf of a field path is a primary key column.
    ///
    /// # Errors
    ///
    /// Propagates path resolution and catalog errors.
    pub fn is_primary_key(&self, model: &str, field_path: &str) -> Result<bool> {
        let leaf = self.resolve(model, field_path)?;
        Ok(self
            .column(&leaf.class, &leaf.field)?
            .is_some_and(|column| column.primary_key))
    }

    fn column(&self, class: &str, field: &str) -> Result<Option<Rc<ColumnMap>>> {
        self.cache.column(&self.catalog, class, field)
    }
}

fn widget(map: &WidgetMap, db_type: &DbType, class: &str, field: &str) -> Result<String> {
    map.get(db_type)
        .map(str::to_owned)
        .ok_or_else(|| AdminError::UnresolvableFieldType {
            db_type: db_type.to_string(),
            field:   field.to_owned(),
            class:   class.to_owned(),
            context: None
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::schema::{ColumnType, InMemoryCatalog, RelationMap, TableMap};

    pub(crate) fn shop_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_table(
                TableMap::new("Order", "shop_order")
                    .column(ColumnMap::new("id", ColumnType::Integer).primary_key())
                    .column(ColumnMap::new("reference", ColumnType::Varchar).not_null())
                    .column(ColumnMap::new("total", ColumnType::Decimal))
                    .column(
                        ColumnMap::new("status", ColumnType::Enum)
                            .not_null()
                            .with_value_set(["new", "paid", "shipped"])
                    )
                    .column(ColumnMap::new("paid", ColumnType::Boolean))
                    .column(ColumnMap::new("notes", ColumnType::LongVarchar))
                    .column(ColumnMap::new("payload", ColumnType::Object))
                    .column(ColumnMap::new("customer_id", ColumnType::Integer).not_null())
                    .relation(RelationMap::many_to_one("Customer", "Order", "Customer"))
                    .relation(RelationMap::one_to_many("Item", "Order", "OrderItem").with_plural("Items"))
            )
            .with_table(
                TableMap::new("Customer", "customer")
                    .column(ColumnMap::new("id", ColumnType::Integer).primary_key())
                    .column(ColumnMap::new("name", ColumnType::Varchar).not_null())
                    .column(ColumnMap::new("country_code", ColumnType::Char))
                    .relation(RelationMap::many_to_one("Country", "Customer", "Country"))
            )
            .with_table(
                TableMap::new("Country", "country")
                    .column(ColumnMap::new("code", ColumnType::Char).primary_key())
                    .column(ColumnMap::new("name", ColumnType::Varchar).not_null())
            )
            .with_table(
                TableMap::new("OrderItem", "order_item")
                    .column(ColumnMap::new("id", ColumnType::Integer).primary_key())
                    .column(ColumnMap::new("sku", ColumnType::Varchar).not_null())
                    .column(ColumnMap::new("quantity", ColumnType::Integer))
                    .relation(RelationMap::many_to_one("Order", "OrderItem", "Order"))
            )
            .with_table(
                TableMap::new("AuditLog", "audit_log")
                    .column(ColumnMap::new("message", ColumnType::Varchar))
            )
            .with_table(
                TableMap::new("Membership", "membership")
                    .column(ColumnMap::new("user_id", ColumnType::Integer).primary_key())
                    .column(ColumnMap::new("group_id", ColumnType::Integer).primary_key())
            )
    }

    pub(crate) fn guesser(catalog: InMemoryCatalog) -> FieldGuesser<InMemoryCatalog> {
        FieldGuesser::new(catalog, &AdminSettings::default())
    }

    #[test]
    fn all_fields_are_normalized_in_catalog_order() {
        let catalog = InMemoryCatalog::new().with_table(
            TableMap::new("Post", "post")
                .column(ColumnMap::new("id", ColumnType::Integer).primary_key())
                .column(ColumnMap::new("pub_flag", ColumnType::Boolean).with_php_name("IsPublished"))
                .column(ColumnMap::new("createdAt", ColumnType::Timestamp))
        );
        let guesser = guesser(catalog);
        assert_eq!(
            guesser.all_fields("Post").unwrap(),
            vec!["id", "is_published", "created_at"]
        );
    }

    #[test]
    fn db_type_of_columns_and_relations() {
        let guesser = guesser(shop_catalog());
        assert_eq!(
            guesser.db_type("Order", "reference").unwrap(),
            DbType::Column(ColumnType::Varchar)
        );
        assert_eq!(guesser.db_type("Order", "customer").unwrap(), DbType::Model);
        assert_eq!(guesser.db_type("Order", "items").unwrap(), DbType::Collection);
        assert_eq!(guesser.db_type("Order", "full_label").unwrap(), DbType::Virtual);
    }

    #[test]
    fn db_type_through_relations() {
        let guesser = guesser(shop_catalog());
        assert_eq!(
            guesser.db_type("Order", "customer.country.name").unwrap(),
            DbType::Column(ColumnType::Varchar)
        );
        assert_eq!(guesser.db_type("Order", "customer.country").unwrap(), DbType::Model);
        assert_eq!(
            guesser.db_type("Order", "items.quantity").unwrap(),
            DbType::Column(ColumnType::Integer)
        );
        assert_eq!(guesser.db_type("OrderItem", "order").unwrap(), DbType::Model);
    }

    #[test]
    fn widget_lookup() {
        let guesser = guesser(shop_catalog());
        let varchar = DbType::Column(ColumnType::Varchar);
        assert_eq!(guesser.form_type(&varchar, "Order", "reference").unwrap(), "text");
        assert_eq!(guesser.form_type(&DbType::Model, "Order", "customer").unwrap(), "model");
        assert_eq!(
            guesser.filter_type(&DbType::Collection, "Order", "items").unwrap(),
            "model"
        );
    }

    #[test]
    fn virtual_widgets_use_sentinels() {
        let guesser = guesser(shop_catalog());
        assert_eq!(
            guesser.form_type(&DbType::Virtual, "Order", "label").unwrap(),
            VIRTUAL_FORM_WIDGET
        );
        assert_eq!(
            guesser.filter_type(&DbType::Virtual, "Order", "label").unwrap(),
            VIRTUAL_FILTER_WIDGET
        );
    }

    #[test]
    fn configured_virtual_widget_wins_over_sentinel() {
        let mut settings = AdminSettings::default();
        settings.form_types.insert("virtual".into(), "readonly".into());
        let guesser = FieldGuesser::new(shop_catalog(), &settings);
        assert_eq!(
            guesser.form_type(&DbType::Virtual, "Order", "label").unwrap(),
            "readonly"
        );
    }

    #[test]
    fn unmapped_type_is_unresolvable() {
        let guesser = guesser(shop_catalog());
        let err = guesser
            .form_type(&DbType::Column(ColumnType::Object), "Order", "payload")
            .unwrap_err();
        match err {
            AdminError::UnresolvableFieldType {
                db_type,
                field,
                class,
                context
            } => {
                assert_eq!(db_type, "OBJECT");
                assert_eq!(field, "payload");
                assert_eq!(class, "Order");
                assert!(context.is_none());
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn required_follows_not_null() {
        let guesser = guesser(shop_catalog());
        assert!(guesser.is_required("Order", "reference").unwrap());
        assert!(!guesser.is_required("Order", "notes").unwrap());
        assert!(!guesser.is_required("Order", "not_a_column").unwrap());
    }

    #[test]
    fn required_default_when_guessing_disabled() {
        let settings = AdminSettings {
            guess_required: false,
            default_required: false,
            ..AdminSettings::default()
        };
        let guesser = FieldGuesser::new(shop_catalog(), &settings);
        assert!(!guesser.is_required("Order", "reference").unwrap());
    }

    #[test]
    fn primary_key_name() {
        let guesser = guesser(shop_catalog());
        assert_eq!(guesser.model_primary_key_name("Order").unwrap(), "id");
        assert_eq!(guesser.model_primary_key_name("Country").unwrap(), "code");
    }

    #[test]
    fn missing_or_composite_primary_key_fails() {
        let guesser = guesser(shop_catalog());
        assert!(matches!(
            guesser.model_primary_key_name("AuditLog"),
            Err(AdminError::NoPrimaryKey { found: 0, .. })
        ));
        assert!(matches!(
            guesser.model_primary_key_name("Membership"),
            Err(AdminError::NoPrimaryKey { found: 2, .. })
        ));
    }

    #[test]
    fn primary_key_for_relation_leaf() {
        let guesser = guesser(shop_catalog());
        assert_eq!(
            guesser.primary_key_for("Order", "customer").unwrap().as_deref(),
            Some("id")
        );
        assert_eq!(
            guesser.primary_key_for("Order", "customer.country").unwrap().as_deref(),
            Some("code")
        );
    }

    #[test]
    fn primary_key_for_non_relation_leaf_is_none() {
        let guesser = guesser(shop_catalog());
        assert_eq!(guesser.primary_key_for("Order", "reference").unwrap(), None);
        assert_eq!(guesser.primary_key_for("Order", "not_a_column").unwrap(), None);
    }

    #[test]
    fn leaf_primary_key_flag() {
        let guesser = guesser(shop_catalog());
        assert!(guesser.is_primary_key("Order", "id").unwrap());
        assert!(!guesser.is_primary_key("Order", "reference").unwrap());
        assert!(guesser.is_primary_key("Order", "customer.country.code").unwrap());
    }

    #[test]
    fn php_name_lookup() {
        let guesser = guesser(shop_catalog());
        assert_eq!(
            guesser.php_name("Order", "customer_id").unwrap().as_deref(),
            Some("CustomerId")
        );
        assert_eq!(guesser.php_name("Order", "ghost").unwrap(), None);
    }

    #[test]
    fn lookups_are_cached_per_class() {
        let guesser = guesser(shop_catalog());
        guesser.db_type("Order", "customer.country.name").unwrap();
        guesser.db_type("Order", "reference").unwrap();
        assert_eq!(guesser.cache().table_count(), 3);
    }
}
