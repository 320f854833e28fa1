//! Entity-level resolution
//!
//! Ties the individual resolvers together for one `<class>` or subclass
//! element: naming, inheritance strategy, table source, caching, custom SQL,
//! meta attributes and the value sources of each attribute.

use std::sync::Arc;

use crate::caching::{CachingHolder, create_caching_holder};
use crate::context::LocalBindingContext;
use crate::custom_sql::{CustomSql, build_custom_sql};
use crate::elements::{EntityElement, PropertyElement};
use crate::error::{MappingError, MappingResult};
use crate::inheritance::{InheritanceType, interpret_inheritance_type};
use crate::meta::{MetaAttributeContext, extract_meta_attribute_context};
use crate::naming::{
    SchemaName, determine_database_schema_name, entity_name_of, property_accessor_name,
    qualify_if_needed,
};
use crate::table::{TableSource, create_table_source};
use crate::type_source::ExplicitTypeSource;
use crate::value_source::{
    ColumnSource, PropertyValueSources, TimestampValueSources, TruthValue, ValueSource,
    ValueSourcesAdapter, build_value_sources,
};

/// Resolved attribute of an entity
#[derive(Debug, Clone)]
pub struct AttributeSource {
    pub name: String,
    pub accessor_name: String,
    pub type_source: ExplicitTypeSource,
    /// Attribute-level meta context, child of the entity's
    pub meta_context: Arc<MetaAttributeContext>,
    /// Never empty: an attribute without explicit mapping gets a column named
    /// after itself
    pub value_sources: Vec<ValueSource>,
}

/// Resolved entity mapping
#[derive(Debug)]
pub struct EntitySource {
    pub entity_name: String,
    /// Qualified class name, if the entity is backed by a class
    pub class_name: Option<String>,
    pub inheritance: InheritanceType,
    pub schema_name: SchemaName,
    pub table: TableSource,
    pub caching: CachingHolder,
    pub custom_insert: Option<CustomSql>,
    pub custom_update: Option<CustomSql>,
    pub custom_delete: Option<CustomSql>,
    pub meta_context: Arc<MetaAttributeContext>,
    pub attributes: Vec<AttributeSource>,
}

impl EntitySource {
    /// Resolve an entity element.
    ///
    /// `parent_meta` is the meta context of the enclosing level (the mapping
    /// document for a root class, the superclass for a subclass).
    pub fn resolve(
        element: &EntityElement,
        context: &LocalBindingContext,
        parent_meta: &Arc<MetaAttributeContext>,
    ) -> MappingResult<Self> {
        let defaults = context.mapping_defaults();
        let package = defaults.package_name.as_deref();

        let entity_name = entity_name_of(element, package).ok_or_else(|| {
            context.make_mapping_error(format!(
                "<{}> must declare either a class name or an entity-name",
                element.kind.element_name()
            ))
        })?;
        let class_name = qualify_if_needed(element.name.as_deref(), package);
        let inheritance = interpret_inheritance_type(element);
        tracing::debug!(entity = %entity_name, inheritance = %inheritance, "Resolving entity");

        let schema_name = determine_database_schema_name(
            element.schema.as_deref(),
            element.catalog.as_deref(),
            context,
        );
        let view_name = entity_name.clone();
        let table = create_table_source(element, &move || view_name.clone());
        let caching = create_caching_holder(element.cache.clone(), entity_name.clone());

        let located = |e: MappingError| e.with_origin(context.origin());
        let custom_insert = build_custom_sql(element.sql_insert.as_ref()).map_err(located)?;
        let custom_update = build_custom_sql(element.sql_update.as_ref()).map_err(located)?;
        let custom_delete = build_custom_sql(element.sql_delete.as_ref()).map_err(located)?;

        let meta_context = Arc::new(extract_meta_attribute_context(
            &element.meta,
            false,
            parent_meta,
        ));

        let mut attributes = Vec::with_capacity(element.properties.len() + 1);
        for property in &element.properties {
            attributes.push(resolve_property(property, context, &meta_context)?);
        }
        if let Some(timestamp) = &element.timestamp {
            let adapter = TimestampValueSources::new(timestamp);
            attributes.push(AttributeSource {
                name: timestamp.name.clone(),
                accessor_name: property_accessor_name(
                    timestamp.access.as_deref(),
                    false,
                    &defaults.property_accessor_name,
                ),
                type_source: ExplicitTypeSource {
                    name: Some("timestamp".to_string()),
                    parameters: None,
                },
                meta_context: Arc::new(MetaAttributeContext::with_parent(Arc::clone(&meta_context))),
                value_sources: value_sources_or_default(context, &adapter, &timestamp.name)?,
            });
        }

        Ok(Self {
            entity_name,
            class_name,
            inheritance,
            schema_name,
            table,
            caching,
            custom_insert,
            custom_update,
            custom_delete,
            meta_context,
            attributes,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSource> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

fn resolve_property(
    property: &PropertyElement,
    context: &LocalBindingContext,
    entity_meta: &Arc<MetaAttributeContext>,
) -> MappingResult<AttributeSource> {
    let adapter = PropertyValueSources::new(property);
    Ok(AttributeSource {
        name: property.name.clone(),
        accessor_name: property_accessor_name(
            property.access.as_deref(),
            false,
            &context.mapping_defaults().property_accessor_name,
        ),
        type_source: ExplicitTypeSource::resolve(
            property.type_name.as_deref(),
            property.type_element.as_ref(),
        ),
        meta_context: Arc::new(extract_meta_attribute_context(&property.meta, false, entity_meta)),
        value_sources: value_sources_or_default(context, &adapter, &property.name)?,
    })
}

/// Value sources of an attribute, falling back to a single column named after
/// the attribute when nothing was declared
fn value_sources_or_default(
    context: &LocalBindingContext,
    adapter: &dyn ValueSourcesAdapter,
    attribute_name: &str,
) -> MappingResult<Vec<ValueSource>> {
    let sources = build_value_sources(context, adapter)?;
    if !sources.is_empty() {
        return Ok(sources);
    }

    tracing::trace!(attribute = attribute_name, "Using implicit column");
    let nullable = if adapter.is_force_not_null() {
        TruthValue::False
    } else {
        TruthValue::Unknown
    };
    let column = ColumnSource::named(
        adapter.containing_table_name().map(str::to_string),
        attribute_name,
    )
    .with_inclusion(
        TruthValue::from_bool(adapter.is_included_in_insert_by_default()),
        TruthValue::from_bool(adapter.is_included_in_update_by_default()),
    )
    .with_nullable(nullable);
    Ok(vec![ValueSource::Column(column)])
}
