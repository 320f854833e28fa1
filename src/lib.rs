//! hbm-source - normalization of hbm-style XML mapping descriptions
//!
//! Translates the raw, deliberately permissive mapping elements of a persistent
//! entity into one canonical source model:
//! - Value sources (columns/formulas) with insert, update and nullability policy
//! - Table sources (physical tables or inline views)
//! - Inheritance strategy
//! - Caching policy and custom SQL overrides
//! - Inherited meta-attribute contexts
//! - Identifier, entity-name and cascade defaulting
//!
//! Parsing XML text is left to the caller; the optional `hbm-xml` feature
//! offers a `quick-xml` based deserializer for the raw elements.

pub mod cascade;
pub mod caching;
pub mod config;
pub mod context;
pub mod custom_sql;
pub mod deferred;
pub mod elements;
pub mod entity;
pub mod error;
pub mod inheritance;
pub mod meta;
pub mod naming;
pub mod table;
pub mod type_source;
pub mod value_source;
pub mod values;
#[cfg(feature = "hbm-xml")]
pub mod xml;

// Re-export commonly used types
pub use caching::{AccessType, Caching, CachingHolder, create_caching_holder};
pub use config::MappingDefaults;
pub use context::{LocalBindingContext, Origin, SourceType};
pub use custom_sql::{CustomSql, ResultCheckStyle, build_custom_sql};
pub use deferred::Deferred;
pub use entity::{AttributeSource, EntitySource};
pub use error::{MappingError, MappingResult};
pub use inheritance::{InheritanceType, interpret_inheritance_type};
pub use meta::{MetaAttribute, MetaAttributeContext, extract_meta_attribute_context};
pub use naming::{
    Identifier, SchemaName, determine_database_schema_name, determine_entity_name,
    qualify_if_needed, resolve_identifier,
};
pub use table::{InlineViewNameInferrer, TableSource, create_table_source};
pub use value_source::{
    ColumnSource, FormulaSource, TruthValue, ValueSource, ValueSourcesAdapter,
    build_value_sources,
};
