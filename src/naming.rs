//! Identifier and entity-name resolution

use serde::{Deserialize, Serialize};

use crate::context::LocalBindingContext;
use crate::elements::EntityElement;
use crate::values::string_value;

const QUOTE: char = '`';

/// A database object name, remembering whether it must be quoted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    text: String,
    quoted: bool,
}

impl Identifier {
    pub fn new(text: impl Into<String>, quoted: bool) -> Self {
        Self {
            text: text.into(),
            quoted,
        }
    }

    /// Build an identifier from raw mapping text.
    ///
    /// Returns `None` for an absent or empty name. Surrounding whitespace is
    /// trimmed and a back-tick quoted name yields a quoted identifier.
    pub fn to_identifier(name: Option<&str>) -> Option<Identifier> {
        let trimmed = name?.trim();
        if trimmed.is_empty() {
            return None;
        }
        if is_quoted(trimmed) {
            let bare = &trimmed[1..trimmed.len() - 1];
            Some(Identifier::new(bare, true))
        } else {
            Some(Identifier::new(trimmed, false))
        }
    }

    /// Name without quoting markers
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quoted {
            write!(f, "{QUOTE}{}{QUOTE}", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

fn is_quoted(name: &str) -> bool {
    name.len() >= 2 && name.starts_with(QUOTE) && name.ends_with(QUOTE)
}

/// Wrap a name in quoting markers unless it is empty or already quoted
pub fn quote(name: &str) -> String {
    if name.is_empty() || is_quoted(name) {
        name.to_string()
    } else {
        format!("{QUOTE}{name}{QUOTE}")
    }
}

/// Schema and catalog of a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaName {
    pub schema: Option<Identifier>,
    pub catalog: Option<Identifier>,
}

/// Pick the explicit name when it is non-empty, else the default, quoting it when
/// identifiers are globally quoted
pub fn resolve_identifier(
    explicit_name: Option<&str>,
    default_name: Option<&str>,
    global_quoting: bool,
) -> Option<Identifier> {
    let name = match explicit_name.map(str::trim) {
        Some(explicit) if !explicit.is_empty() => Some(explicit),
        _ => default_name.map(str::trim),
    };
    if global_quoting {
        let quoted = name.map(quote);
        Identifier::to_identifier(quoted.as_deref())
    } else {
        Identifier::to_identifier(name)
    }
}

/// Resolve schema and catalog independently against the document defaults
pub fn determine_database_schema_name(
    explicit_schema_name: Option<&str>,
    explicit_catalog_name: Option<&str>,
    context: &LocalBindingContext,
) -> SchemaName {
    let defaults = context.mapping_defaults();
    let quoted = context.is_globally_quoted_identifiers();
    SchemaName {
        schema: resolve_identifier(explicit_schema_name, defaults.schema_name.as_deref(), quoted),
        catalog: resolve_identifier(
            explicit_catalog_name,
            defaults.catalog_name.as_deref(),
            quoted,
        ),
    }
}

/// Qualify a class name with the package when it is not qualified already.
///
/// Returns `None` only when `name` is `None`.
pub fn qualify_if_needed(name: Option<&str>, unqualified_class_package: Option<&str>) -> Option<String> {
    let name = name?;
    match unqualified_class_package {
        Some(package) if !name.contains('.') => Some(format!("{}.{}", package, name)),
        _ => Some(name.to_string()),
    }
}

/// The explicit entity name, else the (qualified) class name
pub fn determine_entity_name(
    entity_name: Option<&str>,
    class_name: Option<&str>,
    unqualified_class_package: Option<&str>,
) -> Option<String> {
    match entity_name {
        Some(name) => Some(name.to_string()),
        None => qualify_if_needed(class_name, unqualified_class_package),
    }
}

/// [`determine_entity_name`] for an entity mapping element
pub fn entity_name_of(element: &EntityElement, unqualified_class_package: Option<&str>) -> Option<String> {
    determine_entity_name(
        element.entity_name.as_deref(),
        element.name.as_deref(),
        unqualified_class_package,
    )
}

/// Accessor strategy for a property; embedded components always use `embedded`
/// unless an explicit access is given
pub fn property_accessor_name(access: Option<&str>, is_embedded: bool, default_access: &str) -> String {
    let fallback = if is_embedded { "embedded" } else { default_access };
    string_value(access, fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MappingDefaults;
    use crate::context::Origin;

    #[test]
    fn test_qualify_if_needed() {
        assert_eq!(
            qualify_if_needed(Some("Foo"), Some("com.example")).as_deref(),
            Some("com.example.Foo")
        );
        assert_eq!(
            qualify_if_needed(Some("com.example.Foo"), Some("other.pkg")).as_deref(),
            Some("com.example.Foo")
        );
        assert_eq!(qualify_if_needed(None, Some("pkg")), None);
        assert_eq!(qualify_if_needed(Some("Foo"), None).as_deref(), Some("Foo"));
    }

    #[test]
    fn test_determine_entity_name() {
        assert_eq!(
            determine_entity_name(Some("OrderEntity"), Some("Order"), Some("com.shop")).as_deref(),
            Some("OrderEntity")
        );
        assert_eq!(
            determine_entity_name(None, Some("Order"), Some("com.shop")).as_deref(),
            Some("com.shop.Order")
        );
        assert_eq!(determine_entity_name(None, None, Some("com.shop")), None);
    }

    #[test]
    fn test_resolve_identifier_prefers_explicit() {
        let id = resolve_identifier(Some("orders"), Some("default_name"), false).unwrap();
        assert_eq!(id.text(), "orders");
        assert!(!id.is_quoted());

        let id = resolve_identifier(Some(""), Some("default_name"), false).unwrap();
        assert_eq!(id.text(), "default_name");
    }

    #[test]
    fn test_resolve_identifier_global_quoting() {
        let id = resolve_identifier(None, Some("default_name"), true).unwrap();
        assert_eq!(id.text(), "default_name");
        assert!(id.is_quoted());
        assert_eq!(id.to_string(), "`default_name`");
    }

    #[test]
    fn test_global_quoting_trims_before_quoting() {
        let id = resolve_identifier(Some(" orders "), None, true).unwrap();
        assert_eq!(id.text(), "orders");
        assert!(id.is_quoted());
        assert_eq!(id.to_string(), "`orders`");

        let id = resolve_identifier(Some("   "), Some(" sales "), true).unwrap();
        assert_eq!(id.to_string(), "`sales`");
    }

    #[test]
    fn test_resolve_identifier_absent() {
        assert_eq!(resolve_identifier(None, None, true), None);
        assert_eq!(resolve_identifier(Some(""), Some(""), false), None);
    }

    #[test]
    fn test_to_identifier_quoted_text() {
        let id = Identifier::to_identifier(Some("  `Order` ")).unwrap();
        assert_eq!(id.text(), "Order");
        assert!(id.is_quoted());
        assert_eq!(quote("`Order`"), "`Order`");
        assert_eq!(quote(""), "");
    }

    #[test]
    fn test_determine_database_schema_name() {
        let ctx = LocalBindingContext::new(
            Origin::unknown(),
            MappingDefaults::new()
                .with_schema_name("public")
                .with_catalog_name("main"),
        );
        let name = determine_database_schema_name(Some("sales"), None, &ctx);
        assert_eq!(name.schema.unwrap().text(), "sales");
        assert_eq!(name.catalog.unwrap().text(), "main");
    }

    #[test]
    fn test_property_accessor_name() {
        assert_eq!(property_accessor_name(Some("field"), true, "property"), "field");
        assert_eq!(property_accessor_name(None, true, "property"), "embedded");
        assert_eq!(property_accessor_name(None, false, "property"), "property");
    }
}
