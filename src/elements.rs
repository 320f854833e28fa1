//! Raw mapping elements, as handed over by the XML deserialization layer
//!
//! These structs mirror the shape of the hbm mapping XML. Attribute fields are
//! renamed with an `@` prefix and element text with `$text`, which is the
//! convention `quick-xml`'s serde support expects. Nothing in this module
//! interprets the values; see the resolver modules for that.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Structural kind of an entity mapping element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// `<class>`: a root entity
    #[default]
    Class,
    /// `<subclass>`: discriminated subtype sharing the root table
    Subclass,
    /// `<joined-subclass>`: subtype with its own table joined on the key
    JoinedSubclass,
    /// `<union-subclass>`: subtype with a complete table of its own
    UnionSubclass,
}

impl EntityKind {
    /// XML element name for this kind
    pub fn element_name(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Subclass => "subclass",
            EntityKind::JoinedSubclass => "joined-subclass",
            EntityKind::UnionSubclass => "union-subclass",
        }
    }

    /// Kind for an XML element name, if it names an entity mapping
    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "class" => Some(EntityKind::Class),
            "subclass" => Some(EntityKind::Subclass),
            "joined-subclass" => Some(EntityKind::JoinedSubclass),
            "union-subclass" => Some(EntityKind::UnionSubclass),
            _ => None,
        }
    }
}

/// Where a table-owning element keeps its table information
pub trait TableInformationSource {
    fn schema(&self) -> Option<&str>;
    fn catalog(&self) -> Option<&str>;
    fn table(&self) -> Option<&str>;
    /// `subselect="..."` attribute form
    fn subselect_attribute(&self) -> Option<&str>;
    /// `<subselect>` element form
    fn subselect(&self) -> Option<&str>;
}

/// Standalone table information, for constructs other than entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableInformation {
    #[serde(rename = "@schema")]
    pub schema: Option<String>,
    #[serde(rename = "@catalog")]
    pub catalog: Option<String>,
    #[serde(rename = "@table")]
    pub table: Option<String>,
    #[serde(rename = "@subselect")]
    pub subselect_attribute: Option<String>,
    #[serde(rename = "subselect")]
    pub subselect: Option<String>,
}

impl TableInformationSource for TableInformation {
    fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn subselect_attribute(&self) -> Option<&str> {
        self.subselect_attribute.as_deref()
    }

    fn subselect(&self) -> Option<&str> {
        self.subselect.as_deref()
    }
}

/// `<cache usage="..." region="..." include="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheElement {
    #[serde(rename = "@usage")]
    pub usage: String,
    #[serde(rename = "@region")]
    pub region: Option<String>,
    /// `all` or `non-lazy`
    #[serde(rename = "@include")]
    pub include: Option<String>,
}

/// `<sql-insert>`, `<sql-update>`, `<sql-delete>` and friends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSqlElement {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@callable", default)]
    pub callable: bool,
    /// External name of the result-check style
    #[serde(rename = "@check")]
    pub check: Option<String>,
}

/// `<meta attribute="..." inherit="...">value</meta>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaElement {
    #[serde(rename = "@attribute")]
    pub attribute: String,
    #[serde(rename = "@inherit", default = "default_true")]
    pub inherit: bool,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl MetaElement {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            inherit: true,
            value: value.into(),
        }
    }

    pub fn with_inherit(mut self, inherit: bool) -> Self {
        self.inherit = inherit;
        self
    }
}

/// `<param name="...">value</param>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamElement {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// `<type name="..."><param/>*</type>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeElement {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "param", default)]
    pub params: Vec<ParamElement>,
}

/// Nested `<column>` element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnElement {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@length")]
    pub length: Option<u32>,
    #[serde(rename = "@precision")]
    pub precision: Option<u32>,
    #[serde(rename = "@scale")]
    pub scale: Option<u32>,
    #[serde(rename = "@not-null")]
    pub not_null: Option<bool>,
    #[serde(rename = "@unique")]
    pub unique: Option<bool>,
    #[serde(rename = "@unique-key")]
    pub unique_key: Option<String>,
    #[serde(rename = "@index")]
    pub index: Option<String>,
    #[serde(rename = "@sql-type")]
    pub sql_type: Option<String>,
    #[serde(rename = "@check")]
    pub check: Option<String>,
    #[serde(rename = "@default")]
    pub default: Option<String>,
    #[serde(rename = "@read")]
    pub read: Option<String>,
    #[serde(rename = "@write")]
    pub write: Option<String>,
    #[serde(rename = "comment")]
    pub comment: Option<String>,
}

impl ColumnElement {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// One nested `<column>` or `<formula>` element, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnOrFormulaElement {
    #[serde(rename = "column")]
    Column(ColumnElement),
    #[serde(rename = "formula")]
    Formula(String),
}

/// `<property>`
///
/// In XML the nested `<column>`, `<formula>`, `<type>` and `<meta>` children
/// may appear in one mixed sequence; they are split into separate fields here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PropertyXml", into = "PropertyXml")]
pub struct PropertyElement {
    pub name: String,
    pub column: Option<String>,
    pub formula: Option<String>,
    /// `type` attribute
    pub type_name: Option<String>,
    /// Nested `<type>` element
    pub type_element: Option<TypeElement>,
    pub access: Option<String>,
    pub insert: Option<bool>,
    pub update: Option<bool>,
    pub not_null: Option<bool>,
    pub meta: Vec<MetaElement>,
    pub columns_or_formulas: Vec<ColumnOrFormulaElement>,
}

impl PropertyElement {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Any child allowed inside `<property>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum PropertyChild {
    #[serde(rename = "meta")]
    Meta(MetaElement),
    #[serde(rename = "column")]
    Column(ColumnElement),
    #[serde(rename = "formula")]
    Formula(String),
    #[serde(rename = "type")]
    Type(TypeElement),
}

/// `<property>` as laid out in XML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PropertyXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@column")]
    column: Option<String>,
    #[serde(rename = "@formula")]
    formula: Option<String>,
    #[serde(rename = "@type")]
    type_name: Option<String>,
    #[serde(rename = "@access")]
    access: Option<String>,
    #[serde(rename = "@insert")]
    insert: Option<bool>,
    #[serde(rename = "@update")]
    update: Option<bool>,
    #[serde(rename = "@not-null")]
    not_null: Option<bool>,
    #[serde(rename = "$value", default)]
    children: Vec<PropertyChild>,
}

impl From<PropertyXml> for PropertyElement {
    fn from(raw: PropertyXml) -> Self {
        let mut element = PropertyElement {
            name: raw.name,
            column: raw.column,
            formula: raw.formula,
            type_name: raw.type_name,
            access: raw.access,
            insert: raw.insert,
            update: raw.update,
            not_null: raw.not_null,
            ..Default::default()
        };
        for child in raw.children {
            match child {
                PropertyChild::Meta(meta) => element.meta.push(meta),
                PropertyChild::Column(column) => element
                    .columns_or_formulas
                    .push(ColumnOrFormulaElement::Column(column)),
                PropertyChild::Formula(formula) => element
                    .columns_or_formulas
                    .push(ColumnOrFormulaElement::Formula(formula)),
                PropertyChild::Type(type_element) => element.type_element = Some(type_element),
            }
        }
        element
    }
}

impl From<PropertyElement> for PropertyXml {
    fn from(element: PropertyElement) -> Self {
        let mut children: Vec<PropertyChild> =
            element.meta.into_iter().map(PropertyChild::Meta).collect();
        children.extend(
            element
                .columns_or_formulas
                .into_iter()
                .map(|child| match child {
                    ColumnOrFormulaElement::Column(column) => PropertyChild::Column(column),
                    ColumnOrFormulaElement::Formula(formula) => PropertyChild::Formula(formula),
                }),
        );
        children.extend(element.type_element.map(PropertyChild::Type));
        PropertyXml {
            name: element.name,
            column: element.column,
            formula: element.formula,
            type_name: element.type_name,
            access: element.access,
            insert: element.insert,
            update: element.update,
            not_null: element.not_null,
            children,
        }
    }
}

/// `<timestamp>`: can only name its column through the attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimestampElement {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@column")]
    pub column: Option<String>,
    #[serde(rename = "@access")]
    pub access: Option<String>,
}

/// `<class>`, `<subclass>`, `<joined-subclass>` or `<union-subclass>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityElement {
    /// Taken from the element name, not from an attribute
    #[serde(skip)]
    pub kind: EntityKind,
    /// Class name, possibly unqualified
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@entity-name")]
    pub entity_name: Option<String>,
    #[serde(rename = "@schema")]
    pub schema: Option<String>,
    #[serde(rename = "@catalog")]
    pub catalog: Option<String>,
    #[serde(rename = "@table")]
    pub table: Option<String>,
    #[serde(rename = "@subselect")]
    pub subselect_attribute: Option<String>,
    #[serde(rename = "meta", default)]
    pub meta: Vec<MetaElement>,
    #[serde(rename = "subselect")]
    pub subselect: Option<String>,
    #[serde(rename = "cache")]
    pub cache: Option<CacheElement>,
    #[serde(rename = "property", default)]
    pub properties: Vec<PropertyElement>,
    #[serde(rename = "timestamp")]
    pub timestamp: Option<TimestampElement>,
    #[serde(rename = "sql-insert")]
    pub sql_insert: Option<CustomSqlElement>,
    #[serde(rename = "sql-update")]
    pub sql_update: Option<CustomSqlElement>,
    #[serde(rename = "sql-delete")]
    pub sql_delete: Option<CustomSqlElement>,
}

impl EntityElement {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}

impl TableInformationSource for EntityElement {
    fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn subselect_attribute(&self) -> Option<&str> {
        self.subselect_attribute.as_deref()
    }

    fn subselect(&self) -> Option<&str> {
        self.subselect.as_deref()
    }
}
