//! Mapping-document defaults

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MappingResult;

/// Defaults a mapping document falls back to when an element leaves a value unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MappingDefaults {
    /// Package used to qualify unqualified class names
    pub package_name: Option<String>,
    /// Default database schema
    pub schema_name: Option<String>,
    /// Default database catalog
    pub catalog_name: Option<String>,
    /// Comma-separated cascade styles applied when an association declares none
    pub cascade_style: String,
    /// Property accessor strategy name
    pub property_accessor_name: String,
    /// Quote every resolved identifier
    pub globally_quoted_identifiers: bool,
}

impl Default for MappingDefaults {
    fn default() -> Self {
        Self {
            package_name: None,
            schema_name: None,
            catalog_name: None,
            cascade_style: "none".to_string(),
            property_accessor_name: "property".to_string(),
            globally_quoted_identifiers: false,
        }
    }
}

impl MappingDefaults {
    /// Create defaults with no package, schema or catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse defaults from TOML text. Missing keys keep their default value.
    pub fn from_toml_str(text: &str) -> MappingResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load defaults from a TOML file
    pub fn load(path: impl AsRef<Path>) -> MappingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let defaults = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "Loaded mapping defaults");
        Ok(defaults)
    }

    pub fn with_package_name(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }

    pub fn with_schema_name(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    pub fn with_catalog_name(mut self, catalog: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog.into());
        self
    }

    pub fn with_cascade_style(mut self, cascade: impl Into<String>) -> Self {
        self.cascade_style = cascade.into();
        self
    }

    pub fn with_property_accessor_name(mut self, accessor: impl Into<String>) -> Self {
        self.property_accessor_name = accessor.into();
        self
    }

    /// Enable/disable quoting of every resolved identifier
    pub fn with_globally_quoted_identifiers(mut self, enabled: bool) -> Self {
        self.globally_quoted_identifiers = enabled;
        self
    }
}
