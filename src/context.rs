//! Binding context of the mapping document being processed

use serde::{Deserialize, Serialize};

use crate::config::MappingDefaults;
use crate::error::MappingError;

/// Kind of source a mapping document was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Resource,
    File,
    Url,
    String,
    Other,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Resource => write!(f, "resource"),
            SourceType::File => write!(f, "file"),
            SourceType::Url => write!(f, "url"),
            SourceType::String => write!(f, "string"),
            SourceType::Other => write!(f, "other"),
        }
    }
}

/// Location of a mapping document, used to annotate configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub source_type: SourceType,
    pub name: String,
}

impl Origin {
    pub fn new(source_type: SourceType, name: impl Into<String>) -> Self {
        Self {
            source_type,
            name: name.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(SourceType::Other, "<unknown>")
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.source_type)
    }
}

/// Defaults and location of one mapping document
#[derive(Debug, Clone, PartialEq)]
pub struct LocalBindingContext {
    origin: Origin,
    defaults: MappingDefaults,
}

impl LocalBindingContext {
    pub fn new(origin: Origin, defaults: MappingDefaults) -> Self {
        Self { origin, defaults }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn mapping_defaults(&self) -> &MappingDefaults {
        &self.defaults
    }

    pub fn is_globally_quoted_identifiers(&self) -> bool {
        self.defaults.globally_quoted_identifiers
    }

    /// Build a configuration error located in this document
    pub fn make_mapping_error(&self, message: impl Into<String>) -> MappingError {
        MappingError::Configuration {
            message: message.into(),
            origin: Some(self.origin.clone()),
        }
    }
}

impl Default for LocalBindingContext {
    fn default() -> Self {
        Self::new(Origin::unknown(), MappingDefaults::default())
    }
}
