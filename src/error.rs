//! Error types for mapping source resolution

use thiserror::Error;

use crate::context::Origin;

/// Errors that can occur while resolving a mapping description
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    /// An illegal combination of inputs or a value outside its closed set
    #[error("{message}{}", location_suffix(.origin))]
    Configuration {
        message: String,
        origin: Option<Origin>,
    },

    /// Failed to read a mapping defaults file
    #[error("IO error: {0}")]
    Io(String),

    /// Failed to parse a mapping defaults file
    #[error("Failed to parse mapping defaults: {0}")]
    ConfigParse(String),
}

impl MappingError {
    /// Configuration error with no known document location
    pub fn configuration(message: impl Into<String>) -> Self {
        MappingError::Configuration {
            message: message.into(),
            origin: None,
        }
    }

    /// Attach a document location if the error does not carry one yet
    pub fn with_origin(self, origin: &Origin) -> Self {
        match self {
            MappingError::Configuration {
                message,
                origin: None,
            } => MappingError::Configuration {
                message,
                origin: Some(origin.clone()),
            },
            other => other,
        }
    }

    /// Whether this is the configuration-error kind raised by the resolvers
    pub fn is_configuration(&self) -> bool {
        matches!(self, MappingError::Configuration { .. })
    }
}

impl From<std::io::Error> for MappingError {
    fn from(e: std::io::Error) -> Self {
        MappingError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for MappingError {
    fn from(e: toml::de::Error) -> Self {
        MappingError::ConfigParse(e.to_string())
    }
}

fn location_suffix(origin: &Option<Origin>) -> String {
    match origin {
        Some(origin) => format!(" : origin({})", origin),
        None => String::new(),
    }
}

/// Result type for mapping resolution
pub type MappingResult<T> = Result<T, MappingError>;
