//! Explicit type declarations on attributes

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::{ParamElement, TypeElement};

/// Type name and type parameters given in the mapping, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitTypeSource {
    pub name: Option<String>,
    pub parameters: Option<HashMap<String, String>>,
}

/// To-one associations never carry an explicit type
pub const TO_ONE_ATTRIBUTE_TYPE_SOURCE: ExplicitTypeSource = ExplicitTypeSource {
    name: None,
    parameters: None,
};

impl ExplicitTypeSource {
    /// From a `type` attribute and an optional nested `<type>` element; the
    /// element wins when both are present
    pub fn resolve(type_attribute: Option<&str>, type_element: Option<&TypeElement>) -> Self {
        match type_element {
            Some(element) => Self {
                name: Some(element.name.clone()),
                parameters: extract_parameters(&element.params),
            },
            None => Self {
                name: type_attribute.map(str::to_string),
                parameters: None,
            },
        }
    }
}

/// Collect `<param>` elements into a map; `None` when there are none
pub fn extract_parameters(params: &[ParamElement]) -> Option<HashMap<String, String>> {
    if params.is_empty() {
        return None;
    }
    Some(
        params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str) -> ParamElement {
        ParamElement {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_extract_parameters() {
        assert_eq!(extract_parameters(&[]), None);

        let params = extract_parameters(&[param("enumClass", "Status"), param("type", "12")]).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["enumClass"], "Status");
    }

    #[test]
    fn test_later_parameter_wins() {
        let params = extract_parameters(&[param("k", "1"), param("k", "2")]).unwrap();
        assert_eq!(params["k"], "2");
    }

    #[test]
    fn test_to_one_type_source_is_empty() {
        assert_eq!(TO_ONE_ATTRIBUTE_TYPE_SOURCE.name, None);
        assert_eq!(TO_ONE_ATTRIBUTE_TYPE_SOURCE.parameters, None);
    }

    #[test]
    fn test_resolve_prefers_element() {
        let element = TypeElement {
            name: "org.example.MoneyType".to_string(),
            params: vec![param("currency", "EUR")],
        };
        let source = ExplicitTypeSource::resolve(Some("string"), Some(&element));
        assert_eq!(source.name.as_deref(), Some("org.example.MoneyType"));
        assert!(source.parameters.is_some());

        let source = ExplicitTypeSource::resolve(Some("string"), None);
        assert_eq!(source.name.as_deref(), Some("string"));
        assert_eq!(source.parameters, None);
    }
}
