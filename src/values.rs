//! Scalar defaulting helpers

use crate::error::{MappingError, MappingResult};

/// The value if present, otherwise the default
pub fn string_value<'a>(value: Option<&'a str>, default_value: &'a str) -> &'a str {
    value.unwrap_or(default_value)
}

/// Parse the value as an `i32` if present, otherwise the default
pub fn int_value(value: Option<&str>, default_value: i32) -> MappingResult<i32> {
    match value {
        None => Ok(default_value),
        Some(text) => text.parse().map_err(|e| {
            MappingError::configuration(format!("Unable to parse '{}' as an integer: {}", text, e))
        }),
    }
}

/// Parse the value as an `i64` if present, otherwise the default
pub fn long_value(value: Option<&str>, default_value: i64) -> MappingResult<i64> {
    match value {
        None => Ok(default_value),
        Some(text) => text.parse().map_err(|e| {
            MappingError::configuration(format!("Unable to parse '{}' as a long: {}", text, e))
        }),
    }
}

/// The flag if present, otherwise the default
pub fn bool_value(value: Option<bool>, default_value: bool) -> bool {
    value.unwrap_or(default_value)
}

/// First value that is present and non-empty, like SQL `coalesce` with empty strings
/// treated as null
pub fn coalesce<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().flatten().find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value() {
        assert_eq!(string_value(None, "property"), "property");
        assert_eq!(string_value(Some("field"), "property"), "field");
        assert_eq!(string_value(Some(""), "property"), "");
    }

    #[test]
    fn test_int_value() {
        assert_eq!(int_value(None, 255).unwrap(), 255);
        assert_eq!(int_value(Some("10"), 255).unwrap(), 10);
        assert_eq!(int_value(Some("-3"), 0).unwrap(), -3);

        let err = int_value(Some("ten"), 255).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("'ten'"));
    }

    #[test]
    fn test_long_value() {
        assert_eq!(long_value(None, 1).unwrap(), 1);
        assert_eq!(long_value(Some("9000000000"), 1).unwrap(), 9_000_000_000);
        assert!(long_value(Some(""), 1).is_err());
    }

    #[test]
    fn test_bool_value() {
        assert!(bool_value(None, true));
        assert!(!bool_value(Some(false), true));
    }

    #[test]
    fn test_coalesce() {
        assert_eq!(coalesce([None, Some(""), Some("b"), Some("c")]), Some("b"));
        assert_eq!(coalesce([None, Some("")]), None);
        assert_eq!(coalesce(Vec::<Option<&str>>::new()), None);
    }
}
