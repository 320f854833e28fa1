//! Normalized value sources

use serde::{Deserialize, Serialize};

/// Three-valued flag; `Unknown` leaves the decision to a later binding stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruthValue {
    /// Explicitly enabled
    True,
    /// Explicitly disabled
    False,
    /// Not decided by the mapping
    Unknown,
}

impl TruthValue {
    pub fn from_bool(value: bool) -> Self {
        if value {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }

    /// Resolve to a boolean, using `default_value` for `Unknown`
    pub fn to_bool(self, default_value: bool) -> bool {
        match self {
            TruthValue::True => true,
            TruthValue::False => false,
            TruthValue::Unknown => default_value,
        }
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        TruthValue::from_bool(value)
    }
}

/// A mapped column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSource {
    /// Table qualifier, when the column does not live in the owner's primary table
    pub containing_table_name: Option<String>,
    pub name: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub sql_type: Option<String>,
    /// `not-null` as declared on the column, not interpreted here
    pub not_null: Option<bool>,
    pub unique: Option<bool>,
    pub unique_key: Option<String>,
    pub index: Option<String>,
    pub check_condition: Option<String>,
    pub default_value: Option<String>,
    pub comment: Option<String>,
    pub read_fragment: Option<String>,
    pub write_fragment: Option<String>,
    pub include_in_insert: TruthValue,
    pub include_in_update: TruthValue,
    /// Nullability enforcement: `False` forces NOT NULL, `True` forces nullable
    pub nullable: TruthValue,
}

impl ColumnSource {
    /// Column known only by name, as produced by a `column` attribute
    pub fn named(containing_table_name: Option<String>, name: impl Into<String>) -> Self {
        Self {
            containing_table_name,
            name: name.into(),
            length: None,
            precision: None,
            scale: None,
            sql_type: None,
            not_null: None,
            unique: None,
            unique_key: None,
            index: None,
            check_condition: None,
            default_value: None,
            comment: None,
            read_fragment: None,
            write_fragment: None,
            include_in_insert: TruthValue::Unknown,
            include_in_update: TruthValue::Unknown,
            nullable: TruthValue::Unknown,
        }
    }

    pub fn with_inclusion(mut self, insert: TruthValue, update: TruthValue) -> Self {
        self.include_in_insert = insert;
        self.include_in_update = update;
        self
    }

    pub fn with_nullable(mut self, nullable: TruthValue) -> Self {
        self.nullable = nullable;
        self
    }
}

/// A read-only SQL expression in place of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaSource {
    pub containing_table_name: Option<String>,
    pub expression: String,
}

/// One relational value backing an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueSource {
    Column(ColumnSource),
    Formula(FormulaSource),
}

impl ValueSource {
    pub fn containing_table_name(&self) -> Option<&str> {
        match self {
            ValueSource::Column(column) => column.containing_table_name.as_deref(),
            ValueSource::Formula(formula) => formula.containing_table_name.as_deref(),
        }
    }

    pub fn as_column(&self) -> Option<&ColumnSource> {
        match self {
            ValueSource::Column(column) => Some(column),
            ValueSource::Formula(_) => None,
        }
    }

    pub fn as_formula(&self) -> Option<&FormulaSource> {
        match self {
            ValueSource::Formula(formula) => Some(formula),
            ValueSource::Column(_) => None,
        }
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, ValueSource::Formula(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_value_to_bool() {
        assert!(TruthValue::True.to_bool(false));
        assert!(!TruthValue::False.to_bool(true));
        assert!(TruthValue::Unknown.to_bool(true));
        assert!(!TruthValue::Unknown.to_bool(false));
        assert_eq!(TruthValue::from(true), TruthValue::True);
    }

    #[test]
    fn test_value_source_accessors() {
        let column = ValueSource::Column(ColumnSource::named(Some("audit".to_string()), "created_by"));
        assert_eq!(column.containing_table_name(), Some("audit"));
        assert!(column.as_column().is_some());
        assert!(!column.is_formula());

        let formula = ValueSource::Formula(FormulaSource {
            containing_table_name: None,
            expression: "upper(name)".to_string(),
        });
        assert!(formula.is_formula());
        assert!(formula.as_column().is_none());
        assert_eq!(formula.as_formula().unwrap().expression, "upper(name)");
    }
}
