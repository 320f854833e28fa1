//! Value-source adapters for the element shapes that declare columns

use crate::elements::{ColumnOrFormulaElement, PropertyElement, TimestampElement};
use crate::values::bool_value;

use super::resolver::ValueSourcesAdapter;

/// `<property>`: all four shapes are allowed
#[derive(Debug, Clone, Copy)]
pub struct PropertyValueSources<'a> {
    element: &'a PropertyElement,
    containing_table_name: Option<&'a str>,
}

impl<'a> PropertyValueSources<'a> {
    pub fn new(element: &'a PropertyElement) -> Self {
        Self {
            element,
            containing_table_name: None,
        }
    }

    /// Property mapped into a secondary (joined) table
    pub fn in_table(element: &'a PropertyElement, table: &'a str) -> Self {
        Self {
            element,
            containing_table_name: Some(table),
        }
    }
}

impl ValueSourcesAdapter for PropertyValueSources<'_> {
    fn containing_table_name(&self) -> Option<&str> {
        self.containing_table_name
    }

    fn is_included_in_insert_by_default(&self) -> bool {
        bool_value(self.element.insert, true)
    }

    fn is_included_in_update_by_default(&self) -> bool {
        bool_value(self.element.update, true)
    }

    fn column_attribute(&self) -> Option<&str> {
        self.element.column.as_deref()
    }

    fn formula_attribute(&self) -> Option<&str> {
        self.element.formula.as_deref()
    }

    fn column_or_formula_elements(&self) -> &[ColumnOrFormulaElement] {
        &self.element.columns_or_formulas
    }

    fn is_force_not_null(&self) -> bool {
        bool_value(self.element.not_null, false)
    }
}

/// `<timestamp>`: only the `column` attribute, always written
#[derive(Debug, Clone, Copy)]
pub struct TimestampValueSources<'a> {
    element: &'a TimestampElement,
}

impl<'a> TimestampValueSources<'a> {
    pub fn new(element: &'a TimestampElement) -> Self {
        Self { element }
    }
}

impl ValueSourcesAdapter for TimestampValueSources<'_> {
    fn is_included_in_insert_by_default(&self) -> bool {
        true
    }

    fn is_included_in_update_by_default(&self) -> bool {
        true
    }

    fn column_attribute(&self) -> Option<&str> {
        self.element.column.as_deref()
    }
}
