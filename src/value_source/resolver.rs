//! Four-way dispatch from raw column/formula shapes to value sources

use crate::context::LocalBindingContext;
use crate::elements::{ColumnElement, ColumnOrFormulaElement};
use crate::error::MappingResult;

use super::types::{ColumnSource, FormulaSource, TruthValue, ValueSource};

const ATTRIBUTE_WITH_NESTED_ELEMENTS: &str =
    "column/formula attribute may not be used together with <column>/<formula> subelement";
const COLUMN_WITH_FORMULA_ATTRIBUTE: &str = "column and formula attributes may not be used together";

/// Uniform view over the ways an element can declare its columns or formulas.
///
/// A `<property>` may use a `column` attribute, a `formula` attribute, or nested
/// `<column>`/`<formula>` elements, while a `<timestamp>` only knows the
/// `column` attribute. Each element shape implements the accessors it has and
/// keeps the defaults for the rest.
pub trait ValueSourcesAdapter {
    /// Secondary table the values live in, `None` for the primary table
    fn containing_table_name(&self) -> Option<&str> {
        None
    }

    /// Insert inclusion applied to every produced source
    fn is_included_in_insert_by_default(&self) -> bool {
        false
    }

    /// Update inclusion applied to every produced source
    fn is_included_in_update_by_default(&self) -> bool {
        false
    }

    /// Value of the `column` attribute
    fn column_attribute(&self) -> Option<&str> {
        None
    }

    /// Value of the `formula` attribute
    fn formula_attribute(&self) -> Option<&str> {
        None
    }

    /// Nested `<column>`/`<formula>` elements in declaration order
    fn column_or_formula_elements(&self) -> &[ColumnOrFormulaElement] {
        &[]
    }

    /// Whether the element itself demands non-null columns
    fn is_force_not_null(&self) -> bool {
        false
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Build the value sources declared through `adapter`.
///
/// At most one of the column attribute, the formula attribute and the nested
/// elements may be used; anything else is a configuration error raised before
/// any source is produced. An empty result means the element declared no
/// relational mapping at all and the caller has to apply its own default.
pub fn build_value_sources(
    context: &LocalBindingContext,
    adapter: &dyn ValueSourcesAdapter,
) -> MappingResult<Vec<ValueSource>> {
    let containing_table = adapter.containing_table_name().map(str::to_string);
    let insert = TruthValue::from_bool(adapter.is_included_in_insert_by_default());
    let update = TruthValue::from_bool(adapter.is_included_in_update_by_default());
    let nested = adapter.column_or_formula_elements();

    if let Some(column) = non_empty(adapter.column_attribute()) {
        if !nested.is_empty() {
            return Err(context.make_mapping_error(ATTRIBUTE_WITH_NESTED_ELEMENTS));
        }
        if non_empty(adapter.formula_attribute()).is_some() {
            return Err(context.make_mapping_error(COLUMN_WITH_FORMULA_ATTRIBUTE));
        }

        let nullable = if adapter.is_force_not_null() {
            TruthValue::False
        } else {
            TruthValue::Unknown
        };
        tracing::trace!(column, "Value source from column attribute");
        return Ok(vec![ValueSource::Column(
            ColumnSource::named(containing_table, column)
                .with_inclusion(insert, update)
                .with_nullable(nullable),
        )]);
    }

    if let Some(formula) = non_empty(adapter.formula_attribute()) {
        if !nested.is_empty() {
            return Err(context.make_mapping_error(ATTRIBUTE_WITH_NESTED_ELEMENTS));
        }
        tracing::trace!(formula, "Value source from formula attribute");
        return Ok(vec![ValueSource::Formula(FormulaSource {
            containing_table_name: containing_table,
            expression: formula.to_string(),
        })]);
    }

    // Nested columns default to nullable, unlike the column attribute which
    // leaves nullability undecided.
    let nullable = if adapter.is_force_not_null() {
        TruthValue::False
    } else {
        TruthValue::True
    };
    let sources: Vec<ValueSource> = nested
        .iter()
        .map(|element| match element {
            ColumnOrFormulaElement::Column(column) => ValueSource::Column(
                column_source(containing_table.clone(), column)
                    .with_inclusion(insert, update)
                    .with_nullable(nullable),
            ),
            ColumnOrFormulaElement::Formula(expression) => ValueSource::Formula(FormulaSource {
                containing_table_name: containing_table.clone(),
                expression: expression.clone(),
            }),
        })
        .collect();

    tracing::debug!(count = sources.len(), "Built value sources from nested elements");
    Ok(sources)
}

fn column_source(containing_table_name: Option<String>, element: &ColumnElement) -> ColumnSource {
    ColumnSource {
        length: element.length,
        precision: element.precision,
        scale: element.scale,
        sql_type: element.sql_type.clone(),
        not_null: element.not_null,
        unique: element.unique,
        unique_key: element.unique_key.clone(),
        index: element.index.clone(),
        check_condition: element.check.clone(),
        default_value: element.default.clone(),
        comment: element.comment.clone(),
        read_fragment: element.read.clone(),
        write_fragment: element.write.clone(),
        ..ColumnSource::named(containing_table_name, element.name.clone())
    }
}
