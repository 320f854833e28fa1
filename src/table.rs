//! Physical table or inline view behind a table-owning construct

use serde::{Deserialize, Serialize};

use crate::elements::TableInformationSource;

/// Names an inline view when the mapping does not
pub trait InlineViewNameInferrer {
    fn infer_inline_view_name(&self) -> String;
}

impl<F> InlineViewNameInferrer for F
where
    F: Fn() -> String,
{
    fn infer_inline_view_name(&self) -> String {
        self()
    }
}

/// Where the rows of a mapped construct come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableSource {
    /// A real table. The name may be left for a later naming strategy.
    PhysicalTable {
        schema: Option<String>,
        catalog: Option<String>,
        table_name: Option<String>,
    },
    /// A subselect treated as a read-only view
    InlineView {
        schema: Option<String>,
        catalog: Option<String>,
        select_statement: String,
        logical_name: String,
    },
}

impl TableSource {
    pub fn schema(&self) -> Option<&str> {
        match self {
            TableSource::PhysicalTable { schema, .. } | TableSource::InlineView { schema, .. } => {
                schema.as_deref()
            }
        }
    }

    pub fn catalog(&self) -> Option<&str> {
        match self {
            TableSource::PhysicalTable { catalog, .. }
            | TableSource::InlineView { catalog, .. } => catalog.as_deref(),
        }
    }

    pub fn is_inline_view(&self) -> bool {
        matches!(self, TableSource::InlineView { .. })
    }
}

/// Decide between a physical table and an inline view.
///
/// The `subselect` attribute takes precedence over the `<subselect>` element.
/// An inline view without an explicit table name is named by `inferrer`.
pub fn create_table_source<T, I>(table_info: &T, inferrer: &I) -> TableSource
where
    T: TableInformationSource + ?Sized,
    I: InlineViewNameInferrer + ?Sized,
{
    let schema = table_info.schema().map(str::to_string);
    let catalog = table_info.catalog().map(str::to_string);

    let subselect = table_info
        .subselect_attribute()
        .or_else(|| table_info.subselect());
    let Some(select_statement) = subselect else {
        return TableSource::PhysicalTable {
            schema,
            catalog,
            table_name: table_info.table().map(str::to_string),
        };
    };

    let logical_name = match table_info.table() {
        Some(table) => table.to_string(),
        None => {
            let inferred = inferrer.infer_inline_view_name();
            tracing::debug!(name = %inferred, "Inferred inline view name");
            inferred
        }
    };
    TableSource::InlineView {
        schema,
        catalog,
        select_statement: select_statement.to_string(),
        logical_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TableInformation;
    use std::cell::Cell;

    fn no_inference() -> String {
        panic!("inline view name should not be inferred")
    }

    #[test]
    fn test_physical_table() {
        let info = TableInformation {
            schema: Some("sales".to_string()),
            table: Some("orders".to_string()),
            ..Default::default()
        };
        let source = create_table_source(&info, &no_inference);
        assert_eq!(
            source,
            TableSource::PhysicalTable {
                schema: Some("sales".to_string()),
                catalog: None,
                table_name: Some("orders".to_string()),
            }
        );
        assert!(!source.is_inline_view());
    }

    #[test]
    fn test_subselect_attribute_wins() {
        let info = TableInformation {
            table: Some("order_summary".to_string()),
            subselect_attribute: Some("select * from a".to_string()),
            subselect: Some("select * from b".to_string()),
            ..Default::default()
        };
        match create_table_source(&info, &no_inference) {
            TableSource::InlineView {
                select_statement,
                logical_name,
                ..
            } => {
                assert_eq!(select_statement, "select * from a");
                assert_eq!(logical_name, "order_summary");
            }
            other => panic!("expected inline view, got {other:?}"),
        }
    }

    #[test]
    fn test_inferred_inline_view_name() {
        let calls = Cell::new(0);
        let inferrer = || {
            calls.set(calls.get() + 1);
            "com.shop.OrderSummary".to_string()
        };
        let info = TableInformation {
            catalog: Some("main".to_string()),
            subselect: Some("select id, total from orders".to_string()),
            ..Default::default()
        };
        let source = create_table_source(&info, &inferrer);

        assert_eq!(calls.get(), 1);
        assert_eq!(source.catalog(), Some("main"));
        match source {
            TableSource::InlineView { logical_name, .. } => {
                assert_eq!(logical_name, "com.shop.OrderSummary")
            }
            other => panic!("expected inline view, got {other:?}"),
        }
    }
}
