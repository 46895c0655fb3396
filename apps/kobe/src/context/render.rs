//! Text scaffold for the context block, and the introspection SQL that feeds it.
//!
//! The labelled sections (`<tableName>`, `<columns>`, the glossary header)
//! are what the persona templates tell the model to look for. Changing them
//! means changing every template's instructions too.

use crate::context::models::{ColumnDescriptor, MetricDefinition};
use crate::context::table_ref::TableReference;
use crate::warehouse::sql_literal;

pub const GLOSSARY_HEADER: &str = "Available variables by VARIABLE_NAME:";

/// information_schema lookup for one table, in declared column order.
pub fn columns_query(table: &TableReference) -> String {
    format!(
        r#"
        SELECT CAST(column_name AS TEXT) AS "COLUMN_NAME", CAST(data_type AS TEXT) AS "DATA_TYPE"
        FROM information_schema.columns
        WHERE UPPER(table_catalog) = {} AND UPPER(table_schema) = {} AND UPPER(table_name) = {}
        ORDER BY ordinal_position
        "#,
        sql_literal(&table.database_upper()),
        sql_literal(&table.schema_upper()),
        sql_literal(&table.table_upper()),
    )
}

pub fn render_columns(columns: &[ColumnDescriptor]) -> String {
    columns
        .iter()
        .map(|c| format!("- {}: {}", c.name, c.data_type))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_metrics(metrics: &[MetricDefinition]) -> String {
    metrics
        .iter()
        .map(|m| format!("- {}: {}", m.variable_name, m.definition))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles the full block. `metrics` is `None` when no glossary was requested,
/// in which case the glossary section is left out entirely.
pub fn render_context(
    table: &TableReference,
    description: &str,
    columns: &[ColumnDescriptor],
    metrics: Option<&[MetricDefinition]>,
) -> String {
    let mut text = format!(
        "\nHere is the table name <tableName> {table} </tableName>\n\n\
         <tableDescription>{description}</tableDescription>\n\n\
         Here are the columns of the {table}\n\n\
         <columns>\n\n{}\n\n</columns>\n",
        render_columns(columns),
    );

    if let Some(metrics) = metrics {
        text.push_str(&format!("\n\n{GLOSSARY_HEADER}\n\n{}", render_metrics(metrics)));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableReference {
        TableReference::parse("nba.public.regular_szn").unwrap()
    }

    fn col(name: &str, ty: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            data_type: ty.to_string(),
        }
    }

    #[test]
    fn test_columns_query_filters_on_upper_cased_segments() {
        let sql = columns_query(&table());
        assert!(sql.contains("UPPER(table_catalog) = 'NBA'"));
        assert!(sql.contains("UPPER(table_schema) = 'PUBLIC'"));
        assert!(sql.contains("UPPER(table_name) = 'REGULAR_SZN'"));
        assert!(sql.contains("ORDER BY ordinal_position"));
    }

    #[test]
    fn test_render_columns_in_order() {
        let out = render_columns(&[col("PTS", "NUMBER"), col("AST", "NUMBER")]);
        assert_eq!(out, "- PTS: NUMBER\n- AST: NUMBER");
    }

    #[test]
    fn test_render_context_sections() {
        let metrics = vec![MetricDefinition {
            variable_name: "PSP".to_string(),
            definition: "Scoring metric.".to_string(),
        }];
        let out = render_context(&table(), "Demo table.", &[col("PTS", "NUMBER")], Some(metrics.as_slice()));

        assert!(out.contains("<tableName> nba.public.regular_szn </tableName>"));
        assert!(out.contains("<tableDescription>Demo table.</tableDescription>"));
        assert!(out.contains("<columns>\n\n- PTS: NUMBER\n\n</columns>"));
        assert!(out.ends_with("Available variables by VARIABLE_NAME:\n\n- PSP: Scoring metric."));
    }

    #[test]
    fn test_render_context_without_glossary() {
        let out = render_context(&table(), "Demo table.", &[col("PTS", "NUMBER")], None);
        assert!(!out.contains(GLOSSARY_HEADER));
        assert!(out.ends_with("</columns>\n"));
    }

    #[test]
    fn test_render_context_empty_glossary_keeps_header() {
        let out = render_context(&table(), "Demo table.", &[], Some(&[][..]));
        assert!(out.contains("<columns>\n\n\n\n</columns>"));
        assert!(out.ends_with(&format!("{GLOSSARY_HEADER}\n\n")));
    }
}
