//! Warehouse — the single query capability the prompt pipeline consumes.
//!
//! The trait is deliberately narrow: run one SQL string, get back a table of
//! named text columns. `AppState` holds the production backend behind an
//! `Arc<dyn Warehouse>`; tests swap in `fake::FakeWarehouse`.

use async_trait::async_trait;
use thiserror::Error;

pub mod postgres;

#[cfg(test)]
pub mod fake;

pub use postgres::PgWarehouse;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Result has no column named '{0}'")]
    MissingColumn(String),

    #[error("Could not decode column '{column}' in row {row} as text")]
    Decode { column: String, row: usize },
}

/// Tabular query result. Every cell is carried as text; `None` is SQL NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column. Matching ignores ASCII case, since
    /// warehouses disagree on how they fold unquoted labels.
    pub fn column_index(&self, name: &str) -> Result<usize, WarehouseError> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| WarehouseError::MissingColumn(name.to_string()))
    }

    /// Reads two named columns row by row, in result order. NULL cells read as "".
    /// An empty result yields no pairs even when it carries no column labels.
    pub fn pairs(&self, first: &str, second: &str) -> Result<Vec<(String, String)>, WarehouseError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let a = self.column_index(first)?;
        let b = self.column_index(second)?;

        Ok(self
            .rows
            .iter()
            .map(|row| (cell(row, a), cell(row, b)))
            .collect())
    }
}

fn cell(row: &[Option<String>], idx: usize) -> String {
    row.get(idx).cloned().flatten().unwrap_or_default()
}

/// A warehouse that can run arbitrary read queries.
#[async_trait]
pub trait Warehouse: Send + Sync {
    async fn query(&self, sql: &str) -> Result<QueryResult, WarehouseError>;
}

/// Quotes a value as a SQL string literal, doubling embedded single quotes.
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryResult {
        QueryResult::new(
            vec!["COLUMN_NAME".to_string(), "DATA_TYPE".to_string()],
            vec![
                vec![Some("PTS".to_string()), Some("NUMBER".to_string())],
                vec![Some("AST".to_string()), None],
            ],
        )
    }

    #[test]
    fn test_column_lookup_ignores_case() {
        let result = sample();
        assert_eq!(result.column_index("column_name").unwrap(), 0);
        assert_eq!(result.column_index("Data_Type").unwrap(), 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = sample().column_index("DEFINITION").unwrap_err();
        assert!(matches!(err, WarehouseError::MissingColumn(ref c) if c == "DEFINITION"));
    }

    #[test]
    fn test_pairs_preserve_row_order_and_blank_nulls() {
        let pairs = sample().pairs("COLUMN_NAME", "DATA_TYPE").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("PTS".to_string(), "NUMBER".to_string()),
                ("AST".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_pairs_on_unlabelled_empty_result() {
        assert!(QueryResult::default().pairs("A", "B").unwrap().is_empty());
    }

    #[test]
    fn test_sql_literal_doubles_quotes() {
        assert_eq!(sql_literal("PUBLIC"), "'PUBLIC'");
        assert_eq!(sql_literal("O'NEAL"), "'O''NEAL'");
    }
}
