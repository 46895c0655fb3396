use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableRefError {
    #[error("Table reference '{reference}' has {found} segments; expected database.schema.table")]
    SegmentCount { reference: String, found: usize },

    #[error("Table reference '{0}' has an empty segment")]
    EmptySegment(String),
}

/// A fully-qualified `database.schema.table` identifier.
///
/// Segments keep the caller's spelling for display; lookups use the
/// upper-cased forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableReference {
    database: String,
    schema: String,
    table: String,
}

impl TableReference {
    pub fn parse(reference: &str) -> Result<Self, TableRefError> {
        let segments: Vec<&str> = reference.split('.').collect();

        let [database, schema, table] = segments.as_slice() else {
            return Err(TableRefError::SegmentCount {
                reference: reference.to_string(),
                found: segments.len(),
            });
        };

        if [database, schema, table].iter().any(|s| s.trim().is_empty()) {
            return Err(TableRefError::EmptySegment(reference.to_string()));
        }

        Ok(Self {
            database: database.to_string(),
            schema: schema.to_string(),
            table: table.to_string(),
        })
    }

    pub fn database_upper(&self) -> String {
        self.database.to_uppercase()
    }

    pub fn schema_upper(&self) -> String {
        self.schema.to_uppercase()
    }

    pub fn table_upper(&self) -> String {
        self.table.to_uppercase()
    }
}

impl FromStr for TableReference {
    type Err = TableRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}
