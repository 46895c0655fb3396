//! In-memory `Warehouse` for tests. Answers by SQL substring and records
//! every query it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{QueryResult, Warehouse, WarehouseError};

pub struct FakeWarehouse {
    responses: Vec<(String, Outcome)>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

enum Outcome {
    Rows(QueryResult),
    Fail(String),
}

impl FakeWarehouse {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Schema introspection rows, answered for any information_schema query.
    pub fn with_columns(self, columns: &[(&str, &str)]) -> Self {
        self.with_rows("information_schema.columns", ["COLUMN_NAME", "DATA_TYPE"], columns)
    }

    /// Glossary rows, answered for any query containing `needle`.
    pub fn with_metrics(self, needle: &str, metrics: &[(&str, &str)]) -> Self {
        self.with_rows(needle, ["VARIABLE_NAME", "DEFINITION"], metrics)
    }

    pub fn with_failure(mut self, needle: &str, message: &str) -> Self {
        self.responses
            .push((needle.to_string(), Outcome::Fail(message.to_string())));
        self
    }

    pub fn with_rows(mut self, needle: &str, labels: [&str; 2], rows: &[(&str, &str)]) -> Self {
        let result = QueryResult::new(
            labels.iter().map(|l| l.to_string()).collect(),
            rows.iter()
                .map(|(a, b)| vec![Some(a.to_string()), Some(b.to_string())])
                .collect(),
        );
        self.responses.push((needle.to_string(), Outcome::Rows(result)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Warehouse for FakeWarehouse {
    async fn query(&self, sql: &str) -> Result<QueryResult, WarehouseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(sql.to_string());

        match self.responses.iter().find(|(needle, _)| sql.contains(needle.as_str())) {
            Some((_, Outcome::Rows(result))) => Ok(result.clone()),
            Some((_, Outcome::Fail(message))) => {
                Err(WarehouseError::Database(sqlx::Error::Protocol(message.clone())))
            }
            None => Ok(QueryResult::default()),
        }
    }
}
