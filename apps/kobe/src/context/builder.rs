//! Context Builder — introspects the target table, fetches the metric glossary,
//! and renders both into a `ContextBlock`.
//!
//! Flow: parse table reference → cache lookup → columns query →
//!       glossary query (optional) → render → cache insert.
//!
//! The cache lives on the builder, not in a global, so each owner (the
//! running service, every test) controls its lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::context::models::{ColumnDescriptor, ContextBlock, MetricDefinition};
use crate::context::render::{columns_query, render_context};
use crate::context::table_ref::TableReference;
use crate::errors::AppError;
use crate::warehouse::Warehouse;

/// Exact argument tuple a block was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ContextKey {
    table_reference: String,
    description: String,
    metadata_query: Option<String>,
}

pub struct ContextBuilder {
    warehouse: Arc<dyn Warehouse>,
    cache: RwLock<HashMap<ContextKey, ContextBlock>>,
}

impl ContextBuilder {
    pub fn new(warehouse: Arc<dyn Warehouse>) -> Self {
        Self {
            warehouse,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Builds (or returns the memoized) context block for a table.
    ///
    /// A malformed `table_reference` fails before any query runs. Warehouse
    /// errors propagate untouched and nothing is cached for that key.
    /// An unknown table is not an error: the block comes back with an
    /// empty column section.
    pub async fn build_context(
        &self,
        table_reference: &str,
        description: &str,
        metadata_query: Option<&str>,
    ) -> Result<ContextBlock, AppError> {
        let table = TableReference::parse(table_reference)?;

        let key = ContextKey {
            table_reference: table_reference.to_string(),
            description: description.to_string(),
            metadata_query: metadata_query.map(str::to_string),
        };

        if let Some(block) = self.cache.read().await.get(&key) {
            debug!("Context cache hit for {table}");
            return Ok(block.clone());
        }

        // The lock is not held across the warehouse round-trips. Two racing
        // first calls for the same key may both fetch; the later insert wins.
        let columns = self.fetch_columns(&table).await?;

        let metrics = match metadata_query {
            Some(sql) => Some(self.fetch_metrics(sql).await?),
            None => None,
        };

        let block = ContextBlock {
            text: render_context(&table, description, &columns, metrics.as_deref()),
            column_count: columns.len(),
            metric_count: metrics.as_ref().map(Vec::len),
        };

        if !block.has_columns() {
            warn!("No columns found for {table}; check the table reference and warehouse grants");
        }

        info!(
            "Built context for {table}: {} columns, {} metrics",
            block.column_count,
            block.metric_count.unwrap_or(0)
        );

        self.cache.write().await.insert(key, block.clone());
        Ok(block)
    }

    /// Drops every memoized block. The next build goes back to the warehouse.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        let dropped = cache.len();
        cache.clear();
        info!("Context cache cleared ({dropped} entries)");
    }

    #[cfg(test)]
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn fetch_columns(&self, table: &TableReference) -> Result<Vec<ColumnDescriptor>, AppError> {
        let result = self.warehouse.query(&columns_query(table)).await?;
        debug!("Schema query for {table} returned {} rows", result.len());
        Ok(result
            .pairs("COLUMN_NAME", "DATA_TYPE")?
            .into_iter()
            .map(|(name, data_type)| ColumnDescriptor { name, data_type })
            .collect())
    }

    async fn fetch_metrics(&self, sql: &str) -> Result<Vec<MetricDefinition>, AppError> {
        let result = self.warehouse.query(sql).await?;
        Ok(result
            .pairs("VARIABLE_NAME", "DEFINITION")?
            .into_iter()
            .map(|(variable_name, definition)| MetricDefinition {
                variable_name,
                definition,
            })
            .collect())
    }
}
