use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Postgres, Row, TypeInfo};
use tracing::debug;

use super::{QueryResult, Warehouse, WarehouseError};

/// `Warehouse` backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgWarehouse {
    pool: PgPool,
}

impl PgWarehouse {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Warehouse for PgWarehouse {
    async fn query(&self, sql: &str) -> Result<QueryResult, WarehouseError> {
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;

        // Column labels come from the first row; an empty result has none,
        // which callers see as MissingColumn only if they read a column.
        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let mut out = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(columns.len());
            for (col_idx, name) in columns.iter().enumerate() {
                let value = decode_cell(row, col_idx).ok_or_else(|| WarehouseError::Decode {
                    column: name.clone(),
                    row: row_idx,
                })?;
                cells.push(value);
            }
            out.push(cells);
        }

        debug!("Warehouse query returned {} rows", out.len());
        Ok(QueryResult::new(columns, out))
    }
}

/// How a result column is read before it is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Text,
    BigInt,
    Int,
    SmallInt,
    Real,
    Double,
    Numeric,
    Bool,
    Other,
}

impl CellKind {
    /// Maps a Postgres type name (as sqlx reports it) to its decoder.
    fn for_type(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => CellKind::Text,
            "INT8" => CellKind::BigInt,
            "INT4" => CellKind::Int,
            "INT2" => CellKind::SmallInt,
            "FLOAT4" => CellKind::Real,
            "FLOAT8" => CellKind::Double,
            "NUMERIC" => CellKind::Numeric,
            "BOOL" => CellKind::Bool,
            _ => CellKind::Other,
        }
    }
}

/// Reads one cell as text. Types without a decoder here (dates, json, arrays)
/// still decode if the driver accepts them as a string; otherwise the caller
/// reports `Decode` and the query should cast the column `::TEXT`.
fn decode_cell(row: &PgRow, idx: usize) -> Option<Option<String>> {
    let kind = row
        .columns()
        .get(idx)
        .map(|c| CellKind::for_type(c.type_info().name()))?;

    match kind {
        CellKind::Text | CellKind::Other => row.try_get::<Option<String>, _>(idx).ok(),
        CellKind::BigInt => text_of::<i64>(row, idx),
        CellKind::Int => text_of::<i32>(row, idx),
        CellKind::SmallInt => text_of::<i16>(row, idx),
        CellKind::Real => text_of::<f32>(row, idx),
        CellKind::Double => text_of::<f64>(row, idx),
        CellKind::Numeric => text_of::<Decimal>(row, idx),
        CellKind::Bool => text_of::<bool>(row, idx),
    }
}

fn text_of<'r, T>(row: &'r PgRow, idx: usize) -> Option<Option<String>>
where
    T: ToString + sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get::<Option<T>, _>(idx)
        .ok()
        .map(|v| v.map(|n| n.to_string()))
}
