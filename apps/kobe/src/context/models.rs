/// One column of the target table, as reported by information_schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
}

/// One glossary row: a proprietary metric and its prose definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub variable_name: String,
    pub definition: String,
}

/// The rendered table context injected into a prompt template.
///
/// The counts are diagnostics only; the prompt consumes `text`.
/// `metric_count` is `None` when no glossary query was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBlock {
    pub text: String,
    pub column_count: usize,
    pub metric_count: Option<usize>,
}

impl ContextBlock {
    /// A block with zero columns almost always means the table reference
    /// points at something the warehouse does not have.
    pub fn has_columns(&self) -> bool {
        self.column_count > 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
