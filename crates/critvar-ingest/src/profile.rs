use serde::Serialize;

/// Shape of a loaded dataset: its header and row count, plus anything odd
/// noticed while reading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetProfile {
    pub file_name: String,
    /// Header names in file order, trimmed.
    pub columns: Vec<String>,
    pub row_count: usize,
    pub column_count: usize,
    /// Non-fatal issues: duplicate, blank or entirely empty columns.
    pub warnings: Vec<String>,
}

impl DatasetProfile {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
