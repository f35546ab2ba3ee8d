use super::Value;

/// Decoded result set of a single query.
///
/// Constructed once by the decoder from a header/row frame pair and
/// immutable afterwards. `column_names` always has `column_count` entries
/// and every row has `column_count` values; the decoder derives its
/// iteration bounds from the header counts, so a violation here is a bug in
/// the decoder, not a reachable runtime state.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    row_count: u64,
    column_count: u64,
    column_names: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub(crate) fn new(
        row_count: u64,
        column_count: u64,
        column_names: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Self {
        debug_assert_eq!(column_names.len() as u64, column_count);
        debug_assert_eq!(rows.len() as u64, row_count);
        debug_assert!(rows.iter().all(|row| row.len() as u64 == column_count));

        Self {
            row_count,
            column_count,
            column_names,
            rows,
        }
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    pub fn column_count(&self) -> u64 {
        self.column_count
    }

    /// Column names in column order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Rows in the order the server returned them.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
