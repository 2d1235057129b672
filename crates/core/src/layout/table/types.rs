//! Table reconstruction types and tuning constants.

// Fixed heuristic constants. The row tolerance is absolute, not scaled to
// font size, and the boundary comparison is inclusive; both are behavior
// contracts.
pub(crate) const ROW_TOLERANCE: f64 = 3.0;
pub(crate) const MIN_MULTI_CELL_ROWS: usize = 2;

/// A reconstructed row of cell strings, left to right.
pub type Row = Vec<String>;

/// A page's reconstructed grid of rows and cells.
///
/// Only produced for pages that pass the multi-cell-row acceptance test;
/// the first row is treated as the header when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCandidate {
    pub rows: Vec<Row>,
}

impl TableCandidate {
    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// An accepted table tagged with the 1-based page number it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTable {
    pub pageno: usize,
    pub table: TableCandidate,
}
