//! Fragment-to-grid reconstruction and table acceptance.

use once_cell::sync::Lazy;
use regex::Regex;

use super::clustering::{cluster_rows, order_row};
use super::types::{MIN_MULTI_CELL_ROWS, ROW_TOLERANCE, Row, TableCandidate};
use crate::layout::TextFragment;

// A run of two or more whitespace characters separates cells; a single
// space does not.
static CELL_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Append one fragment's cells to `cells`.
///
/// Surrounding whitespace is trimmed first; a fragment that trims to
/// nothing contributes no cell.
pub(crate) fn split_cells(text: &str, cells: &mut Row) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    cells.extend(CELL_SPLIT.split(trimmed).map(str::to_owned));
}

/// Reconstruct a table from one page's text fragments.
///
/// Fragments are clustered into rows by lower-edge proximity (inclusive
/// tolerance of 3.0 units against the row's first fragment), each row is
/// ordered left to right, and row text is split into cells on whitespace
/// runs. The result is accepted only when at least two rows hold more
/// than one cell; pages failing that test return `None`, which is the
/// normal "nothing table-shaped here" outcome rather than an error.
///
/// Input order does not matter; clustering sorts first.
pub fn reconstruct_page_table<'a, I>(fragments: I) -> Option<TableCandidate>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let fragments: Vec<&TextFragment> = fragments.into_iter().collect();

    let mut rows: Vec<Row> = Vec::new();
    for mut row in cluster_rows(&fragments, ROW_TOLERANCE) {
        order_row(&mut row);
        let mut cells: Row = Vec::new();
        for fragment in &row {
            split_cells(fragment.get_text(), &mut cells);
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    let multi_cell_rows = rows.iter().filter(|row| row.len() > 1).count();
    if multi_cell_rows >= MIN_MULTI_CELL_ROWS {
        Some(TableCandidate { rows })
    } else {
        None
    }
}
