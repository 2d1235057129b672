//! Row clustering for table reconstruction.
//!
//! Groups positioned objects into rows by vertical proximity of their
//! lower edges, then orders each row left to right.

use crate::utils::HasBBox;

/// Cluster items into rows by the vertical position of their lower edge.
///
/// Items are sorted by `y0` descending (top of page first, since higher
/// values sit higher on the page) and grouped by walking the sorted order:
/// an item joins the current row while its `y0` is within `tolerance` of
/// the row's *first* item, and starts a new row otherwise. The comparison
/// is inclusive, so a difference of exactly `tolerance` still merges.
pub fn cluster_rows<T: HasBBox + Clone>(items: &[T], tolerance: f64) -> Vec<Vec<T>> {
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| {
        b.y0()
            .partial_cmp(&a.y0())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows: Vec<Vec<T>> = Vec::new();
    for item in sorted {
        match rows.last_mut() {
            Some(row) if (item.y0() - row[0].y0()).abs() <= tolerance => row.push(item),
            _ => rows.push(vec![item]),
        }
    }
    rows
}

/// Order a row's items left to right by their left edge.
pub fn order_row<T: HasBBox>(row: &mut [T]) {
    row.sort_by(|a, b| {
        a.x0()
            .partial_cmp(&b.x0())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
