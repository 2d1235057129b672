//! Table reconstruction from positioned text fragments.
//!
//! Groups a page's text lines into rows by vertical proximity, splits row
//! text into cells on whitespace runs, and accepts the result as a table
//! only when enough rows look multi-column.

mod clustering;
mod reconstruct;
mod types;

// Re-export public types
pub use types::{PageTable, Row, TableCandidate};

// Re-export public API functions
pub use clustering::{cluster_rows, order_row};
pub use reconstruct::reconstruct_page_table;
