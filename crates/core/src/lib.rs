//! trestle - layout-to-Markdown conversion with row-clustered table
//! reconstruction.
//!
//! Takes per-page positioned text fragments from any layout-aware source
//! and produces Markdown: a plain body rendering plus GitHub-flavored
//! tables rebuilt by grouping fragments into rows on vertical proximity
//! and splitting cells on whitespace runs.

pub mod converter;
pub mod error;
pub mod high_level;
pub mod layout;
pub mod source;
pub mod utils;

// Re-export the table module at the crate root
pub use layout::table;

pub use error::{ConvertError, Result};
pub use high_level::{
    ConvertOptions, DocumentMarkdown, TableExtraction, convert_document, convert_to_markdown,
    extract_document_tables,
};
pub use layout::{PageElement, PageLayout, TextFragment};
pub use source::{FragmentSource, LayoutDump};
