//! Output converters.
//!
//! Turns page layouts into Markdown:
//! - BodyConverter: trait for the document-body rendering
//! - TextBodyConverter: plain reading-order body text
//! - Markdown table rendering for reconstructed tables

mod markdown;
mod text;

pub use markdown::{
    TABLES_SECTION_HEADER, render_page_table, render_tables_section, table_to_markdown,
};
pub use text::TextBodyConverter;

use crate::error::Result;
use crate::high_level::ConvertOptions;
use crate::source::FragmentSource;

/// Converts a document's body to Markdown.
///
/// The body algorithm is the implementation's own business; the pipeline
/// only arranges for it to run independently of table reconstruction, so
/// a failed table pass never takes the body down with it. Implementations
/// are free to ignore `source` and read the document through their own
/// engine.
pub trait BodyConverter {
    fn convert(&self, source: &dyn FragmentSource, options: &ConvertOptions) -> Result<String>;
}
