//! High-level document conversion API.
//!
//! Provides the main public entry points:
//! - `convert_document()` - body plus reconstructed tables as one result
//! - `convert_to_markdown()` - the combined Markdown string
//! - `extract_document_tables()` - the degradable table pass on its own

use tracing::{debug, warn};

use crate::converter::{
    BodyConverter, TABLES_SECTION_HEADER, TextBodyConverter, render_tables_section,
};
use crate::error::Result;
use crate::layout::PageLayout;
use crate::layout::table::{PageTable, reconstruct_page_table};
use crate::source::FragmentSource;

/// Options for document conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Whether to run table reconstruction at all.
    pub tables: bool,

    /// Zero-indexed page positions to convert. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Maximum number of pages to convert. 0 means no limit.
    pub maxpages: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tables: true,
            page_numbers: None,
            maxpages: 0,
        }
    }
}

/// Result of the table pass over one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableExtraction {
    /// Accepted tables in page order.
    pub tables: Vec<PageTable>,

    /// Present when the pass degraded to empty on a source failure.
    pub warning: Option<String>,
}

/// Assembled conversion output.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMarkdown {
    /// The body rendering.
    pub body: String,

    /// Rendered tables section, when any table was found.
    pub tables: Option<String>,

    /// Warning from a degraded table pass.
    pub warning: Option<String>,
}

impl DocumentMarkdown {
    /// Body plus tables section, the way a saved conversion looks.
    ///
    /// With tables present the body is joined to the section by one blank
    /// line; without them the body is returned untouched.
    pub fn combined(&self) -> String {
        match &self.tables {
            Some(tables) => format!("{}\n\n{}", self.body.trim_end(), tables),
            None => self.body.clone(),
        }
    }
}

/// Keep the pages selected by `page_numbers` and `maxpages`, in document
/// order.
///
/// Selection is by zero-indexed document position; the surviving pages
/// keep their own `pageno` for labeling.
pub fn select_pages(pages: Vec<PageLayout>, options: &ConvertOptions) -> Vec<PageLayout> {
    let mut selected = Vec::new();
    for (page_idx, page) in pages.into_iter().enumerate() {
        if let Some(nums) = &options.page_numbers
            && !nums.contains(&page_idx)
        {
            continue;
        }
        if options.maxpages > 0 && selected.len() >= options.maxpages {
            break;
        }
        selected.push(page);
    }
    selected
}

/// Reconstruct tables for every selected page of a document.
///
/// This pass never fails: a source that cannot produce layouts degrades
/// the whole document to zero tables plus one warning, leaving whatever
/// else the caller is doing with the document untouched.
pub fn extract_document_tables<S: FragmentSource>(
    source: &S,
    options: &ConvertOptions,
) -> TableExtraction {
    if !options.tables {
        return TableExtraction::default();
    }

    let pages = match source.pages() {
        Ok(pages) => pages,
        Err(err) => {
            warn!("table extraction failed: {err}");
            return TableExtraction {
                tables: Vec::new(),
                warning: Some(format!("table extraction failed: {err}")),
            };
        }
    };

    let mut tables = Vec::new();
    for page in select_pages(pages, options) {
        match reconstruct_page_table(page.text_fragments()) {
            Some(table) => {
                debug!(pageno = page.pageno, rows = table.rows.len(), "table accepted");
                tables.push(PageTable {
                    pageno: page.pageno,
                    table,
                });
            }
            None => debug!(pageno = page.pageno, "no table on page"),
        }
    }

    TableExtraction {
        tables,
        warning: None,
    }
}

/// Convert a document to Markdown.
///
/// The body conversion runs first and its error propagates; the table
/// pass runs second and only ever degrades. The two stay independent:
/// a degraded table pass still yields a complete body.
pub fn convert_document<S, B>(
    source: &S,
    body: &B,
    options: &ConvertOptions,
) -> Result<DocumentMarkdown>
where
    S: FragmentSource,
    B: BodyConverter,
{
    let body_md = body.convert(source, options)?;
    let extraction = extract_document_tables(source, options);

    let tables = if extraction.tables.is_empty() {
        None
    } else {
        Some(format!(
            "{}\n\n{}",
            TABLES_SECTION_HEADER,
            render_tables_section(&extraction.tables)
        ))
    };

    Ok(DocumentMarkdown {
        body: body_md,
        tables,
        warning: extraction.warning,
    })
}

/// Convert with the plain text body renderer and return the combined
/// Markdown string.
pub fn convert_to_markdown<S: FragmentSource>(
    source: &S,
    options: Option<ConvertOptions>,
) -> Result<String> {
    let options = options.unwrap_or_default();
    let document = convert_document(source, &TextBodyConverter, &options)?;
    Ok(document.combined())
}
