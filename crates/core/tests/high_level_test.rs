//! Document-level conversion: body rendering, table section assembly,
//! page selection, and degradation on source failure.

use trestle_core::converter::{BodyConverter, TextBodyConverter};
use trestle_core::layout::{PageElement, PageLayout, TextFragment};
use trestle_core::{
    ConvertError, ConvertOptions, FragmentSource, Result, convert_document, convert_to_markdown,
    extract_document_tables,
};

fn frag(text: &str, x0: f64, y0: f64) -> TextFragment {
    TextFragment::new((x0, y0, x0 + 60.0, y0 + 12.0), text)
}

fn page(pageno: usize, lines: &[(&str, f64, f64)]) -> PageLayout {
    let mut page = PageLayout::new(pageno, (0.0, 0.0, 612.0, 792.0));
    for (text, x, y) in lines {
        page.add(PageElement::TextLine(frag(text, *x, *y)));
    }
    page
}

fn table_page(pageno: usize) -> PageLayout {
    page(
        pageno,
        &[("Name  Age", 72.0, 700.0), ("Alice  30", 72.0, 680.0)],
    )
}

fn prose_page(pageno: usize) -> PageLayout {
    page(
        pageno,
        &[
            ("A paragraph of text", 72.0, 700.0),
            ("with no columns", 72.0, 680.0),
        ],
    )
}

/// A source whose layout pass fails outright, as a damaged document does.
struct FailingSource;

impl FragmentSource for FailingSource {
    fn pages(&self) -> Result<Vec<PageLayout>> {
        Err(ConvertError::PageExtraction {
            pageno: 2,
            msg: "damaged page".to_string(),
        })
    }
}

/// A body renderer with its own engine; it never touches the source.
struct FixedBody(&'static str);

impl BodyConverter for FixedBody {
    fn convert(&self, _source: &dyn FragmentSource, _options: &ConvertOptions) -> Result<String> {
        Ok(self.0.to_string())
    }
}

// ============================================================================
// Combined conversion
// ============================================================================

#[test]
fn test_convert_to_markdown_appends_table_section() {
    let markdown = convert_to_markdown(&vec![table_page(1)], None).unwrap();

    let expected = "Name  Age\nAlice  30\n\n\
        ## Extracted Tables\n\n\
        ### Page 1\n\n\
        | Name | Age |\n\
        | --- | --- |\n\
        | Alice | 30 |";
    assert_eq!(markdown, expected);
}

#[test]
fn test_pages_without_tables_produce_body_only() {
    let pages = vec![prose_page(1)];
    let markdown = convert_to_markdown(&pages, None).unwrap();

    assert_eq!(markdown, "A paragraph of text\nwith no columns\n");
    assert!(!markdown.contains("## Extracted Tables"));
}

#[test]
fn test_table_section_collects_every_page() {
    let pages = vec![table_page(1), prose_page(2), table_page(3)];
    let markdown = convert_to_markdown(&pages, None).unwrap();

    assert!(markdown.contains("### Page 1"));
    assert!(!markdown.contains("### Page 2"));
    assert!(markdown.contains("### Page 3"));
}

#[test]
fn test_tables_can_be_disabled() {
    let options = ConvertOptions {
        tables: false,
        ..Default::default()
    };
    let markdown = convert_to_markdown(&vec![table_page(1)], Some(options)).unwrap();

    assert_eq!(markdown, "Name  Age\nAlice  30\n");
}

#[test]
fn test_convert_document_separates_body_and_tables() {
    let document =
        convert_document(&vec![table_page(1)], &TextBodyConverter, &ConvertOptions::default())
            .unwrap();

    assert_eq!(document.body, "Name  Age\nAlice  30\n");
    let tables = document.tables.as_deref().unwrap();
    assert!(tables.starts_with("## Extracted Tables"));
    assert!(tables.contains("| Alice | 30 |"));
    assert!(document.warning.is_none());
}

#[test]
fn test_combined_is_body_when_no_tables() {
    let document =
        convert_document(&vec![prose_page(1)], &TextBodyConverter, &ConvertOptions::default())
            .unwrap();

    assert!(document.tables.is_none());
    assert_eq!(document.combined(), document.body);
}

// ============================================================================
// Degradation on source failure
// ============================================================================

#[test]
fn test_body_survives_table_pass_failure() {
    // The body comes from its own engine here, so a source that cannot
    // produce layouts costs only the table section.
    let document = convert_document(
        &FailingSource,
        &FixedBody("The body made it.\n"),
        &ConvertOptions::default(),
    )
    .unwrap();

    assert_eq!(document.body, "The body made it.\n");
    assert!(document.tables.is_none());
    let warning = document.warning.unwrap();
    assert!(warning.contains("page 2"));
    assert!(warning.contains("damaged page"));
}

#[test]
fn test_table_pass_degrades_to_empty() {
    let extraction = extract_document_tables(&FailingSource, &ConvertOptions::default());

    assert!(extraction.tables.is_empty());
    assert!(extraction.warning.is_some());
}

#[test]
fn test_disabled_tables_skip_the_source_entirely() {
    let options = ConvertOptions {
        tables: false,
        ..Default::default()
    };
    let extraction = extract_document_tables(&FailingSource, &options);

    assert!(extraction.tables.is_empty());
    assert!(extraction.warning.is_none());
}

#[test]
fn test_body_failure_still_propagates() {
    let result = convert_to_markdown(&FailingSource, None);
    assert!(matches!(
        result,
        Err(ConvertError::PageExtraction { pageno: 2, .. })
    ));
}

// ============================================================================
// Page selection
// ============================================================================

#[test]
fn test_page_numbers_select_by_position() {
    let pages = vec![table_page(1), table_page(2), table_page(3)];
    let options = ConvertOptions {
        page_numbers: Some(vec![2]),
        ..Default::default()
    };

    let extraction = extract_document_tables(&pages, &options);
    assert_eq!(extraction.tables.len(), 1);
    // Selection is zero-indexed, labels keep the page's own number.
    assert_eq!(extraction.tables[0].pageno, 3);
}

#[test]
fn test_maxpages_caps_the_run() {
    let pages = vec![table_page(1), table_page(2), table_page(3)];
    let options = ConvertOptions {
        maxpages: 2,
        ..Default::default()
    };

    let extraction = extract_document_tables(&pages, &options);
    let labels: Vec<usize> = extraction.tables.iter().map(|t| t.pageno).collect();
    assert_eq!(labels, vec![1, 2]);
}

#[test]
fn test_selection_applies_to_body_and_tables_alike() {
    let pages = vec![table_page(1), prose_page(2)];
    let options = ConvertOptions {
        page_numbers: Some(vec![1]),
        ..Default::default()
    };

    let markdown = convert_to_markdown(&pages, Some(options)).unwrap();
    assert_eq!(markdown, "A paragraph of text\nwith no columns\n");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_options_default() {
    let options = ConvertOptions::default();

    assert!(options.tables);
    assert!(options.page_numbers.is_none());
    assert_eq!(options.maxpages, 0);
}
