//! GitHub-flavored Markdown rendering for reconstructed tables.

use itertools::Itertools;

use crate::layout::table::{PageTable, TableCandidate};

/// Section header introducing a document's reconstructed tables.
pub const TABLES_SECTION_HEADER: &str = "## Extracted Tables";

/// Render a table as a GitHub-flavored Markdown pipe table.
///
/// The first row is the header; rows shorter than the widest one are
/// padded with empty cells. Ends with a newline.
pub fn table_to_markdown(table: &TableCandidate) -> String {
    if table.rows.is_empty() {
        return String::new();
    }
    let col_count = table.column_count();
    if col_count == 0 {
        return String::new();
    }

    let mut md = String::new();

    push_row(&mut md, &table.rows[0], col_count);

    md.push('|');
    for _ in 0..col_count {
        md.push_str(" --- |");
    }
    md.push('\n');

    for row in table.rows.iter().skip(1) {
        push_row(&mut md, row, col_count);
    }

    md
}

fn push_row(md: &mut String, row: &[String], col_count: usize) {
    md.push('|');
    for col in 0..col_count {
        let cell = row.get(col).map(String::as_str).unwrap_or("");
        md.push_str(&format!(" {cell} |"));
    }
    md.push('\n');
}

/// Render one page's table under its `### Page N` label.
///
/// The label carries the page's own 1-based number, so partial
/// conversions stay truthful. No trailing newline.
pub fn render_page_table(table: &PageTable) -> String {
    format!(
        "### Page {}\n\n{}",
        table.pageno,
        table_to_markdown(&table.table).trim_end()
    )
}

/// Render all page tables in page order, one blank line apart.
pub fn render_tables_section(tables: &[PageTable]) -> String {
    tables.iter().map(render_page_table).join("\n\n")
}
