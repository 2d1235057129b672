//! Plain-text body conversion.

use crate::converter::BodyConverter;
use crate::error::Result;
use crate::high_level::{ConvertOptions, select_pages};
use crate::layout::TextFragment;
use crate::source::FragmentSource;
use crate::utils::HasBBox;

/// Renders the document body as plain reading-order text.
///
/// Each text line becomes one output line, top to bottom and left to
/// right within a page; pages are separated by a blank line. Non-text
/// elements are skipped. Deliberately unadorned: callers with a richer
/// Markdown engine implement [`BodyConverter`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBodyConverter;

impl BodyConverter for TextBodyConverter {
    fn convert(&self, source: &dyn FragmentSource, options: &ConvertOptions) -> Result<String> {
        let pages = select_pages(source.pages()?, options);

        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let mut fragments: Vec<&TextFragment> = page.text_fragments().collect();
            fragments.sort_by(|a, b| {
                b.y0()
                    .partial_cmp(&a.y0())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| {
                        a.x0()
                            .partial_cmp(&b.x0())
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
            });
            for fragment in fragments {
                out.push_str(fragment.get_text().trim_end());
                out.push('\n');
            }
        }
        Ok(out)
    }
}
