//! Layout sources.
//!
//! The conversion pipeline does not parse documents itself; it consumes
//! page layouts from anything implementing [`FragmentSource`].

mod json;

pub use json::LayoutDump;

use crate::error::Result;
use crate::layout::PageLayout;

/// A provider of page-ordered text fragments with bounding boxes.
///
/// Implementations wrap a concrete layout engine or precomputed data and
/// hand over one [`PageLayout`] per page, in document order. A document
/// whose layout cannot be produced reports an error (typically
/// [`ConvertError::PageExtraction`](crate::error::ConvertError::PageExtraction));
/// the table pass degrades on it, the body pass propagates it.
pub trait FragmentSource {
    fn pages(&self) -> Result<Vec<PageLayout>>;
}

/// Precomputed layouts are a source of their own pages.
impl FragmentSource for Vec<PageLayout> {
    fn pages(&self) -> Result<Vec<PageLayout>> {
        Ok(self.clone())
    }
}
