//! JSON layout dumps.
//!
//! The interchange format for precomputed layouts: one object per page
//! with a 1-based `pageno`, an optional page `bbox`, and an `elements`
//! array. Each element carries a `kind` ("text", "image", "curve",
//! "rect"), a `bbox` of `[x0, y0, x1, y1]`, and, for text, the line's
//! string content:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "pageno": 1,
//!       "bbox": [0.0, 0.0, 612.0, 792.0],
//!       "elements": [
//!         { "kind": "text", "bbox": [72.0, 700.0, 180.0, 712.0], "text": "Name  Age" },
//!         { "kind": "image", "bbox": [200.0, 90.0, 300.0, 190.0] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Elements of unknown kind, or without usable geometry or content, are
//! dropped rather than rejected; a dump that does not parse at all is an
//! error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::layout::{Component, PageElement, PageLayout, TextFragment};
use crate::source::FragmentSource;

#[derive(Debug, Deserialize)]
struct DumpFile {
    pages: Vec<DumpPage>,
}

#[derive(Debug, Deserialize)]
struct DumpPage {
    pageno: usize,
    #[serde(default)]
    bbox: Option<[f64; 4]>,
    #[serde(default)]
    elements: Vec<DumpElement>,
}

#[derive(Debug, Deserialize)]
struct DumpElement {
    kind: String,
    #[serde(default)]
    bbox: Option<[f64; 4]>,
    #[serde(default)]
    text: Option<String>,
}

/// A parsed layout dump, ready to serve as a [`FragmentSource`].
#[derive(Debug, Clone)]
pub struct LayoutDump {
    pages: Vec<PageLayout>,
}

impl LayoutDump {
    /// Parse a dump from its JSON text.
    pub fn parse(data: &str) -> Result<Self> {
        let file: DumpFile = serde_json::from_str(data)?;
        Self::from_records(file)
    }

    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: DumpFile = serde_json::from_reader(reader)?;
        Self::from_records(file)
    }

    /// Parse a dump file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of pages in the dump.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn from_records(file: DumpFile) -> Result<Self> {
        let mut pages = Vec::with_capacity(file.pages.len());
        for record in file.pages {
            if record.pageno == 0 {
                return Err(ConvertError::MalformedDump(
                    "page numbers are 1-based".to_string(),
                ));
            }
            let bbox = record.bbox.map(rect).unwrap_or((0.0, 0.0, 0.0, 0.0));
            let mut page = PageLayout::new(record.pageno, bbox);
            for element in record.elements {
                if let Some(element) = convert_element(element) {
                    page.add(element);
                }
            }
            pages.push(page);
        }
        Ok(Self { pages })
    }
}

impl FragmentSource for LayoutDump {
    fn pages(&self) -> Result<Vec<PageLayout>> {
        Ok(self.pages.clone())
    }
}

fn rect(bbox: [f64; 4]) -> crate::utils::Rect {
    (bbox[0], bbox[1], bbox[2], bbox[3])
}

/// Map one dump record to a page element, or `None` when the record is
/// not usable (unknown kind, missing geometry, text without content).
fn convert_element(element: DumpElement) -> Option<PageElement> {
    let bbox = rect(element.bbox?);
    match element.kind.as_str() {
        "text" => element
            .text
            .map(|text| PageElement::TextLine(TextFragment::new(bbox, text))),
        "image" => Some(PageElement::Image(Component::new(bbox))),
        "curve" => Some(PageElement::Curve(Component::new(bbox))),
        "rect" => Some(PageElement::Rect(Component::new(bbox))),
        _ => None,
    }
}
