//! Layout element types.
//!
//! The model a layout source hands over:
//! - Component: base type for objects with bounding boxes
//! - TextFragment: a line of text with a known position
//! - PageElement: enum over everything that can sit on a page
//! - PageLayout: one page's elements plus its page number

use crate::utils::{HasBBox, Rect};

/// Base component with a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub(crate) x0: f64,
    pub(crate) y0: f64,
    pub(crate) x1: f64,
    pub(crate) y1: f64,
}

impl Component {
    pub fn new(bbox: Rect) -> Self {
        let (x0, y0, x1, y1) = bbox;
        Self { x0, y0, x1, y1 }
    }
}

impl HasBBox for Component {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}

/// A line of text with a known bounding box.
///
/// Produced by a layout-aware reader; immutable and scoped to one page.
/// `y0` is the lower edge of the line, the coordinate row clustering keys on.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    component: Component,
    text: String,
}

impl TextFragment {
    pub fn new(bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            component: Component::new(bbox),
            text: text.into(),
        }
    }

    /// Returns the fragment's string content.
    pub fn get_text(&self) -> &str {
        &self.text
    }
}

impl HasBBox for TextFragment {
    fn x0(&self) -> f64 {
        self.component.x0
    }
    fn y0(&self) -> f64 {
        self.component.y0
    }
    fn x1(&self) -> f64 {
        self.component.x1
    }
    fn y1(&self) -> f64 {
        self.component.y1
    }
}

/// Any element that can appear on a page.
///
/// Only text lines carry content. The remaining kinds exist so a source can
/// hand a page over verbatim; consumers filter for what they understand.
#[derive(Debug, Clone, PartialEq)]
pub enum PageElement {
    TextLine(TextFragment),
    Image(Component),
    Curve(Component),
    Rect(Component),
}

impl PageElement {
    pub fn is_text_line(&self) -> bool {
        matches!(self, PageElement::TextLine(_))
    }

    pub fn as_text_line(&self) -> Option<&TextFragment> {
        match self {
            PageElement::TextLine(fragment) => Some(fragment),
            _ => None,
        }
    }
}

impl HasBBox for PageElement {
    fn x0(&self) -> f64 {
        self.component().x0
    }
    fn y0(&self) -> f64 {
        self.component().y0
    }
    fn x1(&self) -> f64 {
        self.component().x1
    }
    fn y1(&self) -> f64 {
        self.component().y1
    }
}

impl PageElement {
    fn component(&self) -> &Component {
        match self {
            PageElement::TextLine(fragment) => &fragment.component,
            PageElement::Image(component) => component,
            PageElement::Curve(component) => component,
            PageElement::Rect(component) => component,
        }
    }
}

/// One page of layout elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// 1-based page number.
    pub pageno: usize,
    bbox: Rect,
    elements: Vec<PageElement>,
}

impl PageLayout {
    pub fn new(pageno: usize, bbox: Rect) -> Self {
        Self {
            pageno,
            bbox,
            elements: Vec::new(),
        }
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Adds an element to the page.
    pub fn add(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    /// Returns an iterator over contained elements.
    pub fn iter(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter()
    }

    /// Returns the page's text lines, skipping every other element kind.
    pub fn text_fragments(&self) -> impl Iterator<Item = &TextFragment> {
        self.elements.iter().filter_map(PageElement::as_text_line)
    }
}
