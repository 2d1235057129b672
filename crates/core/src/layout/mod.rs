//! Page layout model.
//!
//! This module contains:
//! - Layout element types (PageLayout, PageElement, TextFragment)
//! - Table reconstruction from positioned text fragments

pub mod elements;
pub mod table;

// Re-export element types
pub use elements::*;
