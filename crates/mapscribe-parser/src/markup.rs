//! Minimal structured-document model for captured pages.
//!
//! Captured pages are serialized HTML with inline SVG. Extraction only needs
//! to select elements by tag and class, read attributes and text, and the SVG
//! annotator needs to clone, edit and re-serialize a subtree. This module
//! provides exactly that:
//!
//! - [`Document`] - a forgiving parse of the whole capture
//! - [`Element`] / [`Node`] - the element tree, serializable via `Display`
//! - [`Selector`] - `tag`, `.class` or `tag.class` matching

mod document;
mod lexer;

pub use document::{Descendants, Document, Element, Node, Xml};

/// Matches elements by tag name (ASCII case-insensitive) and/or class token.
///
/// # Examples
///
/// ```
/// use mapscribe_parser::markup::{Element, Selector};
///
/// let node = Element::new("g").with_attribute("class", "node selected");
///
/// assert!(Selector::parse("g.node").matches(&node));
/// assert!(Selector::parse(".selected").matches(&node));
/// assert!(Selector::parse("G").matches(&node));
/// assert!(!Selector::parse("g.link").matches(&node));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Matches elements named `tag`.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            class: None,
        }
    }

    /// Matches elements carrying the class token `class`.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            tag: None,
            class: Some(class.into()),
        }
    }

    /// Restricts the selector to elements carrying `class` (builder style).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Parses `tag`, `.class` or `tag.class`.
    ///
    /// Empty parts match anything.
    pub fn parse(selector: &str) -> Self {
        let (tag, class) = match selector.split_once('.') {
            Some((tag, class)) => (tag, class),
            None => (selector, ""),
        };
        let non_empty = |part: &str| {
            let part = part.trim();
            (!part.is_empty()).then(|| part.to_string())
        };

        Self {
            tag: non_empty(tag),
            class: non_empty(class),
        }
    }

    /// Whether `element` satisfies both the tag and the class constraint.
    pub fn matches(&self, element: &Element) -> bool {
        let tag_matches = self.tag.as_deref().is_none_or(|tag| element.is(tag));
        let class_matches = self
            .class
            .as_deref()
            .is_none_or(|class| element.has_class(class));
        tag_matches && class_matches
    }
}
