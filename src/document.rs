//! Read-only view of a parsed document tree.
//!
//! Collectors only depend on [`DocumentNode`], so any parser that can expose
//! tag names, attributes, child elements and descendant text can feed them.

use scraper::ElementRef;

/// A single element of a parsed document
pub trait DocumentNode: Clone {
    /// Lower-cased tag name
    fn tag_name(&self) -> &str;

    /// Attribute value, or `None` if the attribute is not set
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order
    fn child_elements(&self) -> Vec<Self>;

    /// Concatenation of all descendant text in document order
    fn text_content(&self) -> String;
}

/// Pre-order, depth-first walk starting at (and including) a node
pub struct Descendants<N> {
    stack: Vec<N>,
}

impl<N: DocumentNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        let mut children = node.child_elements();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}

/// Walk `root` and everything below it in document order
pub fn descendants<N: DocumentNode>(root: N) -> Descendants<N> {
    Descendants { stack: vec![root] }
}

/// Walk the tree, yielding only elements with the given tag
pub fn elements_named<N: DocumentNode>(root: N, tag: &'static str) -> impl Iterator<Item = N> {
    descendants(root).filter(move |node| node.tag_name() == tag)
}

impl DocumentNode for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}
