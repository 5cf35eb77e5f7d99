pub mod html;

use crate::document::DocumentNode;
use crate::errors::ParseError;

pub use html::{HtmlDocument, HtmlParser};

/// A parsed document that can hand out its root element
pub trait DocumentTree {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// The outermost element, usually `<html>`
    fn root(&self) -> Self::Node<'_>;
}

/// Turns fetched bytes into a navigable document tree
pub trait Parser: Send + Sync {
    type Document: DocumentTree;

    fn parse(&self, bytes: &[u8]) -> Result<Self::Document, ParseError>;
}
