use crate::errors::ParseError;
use crate::parsers::{DocumentTree, Parser};
use scraper::{ElementRef, Html};

/// Lenient HTML5 parser backed by `scraper`.
///
/// Malformed markup never fails; only bytes that are not UTF-8 are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

/// A document parsed by [`HtmlParser`]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses HTML source that is already a string
    pub fn parse_str(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }
}

impl DocumentTree for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl Parser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, bytes: &[u8]) -> Result<HtmlDocument, ParseError> {
        let source = std::str::from_utf8(bytes)?;
        ::log::debug!("Parsing {} bytes of HTML", source.len());
        Ok(HtmlDocument::parse_str(source))
    }
}
