pub mod collectors;
pub mod config;
pub mod document;
pub mod errors;
pub mod fetchers;
pub mod parsers;
pub mod results;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use errors::{ExtractionFailure, FailureKind, FetchError, ParseError};
pub use results::ExtractionResult;

use collectors::extract_document;
use config::ExtractorConfig;
use fetchers::{Fetcher, WebFetcher};
use parsers::{DocumentTree, HtmlParser, Parser};

/// Fetches a page, parses it and extracts an [`ExtractionResult`].
///
/// Stateless between calls, so one extractor can serve any number of
/// concurrent requests.
pub struct Extractor<F, P = HtmlParser> {
    fetcher: F,
    parser: P,
}

impl Extractor<WebFetcher, HtmlParser> {
    /// Create an extractor using the HTTP fetcher and the HTML parser
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, FetchError> {
        Ok(Self::new(WebFetcher::new(config)?, HtmlParser))
    }
}

impl<F: Fetcher, P: Parser> Extractor<F, P> {
    /// Create an extractor from its collaborators
    pub fn new(fetcher: F, parser: P) -> Self {
        Self { fetcher, parser }
    }

    /// Fetch `url` and extract its structured record.
    ///
    /// A fetch or parse failure aborts the whole extraction; nothing is
    /// retried and no partial result is returned.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult, ExtractionFailure> {
        ::log::debug!("Starting extraction for {}", url);
        let bytes = self.fetcher.fetch(url).await?;

        let result = self.extract_bytes(&bytes)?;
        ::log::debug!(
            "Extracted {} links and {} metadata entries from {}",
            result.links.len(),
            result.metadata.len(),
            url
        );
        Ok(result)
    }

    /// Parse already fetched bytes and extract from them
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractionResult, ParseError> {
        ::log::debug!("Parsing {} bytes", bytes.len());
        let document = self.parser.parse(bytes)?;

        ::log::debug!("Extracting from parsed document");
        Ok(extract_document(document.root()))
    }
}
