use thiserror::Error;

/// The target URL could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme '{0}' (only http and https are fetched)")]
    UnsupportedScheme(String),

    #[error("timed out after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
}

/// The fetched bytes could not be turned into a document tree
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Which stage aborted an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FetchError,
    ParseError,
}

impl FailureKind {
    /// Stable identifier used in error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::FetchError => "fetch_error",
            FailureKind::ParseError => "parse_error",
        }
    }
}

/// Terminal failure of a single extraction. Never carries partial results.
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

impl ExtractionFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractionFailure::Fetch(_) => FailureKind::FetchError,
            ExtractionFailure::Parse(_) => FailureKind::ParseError,
        }
    }
}
