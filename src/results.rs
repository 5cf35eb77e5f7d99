use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured record extracted from a single HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text of the first `<title>` element, as found
    pub title: Option<String>,

    /// `content` of the first `<meta name="description">`
    pub description: Option<String>,

    /// Normalized text of the text-bearing elements, newline separated
    pub content: Option<String>,

    /// Unique `href` values of anchor elements, in first-seen order
    pub links: Vec<String>,

    /// Named meta elements, later duplicates overriding earlier ones
    pub metadata: BTreeMap<String, String>,
}

impl ExtractionResult {
    /// Create a new extraction result
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        content: Option<String>,
        links: Vec<String>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            title,
            description,
            content,
            links,
            metadata,
        }
    }
}
