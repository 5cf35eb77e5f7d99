use crate::document::{DocumentNode, elements_named};

/// Text of the first `<title>` element, exactly as parsed
pub fn extract_title<N: DocumentNode>(root: N) -> Option<String> {
    elements_named(root, "title")
        .next()
        .map(|title| title.text_content())
}

/// `content` of the first `<meta name="description">`.
///
/// Later description elements are never consulted, even when the first one
/// has no `content` attribute.
pub fn extract_description<N: DocumentNode>(root: N) -> Option<String> {
    elements_named(root, "meta")
        .find(|meta| meta.attribute("name") == Some("description"))
        .and_then(|meta| meta.attribute("content").map(str::to_string))
}
