use crate::collectors::text::normalize;
use crate::document::{DocumentNode, descendants};

/// Tags whose text makes up the page content
pub const CONTENT_TAGS: [&str; 8] = ["h1", "h2", "h3", "h4", "h5", "p", "span", "li"];

/// Collects the normalized text of every content element, one per line.
///
/// Nested content elements each contribute their own full text, so a `span`
/// inside a `p` appears twice. Returns `None` only when no content element
/// exists at all.
pub fn collect_content<N: DocumentNode>(root: N) -> Option<String> {
    let fragments: Vec<String> = descendants(root)
        .filter(|node| CONTENT_TAGS.contains(&node.tag_name()))
        .map(|node| normalize(&node.text_content()))
        .collect();

    ::log::debug!("Content collector matched {} elements", fragments.len());

    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("\n"))
    }
}
