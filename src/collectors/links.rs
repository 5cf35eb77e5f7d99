use crate::document::{DocumentNode, elements_named};
use crate::utils::OrderedSet;

/// Collects anchor `href` values, deduplicated by exact string equality.
///
/// Anchors without an `href`, or with an empty one, are skipped. URLs are
/// returned exactly as written: no resolution, no trailing slash or case
/// folding.
pub fn collect_links<N: DocumentNode>(root: N) -> Vec<String> {
    let mut links = OrderedSet::new();
    let mut anchors = 0usize;

    for anchor in elements_named(root, "a") {
        anchors += 1;
        if let Some(href) = anchor.attribute("href").filter(|href| !href.is_empty()) {
            links.insert(href);
        }
    }

    ::log::debug!(
        "Link collector found {} unique links across {} anchors",
        links.len(),
        anchors
    );

    links.into_vec()
}
