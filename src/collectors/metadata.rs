use crate::document::{DocumentNode, elements_named};
use std::collections::BTreeMap;

/// Collects `name` -> `content` for every meta element that has both.
/// Empty names and empty contents count as missing.
///
/// When a name repeats, the one later in the document wins. The description
/// meta element is included like any other.
pub fn collect_metadata<N: DocumentNode>(root: N) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();

    for meta in elements_named(root, "meta") {
        let name = meta.attribute("name").filter(|name| !name.is_empty());
        let content = meta.attribute("content").filter(|content| !content.is_empty());
        let (Some(name), Some(content)) = (name, content) else {
            continue;
        };
        metadata.insert(name.to_string(), content.to_string());
    }

    metadata
}
