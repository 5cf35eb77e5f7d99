pub mod content;
pub mod links;
pub mod metadata;
pub mod summary;
pub mod text;

#[cfg(test)]
mod tests;

use crate::document::DocumentNode;
use crate::results::ExtractionResult;

pub use content::collect_content;
pub use links::collect_links;
pub use metadata::collect_metadata;
pub use summary::{extract_description, extract_title};
pub use text::normalize;

/// Runs every collector against the same tree and assembles the record.
///
/// Infallible: each collector degrades to `None` or an empty collection.
pub fn extract_document<N: DocumentNode>(root: N) -> ExtractionResult {
    ExtractionResult::new(
        extract_title(root.clone()),
        extract_description(root.clone()),
        collect_content(root.clone()),
        collect_links(root.clone()),
        collect_metadata(root),
    )
}
