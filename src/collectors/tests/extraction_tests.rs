use crate::collectors::extract_document;
use crate::results::ExtractionResult;
use scraper::Html;
use std::collections::BTreeMap;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_end_to_end_document() {
        let html = Html::parse_document(
            r#"<html><head><title>T</title><meta name="description" content="D"></head><body><h1>H1</h1><a href="/x">x</a><a href="/x">dup</a><meta name="author" content="A"></body></html>"#,
        );

        let result = extract_document(html.root_element());

        // The description meta is also collected as general metadata
        let mut metadata = BTreeMap::new();
        metadata.insert("author".to_string(), "A".to_string());
        metadata.insert("description".to_string(), "D".to_string());

        assert_eq!(
            result,
            ExtractionResult::new(
                Some("T".to_string()),
                Some("D".to_string()),
                Some("H1".to_string()),
                vec!["/x".to_string()],
                metadata,
            )
        );
    }

    #[test]
    fn test_empty_document() {
        let html = Html::parse_document("");
        let result = extract_document(html.root_element());

        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_malformed_markup_still_extracts() {
        let html = Html::parse_document("<p>unclosed <span>nested <li>item<a href=/bare>link");
        let result = extract_document(html.root_element());

        assert_eq!(result.title, None);
        assert_eq!(result.links, vec!["/bare".to_string()]);
        let content = result.content.unwrap_or_default();
        assert!(content.starts_with("unclosed nested\nnested"));
        assert!(content.ends_with("itemlink"));
    }
}
