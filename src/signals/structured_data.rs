//! JSON-LD structured data detection.
//!
//! Scans `<script type="application/ld+json">` bodies. Malformed blocks are
//! skipped with a warning; one bad block never aborts the page.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One typed JSON-LD node with the facets the scorer and synthesizer use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDataRecord {
    /// The node's `@type` value
    pub type_name: String,

    pub has_rating: bool,
    pub has_reviews: bool,
    pub has_faq: bool,
    pub has_howto: bool,
    pub has_organization: bool,
    pub has_product: bool,
}

/// Extract one record per typed JSON-LD node.
pub fn extract(content: &str) -> Vec<StructuredDataRecord> {
    ldjson_blocks(content)
        .iter()
        .flat_map(typed_nodes)
        .map(|(type_name, node)| record_for(type_name, node))
        .collect()
}

/// Parse every JSON-LD script body in the content.
///
/// Shared with the FAQ and how-to extractors, which read schema blocks too.
pub(crate) fn ldjson_blocks(content: &str) -> Vec<Value> {
    let script_pattern = Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .unwrap();

    script_pattern
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .filter_map(|body| match serde_json::from_str::<Value>(body.as_str()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "skipping malformed JSON-LD block");
                None
            }
        })
        .collect()
}

/// Flatten a block into its typed nodes, unwrapping arrays and `@graph`.
fn typed_nodes(block: &Value) -> Vec<(String, &Value)> {
    let mut nodes = Vec::new();

    match block {
        Value::Array(items) => {
            for item in items {
                nodes.extend(typed_nodes(item));
            }
        }
        Value::Object(obj) => {
            if let Some(graph) = obj.get("@graph") {
                nodes.extend(typed_nodes(graph));
            }
            for type_name in type_names(block) {
                nodes.push((type_name, block));
            }
        }
        _ => {}
    }

    nodes
}

/// `@type` may be a string or an array of strings.
fn type_names(node: &Value) -> Vec<String> {
    match node.get("@type") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

fn record_for(type_name: String, node: &Value) -> StructuredDataRecord {
    let lower = type_name.to_lowercase();

    StructuredDataRecord {
        has_rating: node.get("aggregateRating").is_some() || lower == "aggregaterating",
        has_reviews: node.get("review").is_some() || lower == "review",
        has_faq: lower == "faqpage" || node.get("mainEntity").is_some(),
        has_howto: lower == "howto",
        has_organization: lower == "organization",
        has_product: lower == "product",
        type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(json: &str) -> String {
        format!(r#"<script type="application/ld+json">{json}</script>"#)
    }

    #[test]
    fn test_product_with_rating() {
        let html = wrap(r#"{"@type":"Product","name":"Widget","aggregateRating":{"ratingValue":4.5}}"#);
        let records = extract(&html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].type_name, "Product");
        assert!(records[0].has_product);
        assert!(records[0].has_rating);
        assert!(!records[0].has_howto);
    }

    #[test]
    fn test_malformed_block_skipped() {
        let html = format!(
            "{}{}",
            wrap(r#"{"@type": broken"#),
            wrap(r#"{"@type":"Organization"}"#)
        );
        let records = extract(&html);

        assert_eq!(records.len(), 1);
        assert!(records[0].has_organization);
    }

    #[test]
    fn test_graph_unwrapped() {
        let html = wrap(r#"{"@graph":[{"@type":"FAQPage"},{"@type":"HowTo"}]}"#);
        let records = extract(&html);

        assert_eq!(records.len(), 2);
        assert!(records.iter().any(|r| r.has_faq));
        assert!(records.iter().any(|r| r.has_howto));
    }

    #[test]
    fn test_type_array() {
        let html = wrap(r#"{"@type":["Product","Thing"]}"#);
        let records = extract(&html);

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_no_blocks() {
        assert!(extract("<p>plain</p>").is_empty());
    }
}
