//! List block detection.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_tags;

/// One `<ol>` or `<ul>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub ordered: bool,
    pub items: Vec<String>,
}

/// Extract list blocks with their items.
pub fn extract(content: &str) -> Vec<ListBlock> {
    let list_pattern = Regex::new(r"(?is)<(ol|ul)[^>]*>(.*?)</(?:ol|ul)>").unwrap();
    let item_pattern = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap();

    list_pattern
        .captures_iter(content)
        .map(|cap| {
            let items = item_pattern
                .captures_iter(&cap[2])
                .map(|item| strip_tags(&item[1]))
                .collect();

            ListBlock {
                ordered: cap[1].eq_ignore_ascii_case("ol"),
                items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_and_unordered() {
        let html = "<ol><li>one</li><li>two</li></ol><ul><li>bullet</li></ul>";
        let lists = extract(html);

        assert_eq!(lists.len(), 2);
        assert!(lists[0].ordered);
        assert_eq!(lists[0].items, vec!["one", "two"]);
        assert!(!lists[1].ordered);
        assert_eq!(lists[1].items, vec!["bullet"]);
    }

    #[test]
    fn test_items_stripped() {
        let html = "<ul><li><strong>bold</strong> item</li></ul>";
        assert_eq!(extract(html)[0].items[0], "bold item");
    }

    #[test]
    fn test_no_lists() {
        assert!(extract("<p>plain</p>").is_empty());
    }
}
