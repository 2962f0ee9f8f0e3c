//! Frequency-filtered entity mention detection.
//!
//! Capitalized multi-word sequences that repeat more than twice. This is a
//! frequency heuristic, not named-entity recognition.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::strip_tags;

/// A repeated capitalized sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    pub name: String,
    pub count: usize,
}

/// Extract sequences occurring more than twice, most frequent first.
pub fn extract(content: &str) -> Vec<EntityMention> {
    let text = strip_tags(content);
    let sequence_pattern = Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").unwrap();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in sequence_pattern.find_iter(&text) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }

    let mut entities: Vec<EntityMention> = counts
        .into_iter()
        .filter(|(_, count)| *count > 2)
        .map(|(name, count)| EntityMention { name, count })
        .collect();

    // Most frequent first; name as tiebreak for determinism
    entities.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_sequences() {
        let content = "Acme Corp ships fast. Acme Corp is small. We like Acme Corp. \
                       Beta Inc appeared once.";
        let entities = extract(content);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Acme Corp");
        assert_eq!(entities[0].count, 3);
    }

    #[test]
    fn test_twice_is_not_enough() {
        let content = "Acme Corp here. Acme Corp there.";
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_single_capitalized_words_ignored() {
        let content = "Rust Rust Rust Rust";
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_deterministic_order() {
        let content = "Zed Team x3: Zed Team, Zed Team. Ace Group x3: Ace Group, Ace Group.";
        let entities = extract(content);

        assert_eq!(entities.len(), 2);
        // Equal counts: sorted by name.
        assert_eq!(entities[0].name, "Ace Group");
    }
}
