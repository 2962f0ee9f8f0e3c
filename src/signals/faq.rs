//! FAQ detection.
//!
//! Three independent strategies, unioned without deduplication: JSON-LD
//! `FAQPage` blocks, question-style headings in FAQ-marked documents, and
//! accordion-styled markup.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_tags;
use super::structured_data::ldjson_blocks;

/// Which detection strategy produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqSource {
    Schema,
    Heading,
    Accordion,
}

/// One detected question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub source: FaqSource,
}

/// Extract FAQ entries from all three strategies.
pub fn extract(content: &str) -> Vec<FaqEntry> {
    let mut entries = from_schema(content);
    entries.extend(from_headings(content));
    entries.extend(from_accordions(content));
    entries
}

/// JSON-LD `FAQPage.mainEntity` entries.
fn from_schema(content: &str) -> Vec<FaqEntry> {
    let mut entries = Vec::new();

    for block in ldjson_blocks(content) {
        let nodes = match block {
            serde_json::Value::Array(ref items) => items.clone(),
            other => vec![other],
        };

        for node in nodes {
            let is_faq_page = node
                .get("@type")
                .and_then(|t| t.as_str())
                .map(|t| t.eq_ignore_ascii_case("FAQPage"))
                .unwrap_or(false);

            if !is_faq_page && node.get("mainEntity").is_none() {
                continue;
            }
            let Some(questions) = node.get("mainEntity").and_then(|m| m.as_array()) else {
                continue;
            };

            for question in questions {
                let name = question.get("name").and_then(|n| n.as_str());
                // Answers appear either inline as "text" or nested under
                // "acceptedAnswer.text".
                let answer = question
                    .get("acceptedAnswer")
                    .and_then(|a| a.get("text"))
                    .or_else(|| question.get("text"))
                    .and_then(|t| t.as_str());

                if let (Some(q), Some(a)) = (name, answer) {
                    entries.push(FaqEntry {
                        question: q.trim().to_string(),
                        answer: a.trim().to_string(),
                        source: FaqSource::Schema,
                    });
                }
            }
        }
    }

    entries
}

/// Question headings followed by a paragraph, in documents that carry an
/// FAQ marker ("faq", "frequently asked").
fn from_headings(content: &str) -> Vec<FaqEntry> {
    let lower = content.to_lowercase();
    if !lower.contains("faq") && !lower.contains("frequently asked") {
        return Vec::new();
    }

    let pair_pattern = Regex::new(
        r"(?is)<h[2-6][^>]*>\s*([^<]*?\?)\s*</h[2-6]>\s*(?:<(?:div|section)[^>]*>\s*)?<p[^>]*>(.*?)</p>",
    )
    .unwrap();

    pair_pattern
        .captures_iter(content)
        .map(|cap| FaqEntry {
            question: strip_tags(&cap[1]),
            answer: strip_tags(&cap[2]),
            source: FaqSource::Heading,
        })
        .collect()
}

/// Accordion markup: `<details>/<summary>` pairs and accordion-classed
/// trigger/panel pairs.
fn from_accordions(content: &str) -> Vec<FaqEntry> {
    let mut entries = Vec::new();

    let details_pattern =
        Regex::new(r"(?is)<details[^>]*>\s*<summary[^>]*>(.*?)</summary>(.*?)</details>").unwrap();
    for cap in details_pattern.captures_iter(content) {
        entries.push(FaqEntry {
            question: strip_tags(&cap[1]),
            answer: strip_tags(&cap[2]),
            source: FaqSource::Accordion,
        });
    }

    let class_pattern = Regex::new(
        r#"(?is)<(?:button|div|h[2-6])[^>]*class\s*=\s*["'][^"']*accordion[^"']*["'][^>]*>(.*?)</(?:button|div|h[2-6])>\s*<(?:div|p)[^>]*>(.*?)</(?:div|p)>"#,
    )
    .unwrap();
    for cap in class_pattern.captures_iter(content) {
        entries.push(FaqEntry {
            question: strip_tags(&cap[1]),
            answer: strip_tags(&cap[2]),
            source: FaqSource::Accordion,
        });
    }

    entries
}
