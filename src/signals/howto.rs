//! How-to step detection.
//!
//! Three strategies, unioned: JSON-LD `HowTo` steps, ordered lists under
//! "how to" headings, and inline "step N" phrases.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_tags;
use super::structured_data::ldjson_blocks;

/// Which strategy produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HowToSource {
    Schema,
    OrderedList,
    StepPhrase,
}

/// One detected instruction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToStep {
    pub text: String,
    /// 1-based position within its strategy
    pub position: usize,
    pub source: HowToSource,
}

/// Extract how-to steps from all three strategies.
pub fn extract(content: &str) -> Vec<HowToStep> {
    let mut steps = from_schema(content);
    steps.extend(from_ordered_lists(content));
    steps.extend(from_step_phrases(content));
    steps
}

/// JSON-LD `HowTo.step` entries (text or name per step).
fn from_schema(content: &str) -> Vec<HowToStep> {
    let mut steps = Vec::new();

    for block in ldjson_blocks(content) {
        let nodes = match block {
            serde_json::Value::Array(ref items) => items.clone(),
            other => vec![other],
        };

        for node in nodes {
            let is_howto = node
                .get("@type")
                .and_then(|t| t.as_str())
                .map(|t| t.eq_ignore_ascii_case("HowTo"))
                .unwrap_or(false);
            if !is_howto {
                continue;
            }

            let Some(schema_steps) = node.get("step").and_then(|s| s.as_array()) else {
                continue;
            };

            for (i, step) in schema_steps.iter().enumerate() {
                let text = step
                    .get("text")
                    .or_else(|| step.get("name"))
                    .and_then(|t| t.as_str());

                if let Some(text) = text {
                    steps.push(HowToStep {
                        text: text.trim().to_string(),
                        position: i + 1,
                        source: HowToSource::Schema,
                    });
                }
            }
        }
    }

    steps
}

/// Items of the first `<ol>` after a heading containing "how to".
fn from_ordered_lists(content: &str) -> Vec<HowToStep> {
    let section_pattern =
        Regex::new(r"(?is)<h[1-6][^>]*>[^<]*how\s+to[^<]*</h[1-6]>.*?<ol[^>]*>(.*?)</ol>").unwrap();
    let item_pattern = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap();

    let mut steps = Vec::new();

    for section_cap in section_pattern.captures_iter(content) {
        for (i, item_cap) in item_pattern.captures_iter(&section_cap[1]).enumerate() {
            steps.push(HowToStep {
                text: strip_tags(&item_cap[1]),
                position: i + 1,
                source: HowToSource::OrderedList,
            });
        }
    }

    steps
}

/// Inline "step N" phrases with their trailing text.
fn from_step_phrases(content: &str) -> Vec<HowToStep> {
    let step_pattern = Regex::new(r"(?i)\bstep\s+(\d{1,2})\b[:.\-]?\s*([^<\n]{0,120})").unwrap();

    step_pattern
        .captures_iter(content)
        .filter_map(|cap| {
            let position: usize = cap[1].parse().ok()?;
            Some(HowToStep {
                text: cap[2].trim().to_string(),
                position,
                source: HowToSource::StepPhrase,
            })
        })
        .collect()
}
