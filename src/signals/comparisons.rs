//! Comparison-content detection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How strongly comparison phrasing shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    High,
    Medium,
}

/// Aggregated comparison-phrasing counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSignal {
    /// Match count per pattern label
    pub counts: BTreeMap<String, usize>,

    /// Total matches across patterns
    pub total_matches: usize,

    /// High when total exceeds 3, otherwise medium
    pub strength: SignalStrength,
}

const PATTERNS: &[(&str, &str)] = &[
    ("versus", r"(?i)\bversus\b"),
    ("vs", r"(?i)\bvs\.?\b"),
    ("compared_to", r"(?i)\bcompared\s+(?:to|with)\b"),
    ("comparison", r"(?i)\bcomparison\b"),
    ("pros_and_cons", r"(?i)\bpros\s+and\s+cons\b"),
    ("competitor", r"(?i)\bcompetitors?\b"),
    ("alternative", r"(?i)\balternatives?\b"),
];

/// Count comparison phrasing. `None` when nothing matches.
pub fn extract(content: &str) -> Option<ComparisonSignal> {
    let mut counts = BTreeMap::new();
    let mut total = 0;

    for (label, pattern) in PATTERNS {
        let count = Regex::new(pattern).unwrap().find_iter(content).count();
        if count > 0 {
            counts.insert((*label).to_string(), count);
            total += count;
        }
    }

    if total == 0 {
        return None;
    }

    Some(ComparisonSignal {
        counts,
        total_matches: total,
        strength: if total > 3 {
            SignalStrength::High
        } else {
            SignalStrength::Medium
        },
    })
}
