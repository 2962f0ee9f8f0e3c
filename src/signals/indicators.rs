//! Official, verified, and academic indicator counts.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Presence counts for fixed trust-indicator keyword sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSignals {
    pub official: usize,
    pub verified: usize,
    pub academic: usize,
}

const OFFICIAL: &[&str] = &[
    r"(?i)\bofficial\b",
    r"(?i)\bdocumentation\b",
    r"(?i)\bdocs\.",
    r"(?i)\bofficial\s+website\b",
];

const VERIFIED: &[&str] = &[
    r"(?i)\bverified\b",
    r"(?i)\bcertified\b",
    r"(?i)\baccredited\b",
    r"(?i)\bauthori[sz]ed\b",
];

const ACADEMIC: &[&str] = &[
    r"(?i)\bpeer[\s-]reviewed\b",
    r"(?i)\bjournal\b",
    r"(?i)\bdoi\.org\b",
    r"(?i)\bstudy\b",
    r"(?i)\bresearch\s+paper\b",
];

/// Count matches of each indicator keyword set.
pub fn extract(content: &str) -> IndicatorSignals {
    IndicatorSignals {
        official: count_matches(content, OFFICIAL),
        verified: count_matches(content, VERIFIED),
        academic: count_matches(content, ACADEMIC),
    }
}

fn count_matches(content: &str, patterns: &[&str]) -> usize {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap().find_iter(content).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let content = "The official documentation is peer-reviewed. Verified by a certified lab.";
        let signals = extract(content);

        assert_eq!(signals.official, 2);
        assert_eq!(signals.verified, 2);
        assert_eq!(signals.academic, 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(extract(""), IndicatorSignals::default());
    }
}
