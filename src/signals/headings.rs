//! Heading profile extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Per-level heading counts and hierarchy validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingProfile {
    /// Counts for h1..h6, index 0 = h1
    pub counts: [usize; 6],

    /// True iff no heading jumps more than one level deeper than the
    /// previous one (h1 → h3 invalidates, h3 → h1 does not)
    pub hierarchy_valid: bool,
}

impl HeadingProfile {
    /// Count at a 1-based heading level.
    pub fn count(&self, level: usize) -> usize {
        if (1..=6).contains(&level) {
            self.counts[level - 1]
        } else {
            0
        }
    }

    /// Total headings across all levels.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Extract the heading profile in document order.
pub fn extract(content: &str) -> HeadingProfile {
    let heading_pattern = Regex::new(r"(?is)<h([1-6])[^>]*>").unwrap();

    let mut counts = [0usize; 6];
    let mut hierarchy_valid = true;
    let mut previous_level: Option<usize> = None;

    for cap in heading_pattern.captures_iter(content) {
        let level: usize = cap[1].parse().unwrap_or(1);
        counts[level - 1] += 1;

        if let Some(prev) = previous_level {
            if level > prev + 1 {
                hierarchy_valid = false;
            }
        }
        previous_level = Some(level);
    }

    // A page with no headings has nothing invalid about it.
    HeadingProfile {
        counts,
        hierarchy_valid,
    }
}
