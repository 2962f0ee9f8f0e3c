//! Freshness marker detection.
//!
//! First match wins, in priority order: explicit "last modified", visible
//! "updated" phrasing, `dateModified`, `datePublished`, then any visible
//! date.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// What kind of marker established freshness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessMarker {
    LastModified,
    Updated,
    DateModified,
    DatePublished,
    VisibleDate,
}

/// The first freshness marker found on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessSignal {
    pub marker: FreshnessMarker,

    /// The matched text, as it appears in the content
    pub text: String,
}

/// Find the highest-priority freshness marker, if any.
pub fn extract(content: &str) -> Option<FreshnessSignal> {
    let strategies: &[(FreshnessMarker, &str)] = &[
        (
            FreshnessMarker::LastModified,
            r"(?i)last\s+modified[^<\n]{0,40}",
        ),
        (
            FreshnessMarker::Updated,
            r"(?i)(?:last\s+)?updated(?:\s+on)?[:\s][^<\n]{0,40}",
        ),
        (FreshnessMarker::DateModified, r#"(?i)dateModified[^,}<\n]{0,40}"#),
        (
            FreshnessMarker::DatePublished,
            r#"(?i)datePublished[^,}<\n]{0,40}"#,
        ),
        (
            FreshnessMarker::VisibleDate,
            r"\b\d{4}-\d{2}-\d{2}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
        ),
    ];

    for (marker, pattern) in strategies {
        if let Some(m) = Regex::new(pattern).unwrap().find(content) {
            return Some(FreshnessSignal {
                marker: *marker,
                text: m.as_str().trim().to_string(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_modified_beats_updated() {
        let content = "Updated: yesterday. Last modified: 2026-02-01.";
        let signal = extract(content).unwrap();

        assert_eq!(signal.marker, FreshnessMarker::LastModified);
    }

    #[test]
    fn test_updated_phrase() {
        let signal = extract("Last updated on March 3, 2026").unwrap();
        assert_eq!(signal.marker, FreshnessMarker::Updated);
    }

    #[test]
    fn test_date_modified_schema() {
        let content = r#"{"dateModified":"2026-01-10"}"#;
        assert_eq!(extract(content).unwrap().marker, FreshnessMarker::DateModified);
    }

    #[test]
    fn test_visible_date_fallback() {
        let signal = extract("Published January 5, 2026 by staff").unwrap();
        assert_eq!(signal.marker, FreshnessMarker::VisibleDate);
    }

    #[test]
    fn test_iso_date_fallback() {
        assert_eq!(
            extract("snapshot 2025-12-31 here").unwrap().marker,
            FreshnessMarker::VisibleDate
        );
    }

    #[test]
    fn test_no_markers() {
        assert!(extract("timeless content").is_none());
    }
}
