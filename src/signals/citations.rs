//! Citation-mention detection.
//!
//! Five independent strategies, each tagged on the resulting mention:
//! numbered references, parenthetical year citations, `<cite>` tags,
//! "source:" references, and "according to" attributions.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_tags;

/// Which strategy matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    Numbered,
    Parenthetical,
    CiteTag,
    SourceRef,
    Attribution,
}

/// One citation-like mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationMention {
    pub text: String,
    pub kind: CitationKind,

    /// Byte offset of the match in the content
    pub position: usize,
}

/// Extract citation mentions from all five strategies.
pub fn extract(content: &str) -> Vec<CitationMention> {
    let mut mentions = Vec::new();

    let numbered = Regex::new(r"\[\d{1,3}\]").unwrap();
    for m in numbered.find_iter(content) {
        mentions.push(CitationMention {
            text: m.as_str().to_string(),
            kind: CitationKind::Numbered,
            position: m.start(),
        });
    }

    // (Author 2021), (Smith et al., 2020)-style
    let parenthetical = Regex::new(r"\([^()]{0,40}(?:19|20)\d{2}\)").unwrap();
    for m in parenthetical.find_iter(content) {
        mentions.push(CitationMention {
            text: m.as_str().to_string(),
            kind: CitationKind::Parenthetical,
            position: m.start(),
        });
    }

    let cite_tag = Regex::new(r"(?is)<cite[^>]*>(.*?)</cite>").unwrap();
    for cap in cite_tag.captures_iter(content) {
        let m = cap.get(0).expect("capture 0 always present");
        mentions.push(CitationMention {
            text: strip_tags(&cap[1]),
            kind: CitationKind::CiteTag,
            position: m.start(),
        });
    }

    let source_ref = Regex::new(r"(?i)\bsource:\s*([^<\n]{1,80})").unwrap();
    for cap in source_ref.captures_iter(content) {
        let m = cap.get(0).expect("capture 0 always present");
        mentions.push(CitationMention {
            text: cap[1].trim().to_string(),
            kind: CitationKind::SourceRef,
            position: m.start(),
        });
    }

    let attribution = Regex::new(r"(?i)\baccording to\s+([^<\n,.]{1,60})").unwrap();
    for cap in attribution.captures_iter(content) {
        let m = cap.get(0).expect("capture 0 always present");
        mentions.push(CitationMention {
            text: cap[1].trim().to_string(),
            kind: CitationKind::Attribution,
            position: m.start(),
        });
    }

    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered() {
        let mentions = extract("as shown in [1] and [23]");
        let numbered: Vec<_> = mentions
            .iter()
            .filter(|m| m.kind == CitationKind::Numbered)
            .collect();

        assert_eq!(numbered.len(), 2);
        assert_eq!(numbered[0].text, "[1]");
        assert_eq!(numbered[0].position, 12);
    }

    #[test]
    fn test_parenthetical_year() {
        let mentions = extract("established earlier (Smith et al., 2020).");

        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].kind, CitationKind::Parenthetical);
    }

    #[test]
    fn test_cite_tag() {
        let mentions = extract("<cite>The Origin of Species</cite>");

        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].kind, CitationKind::CiteTag);
        assert_eq!(mentions[0].text, "The Origin of Species");
    }

    #[test]
    fn test_source_ref_and_attribution() {
        let mentions = extract("Source: WHO report\nAccording to the CDC, rates fell.");

        assert!(mentions.iter().any(|m| m.kind == CitationKind::SourceRef));
        let attribution = mentions
            .iter()
            .find(|m| m.kind == CitationKind::Attribution)
            .unwrap();
        assert_eq!(attribution.text, "the CDC");
    }

    #[test]
    fn test_plain_parentheses_not_matched() {
        assert!(extract("a note (see appendix) here").is_empty());
    }
}
