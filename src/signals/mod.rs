//! Signal extraction - pattern detectors over raw page content.
//!
//! Every extractor is a pure function of the input text: no shared state,
//! no I/O, never an error. Absence of a match is an empty collection.
//! Matching is regex/keyword based by design; this is not an NLP system.
//!
//! - [`faq`] - FAQ entries (schema, headings, accordions)
//! - [`tables`] - `<table>` blocks with kind classification
//! - [`howto`] - how-to steps (schema, ordered lists, "step N" phrases)
//! - [`comparisons`] - versus/compared-to phrasing
//! - [`lists`] - ordered/unordered list blocks
//! - [`structured_data`] - JSON-LD block facets
//! - [`headings`] - per-level counts and hierarchy validity
//! - [`links`] - internal vs outbound link partition
//! - [`citations`] - five citation-mention strategies
//! - [`freshness`] - first freshness marker, priority ordered
//! - [`authority`] - links to known authority domains
//! - [`indicators`] - official/verified/academic keyword counts
//! - [`brand`] - brand-mention count and density
//! - [`entities`] - frequency-filtered capitalized sequences

pub mod authority;
pub mod brand;
pub mod citations;
pub mod comparisons;
pub mod entities;
pub mod faq;
pub mod freshness;
pub mod headings;
pub mod howto;
pub mod indicators;
pub mod links;
pub mod lists;
pub mod structured_data;
pub mod tables;

pub use authority::{AuthorityKind, AuthorityLink};
pub use brand::BrandSignal;
pub use citations::{CitationKind, CitationMention};
pub use comparisons::{ComparisonSignal, SignalStrength};
pub use entities::EntityMention;
pub use faq::{FaqEntry, FaqSource};
pub use freshness::{FreshnessMarker, FreshnessSignal};
pub use headings::HeadingProfile;
pub use howto::{HowToSource, HowToStep};
pub use indicators::IndicatorSignals;
pub use links::LinkProfile;
pub use lists::ListBlock;
pub use structured_data::StructuredDataRecord;
pub use tables::{TableKind, TableRecord};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// All extracted signals for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSignals {
    pub faqs: Vec<FaqEntry>,
    pub tables: Vec<TableRecord>,
    pub howto_steps: Vec<HowToStep>,
    pub comparison: Option<ComparisonSignal>,
    pub lists: Vec<ListBlock>,
    pub structured_data: Vec<StructuredDataRecord>,
    pub headings: HeadingProfile,
    pub links: LinkProfile,
    pub citations: Vec<CitationMention>,
    pub freshness: Option<FreshnessSignal>,
    pub authority_links: Vec<AuthorityLink>,
    pub indicators: IndicatorSignals,
    pub brand: BrandSignal,
    pub entities: Vec<EntityMention>,
}

impl PageSignals {
    /// Count of boolean signal facets present, used by the additive scorer.
    pub fn present_count(&self) -> usize {
        [
            !self.faqs.is_empty(),
            !self.tables.is_empty(),
            !self.howto_steps.is_empty(),
            self.comparison.is_some(),
            !self.lists.is_empty(),
            !self.structured_data.is_empty(),
            self.headings.total() > 0,
            self.headings.total() > 0 && self.headings.hierarchy_valid,
            self.links.internal > 0,
            !self.citations.is_empty(),
            self.freshness.is_some(),
            !self.authority_links.is_empty(),
            self.indicators.official > 0,
            self.indicators.verified > 0,
            self.indicators.academic > 0,
            self.brand.mentions > 0,
            !self.entities.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Run every extractor over the content.
pub fn extract_all(content: &str, domain: &str) -> PageSignals {
    PageSignals {
        faqs: faq::extract(content),
        tables: tables::extract(content),
        howto_steps: howto::extract(content),
        comparison: comparisons::extract(content),
        lists: lists::extract(content),
        structured_data: structured_data::extract(content),
        headings: headings::extract(content),
        links: links::extract(content, domain),
        citations: citations::extract(content),
        freshness: freshness::extract(content),
        authority_links: authority::extract(content),
        indicators: indicators::extract(content),
        brand: brand::extract(content, domain),
        entities: entities::extract(content),
    }
}

/// Strip markup and decode common entities, collapsing whitespace.
pub(crate) fn strip_tags(html: &str) -> String {
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    let text = tag_pattern.replace_all(html, " ");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All href attribute values in document order.
pub(crate) fn hrefs(content: &str) -> Vec<String> {
    let href_pattern = Regex::new(r#"href\s*=\s*["']([^"']+)["']"#).unwrap();

    href_pattern
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|href| {
            !href.starts_with('#')
                && !href.starts_with("javascript:")
                && !href.starts_with("mailto:")
                && !href.starts_with("tel:")
        })
        .collect()
}
