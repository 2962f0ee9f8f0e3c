//! Citation candidate synthesis.
//!
//! Converts populated signal collections into normalized candidate records
//! for display. Candidates are template-driven: confidences are fixed
//! constants per template, not computed from data quality, and the records
//! are independent of any real external citations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::signals::{AuthorityKind, PageSignals, TableKind};

/// A synthesized citation-like record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationCandidate {
    /// What on the page this candidate was synthesized from
    pub source_ref: String,

    pub domain: String,
    pub title: String,
    pub snippet: String,

    /// Credibility facts backing the candidate, as label → detail
    pub credibility_signals: BTreeMap<String, String>,

    /// Fixed per-template constant in [0, 1]
    pub confidence: f32,

    /// Coarse grouping label for display variety
    pub diversity_bucket: String,
}

const FAQ_CONFIDENCE: f32 = 0.90;
const TABLE_CONFIDENCE: f32 = 0.85;
const HOWTO_CONFIDENCE: f32 = 0.88;
const STRUCTURED_DATA_CONFIDENCE: f32 = 0.82;
const AUTHORITY_CONFIDENCE: f32 = 0.95;
const HEADINGS_CONFIDENCE: f32 = 0.84;

/// Synthesize candidates from every populated signal collection.
pub fn synthesize(signals: &PageSignals, domain: &str, title: &str) -> Vec<CitationCandidate> {
    let mut candidates = Vec::new();

    if !signals.faqs.is_empty() {
        let first = &signals.faqs[0];
        candidates.push(CitationCandidate {
            source_ref: "faq".to_string(),
            domain: domain.to_string(),
            title: format!("{title} — FAQ"),
            snippet: format!("{} {}", first.question, first.answer),
            credibility_signals: signals_map([(
                "faq_entries",
                signals.faqs.len().to_string(),
            )]),
            confidence: FAQ_CONFIDENCE,
            diversity_bucket: "official".to_string(),
        });
    }

    for (i, table) in signals.tables.iter().enumerate() {
        candidates.push(CitationCandidate {
            source_ref: format!("table:{i}"),
            domain: domain.to_string(),
            title: format!("{title} — {}", table_label(table.kind)),
            snippet: table
                .rows
                .first()
                .map(|row| row.join(" | "))
                .unwrap_or_default(),
            credibility_signals: signals_map([
                ("rows", table.row_count.to_string()),
                ("columns", table.column_count.to_string()),
            ]),
            confidence: TABLE_CONFIDENCE,
            diversity_bucket: "reference".to_string(),
        });
    }

    if !signals.howto_steps.is_empty() {
        candidates.push(CitationCandidate {
            source_ref: "howto".to_string(),
            domain: domain.to_string(),
            title: format!("{title} — step-by-step guide"),
            snippet: signals.howto_steps[0].text.clone(),
            credibility_signals: signals_map([(
                "steps",
                signals.howto_steps.len().to_string(),
            )]),
            confidence: HOWTO_CONFIDENCE,
            diversity_bucket: "educational".to_string(),
        });
    }

    if !signals.structured_data.is_empty() {
        let types: Vec<&str> = signals
            .structured_data
            .iter()
            .map(|r| r.type_name.as_str())
            .collect();
        candidates.push(CitationCandidate {
            source_ref: "structured_data".to_string(),
            domain: domain.to_string(),
            title: format!("{title} — structured data"),
            snippet: types.join(", "),
            credibility_signals: signals_map([(
                "schema_types",
                signals.structured_data.len().to_string(),
            )]),
            confidence: STRUCTURED_DATA_CONFIDENCE,
            diversity_bucket: "technical".to_string(),
        });
    }

    for link in &signals.authority_links {
        candidates.push(CitationCandidate {
            source_ref: format!("authority:{}", link.domain),
            domain: link.domain.clone(),
            title: format!("Referenced source — {}", link.domain),
            snippet: link.url.clone(),
            credibility_signals: signals_map([(
                "authority_kind",
                format!("{:?}", link.kind),
            )]),
            confidence: AUTHORITY_CONFIDENCE,
            diversity_bucket: authority_bucket(link.kind).to_string(),
        });
    }

    if signals.headings.total() > 0 && signals.headings.hierarchy_valid {
        candidates.push(CitationCandidate {
            source_ref: "headings".to_string(),
            domain: domain.to_string(),
            title: format!("{title} — document outline"),
            snippet: format!("{} headings, valid hierarchy", signals.headings.total()),
            credibility_signals: signals_map([(
                "heading_count",
                signals.headings.total().to_string(),
            )]),
            confidence: HEADINGS_CONFIDENCE,
            diversity_bucket: "structural".to_string(),
        });
    }

    candidates
}

fn table_label(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Pricing => "pricing table",
        TableKind::Comparison => "comparison table",
        TableKind::Features => "feature table",
        TableKind::Data => "data table",
        TableKind::General => "table",
    }
}

fn authority_bucket(kind: AuthorityKind) -> &'static str {
    match kind {
        AuthorityKind::Academic => "research",
        AuthorityKind::Government => "official",
        AuthorityKind::News => "news",
        AuthorityKind::Encyclopedia => "reference",
        AuthorityKind::CodeRepository | AuthorityKind::GeneralAuthority => "authority",
    }
}

fn signals_map<const N: usize>(entries: [(&str, String); N]) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
