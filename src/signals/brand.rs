//! Brand-mention detection.
//!
//! The brand label comes from a caller-supplied domain, which is untrusted
//! input: it is escaped with `regex::escape` before any pattern is built so
//! hostile labels cannot inject pattern syntax.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Brand presence on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandSignal {
    /// Brand label derived from the domain (e.g. "acme" for acme.io)
    pub label: String,

    /// Case-insensitive mention count
    pub mentions: usize,

    /// Mentions per 1000 characters of content
    pub density: f64,

    pub in_title: bool,
    pub in_h1: bool,
}

/// Derive the brand label and count its mentions.
pub fn extract(content: &str, domain: &str) -> BrandSignal {
    let label = brand_label(domain);
    if label.is_empty() {
        return BrandSignal::default();
    }

    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&label))).unwrap();

    let mentions = pattern.find_iter(content).count();
    let density = if content.is_empty() {
        0.0
    } else {
        mentions as f64 / (content.len() as f64 / 1000.0)
    };

    let title_pattern = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap();
    let in_title = title_pattern
        .captures(content)
        .map(|cap| pattern.is_match(&cap[1]))
        .unwrap_or(false);

    let h1_pattern = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap();
    let in_h1 = h1_pattern
        .captures_iter(content)
        .any(|cap| pattern.is_match(&cap[1]));

    BrandSignal {
        label,
        mentions,
        density,
        in_title,
        in_h1,
    }
}

/// Strip scheme, `www.` and the TLD: "www.acme-corp.co.uk" → "acme-corp".
fn brand_label(domain: &str) -> String {
    domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("")
        .to_lowercase()
}
