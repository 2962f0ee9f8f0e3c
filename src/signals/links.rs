//! Internal vs outbound link partition.

use serde::{Deserialize, Serialize};

use super::hrefs;

/// Link counts for a page, relative to its own domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkProfile {
    pub internal: usize,
    pub outbound: usize,

    /// Internal link targets, in document order
    pub internal_hrefs: Vec<String>,
}

/// Partition all navigational links into internal and outbound.
///
/// Relative links and absolute links whose host contains `domain` count
/// as internal.
pub fn extract(content: &str, domain: &str) -> LinkProfile {
    let domain = domain
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .to_lowercase();

    let mut profile = LinkProfile::default();

    for href in hrefs(content) {
        let is_absolute = href.contains("://");
        let internal = if is_absolute {
            !domain.is_empty() && href.to_lowercase().contains(&domain)
        } else {
            true
        };

        if internal {
            profile.internal += 1;
            profile.internal_hrefs.push(href);
        } else {
            profile.outbound += 1;
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition() {
        let html = r#"
            <a href="/docs">docs</a>
            <a href="https://example.com/pricing">pricing</a>
            <a href="https://other.org/ref">ref</a>
        "#;
        let profile = extract(html, "example.com");

        assert_eq!(profile.internal, 2);
        assert_eq!(profile.outbound, 1);
        assert_eq!(profile.internal_hrefs, vec!["/docs", "https://example.com/pricing"]);
    }

    #[test]
    fn test_www_prefix_normalized() {
        let html = r#"<a href="https://www.example.com/a">a</a>"#;
        assert_eq!(extract(html, "www.example.com").internal, 1);
    }

    #[test]
    fn test_empty_content() {
        let profile = extract("", "example.com");
        assert_eq!(profile.internal + profile.outbound, 0);
    }
}
