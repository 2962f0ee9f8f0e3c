//! Authority link detection.
//!
//! Outbound links are matched against a fixed table of known authority
//! domains and TLD classes.

use serde::{Deserialize, Serialize};

use super::hrefs;

/// What class of authority a linked domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityKind {
    Academic,
    Government,
    Encyclopedia,
    CodeRepository,
    News,
    GeneralAuthority,
}

/// One link to a recognized authority domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityLink {
    pub domain: String,
    pub url: String,
    pub kind: AuthorityKind,
}

/// Named domains and the kind they map to.
const DOMAIN_TABLE: &[(&str, AuthorityKind)] = &[
    ("wikipedia.org", AuthorityKind::Encyclopedia),
    ("britannica.com", AuthorityKind::Encyclopedia),
    ("arxiv.org", AuthorityKind::Academic),
    ("nature.com", AuthorityKind::Academic),
    ("sciencedirect.com", AuthorityKind::Academic),
    ("pubmed.ncbi.nlm.nih.gov", AuthorityKind::Academic),
    ("scholar.google.com", AuthorityKind::Academic),
    ("jstor.org", AuthorityKind::Academic),
    ("github.com", AuthorityKind::CodeRepository),
    ("gitlab.com", AuthorityKind::CodeRepository),
    ("reuters.com", AuthorityKind::News),
    ("apnews.com", AuthorityKind::News),
    ("bbc.com", AuthorityKind::News),
    ("bbc.co.uk", AuthorityKind::News),
    ("nytimes.com", AuthorityKind::News),
    ("bloomberg.com", AuthorityKind::News),
    ("w3.org", AuthorityKind::GeneralAuthority),
    ("ietf.org", AuthorityKind::GeneralAuthority),
    ("iso.org", AuthorityKind::GeneralAuthority),
    ("who.int", AuthorityKind::GeneralAuthority),
    ("un.org", AuthorityKind::GeneralAuthority),
];

/// Extract links whose host is a recognized authority domain.
pub fn extract(content: &str) -> Vec<AuthorityLink> {
    hrefs(content)
        .into_iter()
        .filter_map(|href| {
            let host = host_of(&href)?;
            let kind = classify(&host)?;
            Some(AuthorityLink {
                domain: host,
                url: href,
                kind,
            })
        })
        .collect()
}

fn host_of(href: &str) -> Option<String> {
    if !href.contains("://") {
        return None;
    }
    url::Url::parse(href)
        .ok()?
        .host_str()
        .map(|h| h.trim_start_matches("www.").to_lowercase())
}

fn classify(host: &str) -> Option<AuthorityKind> {
    for (domain, kind) in DOMAIN_TABLE {
        if host == *domain || host.ends_with(&format!(".{domain}")) {
            return Some(*kind);
        }
    }

    if host.ends_with(".edu") {
        return Some(AuthorityKind::Academic);
    }
    if host.ends_with(".gov") {
        return Some(AuthorityKind::Government);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_domains() {
        let html = r#"
            <a href="https://en.wikipedia.org/wiki/Rust">wiki</a>
            <a href="https://github.com/rust-lang/rust">repo</a>
            <a href="https://www.reuters.com/article">news</a>
        "#;
        let links = extract(html);

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].kind, AuthorityKind::Encyclopedia);
        assert_eq!(links[0].domain, "en.wikipedia.org");
        assert_eq!(links[1].kind, AuthorityKind::CodeRepository);
        assert_eq!(links[2].kind, AuthorityKind::News);
    }

    #[test]
    fn test_tld_classes() {
        let html = r#"
            <a href="https://cs.stanford.edu/paper">edu</a>
            <a href="https://www.cdc.gov/data">gov</a>
        "#;
        let links = extract(html);

        assert_eq!(links[0].kind, AuthorityKind::Academic);
        assert_eq!(links[1].kind, AuthorityKind::Government);
    }

    #[test]
    fn test_unrecognized_and_relative_ignored() {
        let html = r#"
            <a href="https://random-blog.net/post">blog</a>
            <a href="/local">local</a>
        "#;
        assert!(extract(html).is_empty());
    }
}
