//! Line-oriented directive file model for `llms.txt` and `robots.txt`.
//!
//! This is deliberately *not* a full robots.txt implementation. Path rules
//! are binary: only `/` (or an empty path) toggles the verdict, so the gate
//! answers "does this site block AI crawlers wholesale", nothing finer.
//! Longest-match path precedence is intentionally out of scope; callers
//! depend on the whole-site semantics.
//!
//! `llms.txt` has no standardized grammar. We assume it mirrors robots.txt
//! syntax, which is a working assumption rather than a published standard.

/// Parsed directive file, kept as ordered sections.
#[derive(Debug, Clone, Default)]
pub struct DirectiveFile {
    sections: Vec<Section>,
}

/// Directives scoped to one `User-agent:` value.
#[derive(Debug, Clone)]
struct Section {
    /// Lowercased user-agent value
    agent: String,

    /// Rules in file order
    rules: Vec<Rule>,
}

#[derive(Debug, Clone)]
enum Rule {
    Disallow(String),
    Allow(String),
    CrawlDelay(f64),
}

impl DirectiveFile {
    /// Parse directive file content.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped.
    /// Directives are matched case-insensitively.
    pub fn parse(content: &str) -> Self {
        let mut file = Self::default();
        let mut current: Option<Section> = None;

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((directive, value)) = line.split_once(':') {
                let directive = directive.trim().to_lowercase();
                let value = value.trim();

                match directive.as_str() {
                    "user-agent" => {
                        if let Some(section) = current.take() {
                            file.sections.push(section);
                        }
                        current = Some(Section {
                            agent: value.to_lowercase(),
                            rules: Vec::new(),
                        });
                    }
                    "disallow" => {
                        if let Some(section) = current.as_mut() {
                            section.rules.push(Rule::Disallow(value.to_string()));
                        }
                    }
                    "allow" => {
                        if let Some(section) = current.as_mut() {
                            section.rules.push(Rule::Allow(value.to_string()));
                        }
                    }
                    "crawl-delay" => {
                        if let Some(section) = current.as_mut() {
                            if let Ok(delay) = value.parse::<f64>() {
                                section.rules.push(Rule::CrawlDelay(delay));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(section) = current {
            file.sections.push(section);
        }

        file
    }

    /// Whether the file contains no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether this file blocks a crawler identified by any of `agent_tokens`.
    ///
    /// A section applies when its user-agent is `*` or contains one of the
    /// tokens. Within an applicable section, rules are evaluated in order:
    /// a `Disallow` of `/` or empty blocks, a later `Allow` of `/` or empty
    /// clears the block, and a crawl delay above `max_crawl_delay` seconds
    /// blocks (treated as an effective denial of automated access).
    ///
    /// Partial-path rules (`Disallow: /private`, `Allow: /blog`) are
    /// ignored: they neither block nor unblock the whole site.
    pub fn blocks(&self, agent_tokens: &[&str], max_crawl_delay: f64) -> bool {
        self.sections
            .iter()
            .filter(|s| section_applies(&s.agent, agent_tokens))
            .any(|s| section_blocks(s, max_crawl_delay))
    }
}

fn section_applies(agent: &str, tokens: &[&str]) -> bool {
    if agent == "*" {
        return true;
    }
    tokens.iter().any(|t| agent.contains(&t.to_lowercase()))
}

fn section_blocks(section: &Section, max_crawl_delay: f64) -> bool {
    let mut blocked = false;

    for rule in &section.rules {
        match rule {
            Rule::Disallow(path) if whole_site(path) => blocked = true,
            Rule::Allow(path) if whole_site(path) => blocked = false,
            Rule::CrawlDelay(delay) if *delay > max_crawl_delay => blocked = true,
            _ => {}
        }
    }

    blocked
}

/// Only `/` or an empty path toggles the whole-site verdict.
fn whole_site(path: &str) -> bool {
    path.is_empty() || path == "/"
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: &[&str] = &["citereadybot", "ai", "bot"];

    #[test]
    fn test_wildcard_disallow_all_blocks() {
        let file = DirectiveFile::parse("User-agent: *\nDisallow: /");
        assert!(file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_partial_allow_does_not_override() {
        // A partial-path allow must not clear a whole-site disallow.
        let file = DirectiveFile::parse("User-agent: *\nDisallow: /\nAllow: /blog");
        assert!(file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_root_allow_overrides_disallow() {
        let file = DirectiveFile::parse("User-agent: *\nDisallow: /\nAllow: /");
        assert!(!file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_empty_disallow_blocks() {
        let file = DirectiveFile::parse("User-agent: *\nDisallow:");
        assert!(file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_partial_disallow_does_not_block() {
        let file = DirectiveFile::parse("User-agent: *\nDisallow: /private/");
        assert!(!file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_section_scoping() {
        // Only sections naming us (or *) apply.
        let content = "User-agent: googlebot-image\nDisallow: /\n\nUser-agent: friendly-crawler\nDisallow: /";
        let file = DirectiveFile::parse(content);
        assert!(!file.blocks(&["citereadybot"], 10.0));

        // Token match is substring-based on the agent value.
        assert!(file.blocks(&["googlebot"], 10.0));
    }

    #[test]
    fn test_ai_token_matches_ai_agents() {
        let file = DirectiveFile::parse("User-agent: GPTBot\nDisallow: /");
        assert!(file.blocks(&["gptbot"], 10.0));

        let file = DirectiveFile::parse("User-agent: some-ai-crawler\nDisallow: /");
        assert!(file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_excessive_crawl_delay_blocks() {
        let file = DirectiveFile::parse("User-agent: *\nCrawl-delay: 30");
        assert!(file.blocks(TOKENS, 10.0));

        let file = DirectiveFile::parse("User-agent: *\nCrawl-delay: 5");
        assert!(!file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let content = "# block everyone\n\nUser-agent: *\n# except not really\nAllow: /";
        let file = DirectiveFile::parse(content);
        assert!(!file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_case_insensitive_directives() {
        let file = DirectiveFile::parse("USER-AGENT: *\nDISALLOW: /");
        assert!(file.blocks(TOKENS, 10.0));
    }

    #[test]
    fn test_empty_file_does_not_block() {
        let file = DirectiveFile::parse("");
        assert!(file.is_empty());
        assert!(!file.blocks(TOKENS, 10.0));
    }
}
