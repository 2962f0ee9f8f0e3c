//! The boolean-heuristic scorer (legacy additive model).

use crate::signals::PageSignals;

use super::ScoreBreakdown;

/// Additive model kept for callers that depend on its semantics: a fixed
/// base of 50 plus 3 per boolean signal present, clamped to 100. Produces
/// no category rows. Empty content scores the base 50.
///
/// Not interchangeable with [`super::WeightedCategoryScorer`]; select one
/// explicitly via [`super::ScoringMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanHeuristicScorer;

const BASE_SCORE: usize = 50;
const POINTS_PER_SIGNAL: usize = 3;

impl BooleanHeuristicScorer {
    pub fn score(&self, signals: &PageSignals) -> ScoreBreakdown {
        let raw = BASE_SCORE + POINTS_PER_SIGNAL * signals.present_count();

        ScoreBreakdown {
            readiness: raw.min(100) as u8,
            categories: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::extract_all;

    #[test]
    fn test_empty_content_scores_base() {
        let signals = extract_all("", "example.com");
        let breakdown = BooleanHeuristicScorer.score(&signals);

        assert_eq!(breakdown.readiness, 50);
        assert!(breakdown.categories.is_empty());
    }

    #[test]
    fn test_three_points_per_signal() {
        let signals = extract_all("<table><tr><td>Price</td></tr></table>", "example.com");
        let breakdown = BooleanHeuristicScorer.score(&signals);

        assert_eq!(
            breakdown.readiness as usize,
            50 + 3 * signals.present_count()
        );
    }

    #[test]
    fn test_clamped_to_100() {
        // More than 17 present facets is impossible, but the clamp holds
        // regardless of how many fire.
        let content = r#"
            <title>Acme</title><h1>Acme guide</h1><h2>FAQ</h2>
            <h3>What is it?</h3><p>A thing.</p>
            <script type="application/ld+json">{"@type":"Organization"}</script>
            <table><tr><td>Price</td></tr></table>
            <ol><li>one</li></ol>
            <a href="/in">in</a><a href="https://en.wikipedia.org/wiki/X">out</a>
            <p>Acme versus others [1], according to experts. Official verified study.
            Last updated 2026-01-01. Step 1: begin. Acme Corp Acme Corp Acme Corp.</p>
        "#;
        let signals = extract_all(content, "acme.com");
        let breakdown = BooleanHeuristicScorer.score(&signals);

        assert!(breakdown.readiness <= 100);
        assert!(breakdown.readiness > 50);
    }
}
