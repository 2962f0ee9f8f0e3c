//! The weighted-category scorer (canonical model).

use std::collections::BTreeSet;

use super::categories::{max_possible_score, ranking_categories};
use super::{CategoryScore, ScoreBreakdown};

/// Scores content against the ranking-category table.
///
/// Per category: matched = trigger phrases present as case-insensitive
/// substrings, score = matched × weight. Readiness is the weighted total
/// normalized against the table's maximum and clamped to 100. Empty
/// content scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedCategoryScorer;

impl WeightedCategoryScorer {
    pub fn score(&self, content: &str) -> ScoreBreakdown {
        let lower = content.to_lowercase();

        let categories: Vec<CategoryScore> = ranking_categories()
            .iter()
            .map(|category| {
                let matched_terms: BTreeSet<String> = category
                    .phrases
                    .iter()
                    .filter(|phrase| lower.contains(*phrase))
                    .map(|phrase| (*phrase).to_string())
                    .collect();

                CategoryScore {
                    score: matched_terms.len() as u32 * category.weight,
                    category: category.id.to_string(),
                    label: category.label.to_string(),
                    group: category.group,
                    weight: category.weight,
                    matched_terms,
                }
            })
            .collect();

        let total: u32 = categories.iter().map(|c| c.score).sum();
        let readiness = normalize(total, max_possible_score());

        ScoreBreakdown {
            readiness,
            categories,
        }
    }
}

/// `round(min(100, total / max * 100))`
fn normalize(total: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let ratio = total as f64 / max as f64 * 100.0;
    ratio.min(100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_scores_zero() {
        let breakdown = WeightedCategoryScorer.score("");
        assert_eq!(breakdown.readiness, 0);
        assert!(breakdown.categories.iter().all(|c| c.score == 0));
    }

    #[test]
    fn test_matches_accumulate() {
        let content = "What is a widget? The answer is simple. How to install: step 1, \
                       follow the tutorial. Frequently asked questions below.";
        let breakdown = WeightedCategoryScorer.score(content);

        assert!(breakdown.readiness > 0);

        let direct = breakdown
            .categories
            .iter()
            .find(|c| c.category == "direct_answers")
            .unwrap();
        assert!(direct.matched_terms.contains("what is"));
        assert!(direct.matched_terms.contains("the answer is"));
        assert_eq!(direct.score, direct.matched_terms.len() as u32 * 10);

        let howto = breakdown
            .categories
            .iter()
            .find(|c| c.category == "howto_content")
            .unwrap();
        assert!(howto.matched_terms.contains("how to"));
        assert!(howto.matched_terms.contains("step 1"));
        assert!(howto.matched_terms.contains("tutorial"));
    }

    #[test]
    fn test_phrase_counted_once_per_category() {
        // Repetition does not inflate a category's match set.
        let once = WeightedCategoryScorer.score("what is this");
        let many = WeightedCategoryScorer.score("what is what is what is what is");

        let score_of = |b: &ScoreBreakdown| {
            b.categories
                .iter()
                .find(|c| c.category == "direct_answers")
                .unwrap()
                .score
        };
        assert_eq!(score_of(&once), score_of(&many));
    }

    #[test]
    fn test_case_insensitive() {
        let breakdown = WeightedCategoryScorer.score("WHAT IS THIS");
        assert!(breakdown.readiness > 0);
    }

    #[test]
    fn test_readiness_bounded() {
        // All phrases present: readiness caps at 100.
        let everything: String = ranking_categories()
            .iter()
            .flat_map(|c| c.phrases.iter())
            .map(|p| format!("{p} "))
            .collect();
        let breakdown = WeightedCategoryScorer.score(&everything);

        assert_eq!(breakdown.readiness, 100);
    }
}
