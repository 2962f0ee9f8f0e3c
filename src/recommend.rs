//! Recommendation derivation from category scores.
//!
//! A fixed mapping from absent categories to tiered, fixed-text
//! recommendations. Rules are evaluated independently (a page can trip all
//! of them) and emitted in category-table order.

use serde::{Deserialize, Serialize};

use crate::scoring::CategoryScore;

/// Recommendation priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Critical,
    Important,
    NiceToHave,
}

/// Tiered recommendation texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub critical: Vec<String>,
    pub important: Vec<String>,
    pub nice_to_have: Vec<String>,
}

impl RecommendationSet {
    /// Total recommendations across tiers.
    pub fn len(&self) -> usize {
        self.critical.len() + self.important.len() + self.nice_to_have.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rules in category-table order.
const RULES: &[(&str, RecommendationTier, &str)] = &[
    (
        "direct_answers",
        RecommendationTier::Critical,
        "Add direct question-and-answer phrasing (a question followed by a concise answer) so answer engines can lift a quotable response.",
    ),
    (
        "data_visualization",
        RecommendationTier::Important,
        "Mention or embed charts, graphs, or other data visualizations to support claims.",
    ),
    (
        "domain_authority",
        RecommendationTier::Critical,
        "Add domain-authority signals such as references to official documentation, white papers, or peer-reviewed sources.",
    ),
    (
        "faq_structure",
        RecommendationTier::Important,
        "Add an FAQ section; question-led structure maps directly onto answer-engine queries.",
    ),
    (
        "howto_content",
        RecommendationTier::Critical,
        "Add step-by-step how-to content; procedural answers are among the most-cited formats.",
    ),
    (
        "comparison_content",
        RecommendationTier::Important,
        "Add comparison content (X vs Y, pros and cons) to capture comparative queries.",
    ),
    (
        "testimonials",
        RecommendationTier::NiceToHave,
        "Add testimonials or customer success stories.",
    ),
    (
        "social_mentions",
        RecommendationTier::NiceToHave,
        "Add social sharing or follow prompts to broaden mention signals.",
    ),
];

/// Map absent categories to tiered recommendations.
///
/// A category missing from `category_scores` entirely counts as absent.
pub fn recommend(category_scores: &[CategoryScore]) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    for (category_id, tier, text) in RULES {
        let absent = category_scores
            .iter()
            .find(|c| c.category == *category_id)
            .map(|c| c.is_absent())
            .unwrap_or(true);

        if absent {
            let bucket = match tier {
                RecommendationTier::Critical => &mut set.critical,
                RecommendationTier::Important => &mut set.important,
                RecommendationTier::NiceToHave => &mut set.nice_to_have,
            };
            bucket.push((*text).to_string());
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WeightedCategoryScorer;

    #[test]
    fn test_all_rules_fire_on_empty_content() {
        let breakdown = WeightedCategoryScorer.score("");
        let set = recommend(&breakdown.categories);

        assert_eq!(set.critical.len(), 3);
        assert_eq!(set.important.len(), 3);
        assert_eq!(set.nice_to_have.len(), 2);
    }

    #[test]
    fn test_missing_howto_and_authority_are_critical() {
        // Page with FAQs and comparisons, but no how-to and no authority.
        let content = "frequently asked questions. X versus Y, pros and cons. \
                       chart of results. testimonial: great. share this. \
                       what is it? simply put, good.";
        let breakdown = WeightedCategoryScorer.score(content);
        let set = recommend(&breakdown.categories);

        assert!(set
            .critical
            .iter()
            .any(|r| r.contains("step-by-step how-to")));
        assert!(set.critical.iter().any(|r| r.contains("domain-authority")));

        // Never demoted into lower tiers.
        assert!(!set.important.iter().any(|r| r.contains("how-to")));
        assert!(!set.nice_to_have.iter().any(|r| r.contains("how-to")));

        // Satisfied categories produce nothing.
        assert!(!set.important.iter().any(|r| r.contains("FAQ")));
        assert!(!set.important.iter().any(|r| r.contains("comparison")));
    }

    #[test]
    fn test_satisfied_page_gets_no_recommendations() {
        let content = "what is this? how to use it. peer-reviewed chart. faq. \
                       versus alternatives. testimonial. share.";
        let breakdown = WeightedCategoryScorer.score(content);
        let set = recommend(&breakdown.categories);

        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_input_counts_as_absent() {
        let set = recommend(&[]);
        assert_eq!(set.len(), RULES.len());
    }
}
