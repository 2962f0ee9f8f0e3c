//! The weighted ranking-category table.
//!
//! Thirty categories in six thematic groups. Weights run 4-10: direct
//! answer phrasing and domain authority weigh highest, community and
//! social chatter lowest. Trigger phrases are matched as case-insensitive
//! substrings by the weighted scorer.

use serde::{Deserialize, Serialize};

/// Thematic bucket a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    ContentQuality,
    Authority,
    Freshness,
    Structure,
    UserIntent,
    SocialProof,
}

/// One weighted ranking category.
#[derive(Debug, Clone, Copy)]
pub struct RankingCategory {
    /// Stable identifier, referenced by the recommendation engine
    pub id: &'static str,

    /// Human-readable label
    pub label: &'static str,

    pub group: CategoryGroup,

    /// Relative importance, 4..=10
    pub weight: u32,

    /// Trigger phrases, matched lowercased
    pub phrases: &'static [&'static str],
}

/// The full category table, in evaluation (and recommendation) order.
pub fn ranking_categories() -> &'static [RankingCategory] {
    CATEGORIES
}

/// Maximum possible weighted score: Σ weight × phrase count.
pub fn max_possible_score() -> u32 {
    CATEGORIES
        .iter()
        .map(|c| c.weight * c.phrases.len() as u32)
        .sum()
}

use CategoryGroup::*;

static CATEGORIES: &[RankingCategory] = &[
    // Content quality
    RankingCategory {
        id: "direct_answers",
        label: "Direct answer phrasing",
        group: ContentQuality,
        weight: 10,
        phrases: &["what is", "how does", "the answer is", "in short", "simply put", "to summarize"],
    },
    RankingCategory {
        id: "comprehensive_coverage",
        label: "Comprehensive coverage",
        group: ContentQuality,
        weight: 8,
        phrases: &["complete guide", "comprehensive", "everything you need", "in-depth", "detailed guide"],
    },
    RankingCategory {
        id: "definitions",
        label: "Definitions",
        group: ContentQuality,
        weight: 7,
        phrases: &["is defined as", "refers to", "means that", "definition of"],
    },
    RankingCategory {
        id: "data_visualization",
        label: "Data visualization",
        group: ContentQuality,
        weight: 7,
        phrases: &["chart", "graph", "infographic", "visualization", "diagram"],
    },
    RankingCategory {
        id: "statistics",
        label: "Statistics and data points",
        group: ContentQuality,
        weight: 8,
        phrases: &["according to data", "survey", "respondents", "percent", "study found", "statistics"],
    },
    RankingCategory {
        id: "examples",
        label: "Concrete examples",
        group: ContentQuality,
        weight: 6,
        phrases: &["for example", "for instance", "such as", "case study"],
    },
    RankingCategory {
        id: "summaries",
        label: "Summaries and takeaways",
        group: ContentQuality,
        weight: 6,
        phrases: &["key takeaways", "tl;dr", "in summary", "conclusion"],
    },
    // Authority
    RankingCategory {
        id: "domain_authority",
        label: "Domain authority signals",
        group: Authority,
        weight: 10,
        phrases: &["peer-reviewed", "official documentation", "industry standard", "white paper", "research paper"],
    },
    RankingCategory {
        id: "expert_author",
        label: "Expert authorship",
        group: Authority,
        weight: 9,
        phrases: &["written by", "reviewed by", "phd", "years of experience", "expert"],
    },
    RankingCategory {
        id: "citations_present",
        label: "Citations and references",
        group: Authority,
        weight: 9,
        phrases: &["according to", "references", "bibliography", "source:", "cited"],
    },
    RankingCategory {
        id: "original_research",
        label: "Original research",
        group: Authority,
        weight: 8,
        phrases: &["our study", "we surveyed", "our analysis", "original research", "we tested"],
    },
    RankingCategory {
        id: "credentials",
        label: "Credentials",
        group: Authority,
        weight: 7,
        phrases: &["award-winning", "accredited", "licensed", "board-certified"],
    },
    // Freshness
    RankingCategory {
        id: "recent_updates",
        label: "Recent updates",
        group: Freshness,
        weight: 8,
        phrases: &["last updated", "recently updated", "updated on", "as of 20"],
    },
    RankingCategory {
        id: "current_year",
        label: "Current-year references",
        group: Freshness,
        weight: 7,
        phrases: &["2024", "2025", "2026"],
    },
    RankingCategory {
        id: "trending",
        label: "Trending topics",
        group: Freshness,
        weight: 5,
        phrases: &["latest", "new release", "recently announced", "breaking"],
    },
    RankingCategory {
        id: "maintenance",
        label: "Maintained content",
        group: Freshness,
        weight: 5,
        phrases: &["changelog", "release notes", "version history"],
    },
    // Structure
    RankingCategory {
        id: "faq_structure",
        label: "FAQ structure",
        group: Structure,
        weight: 9,
        phrases: &["frequently asked questions", "faq", "common questions", "people also ask"],
    },
    RankingCategory {
        id: "howto_content",
        label: "How-to content",
        group: Structure,
        weight: 10,
        phrases: &["how to", "step by step", "step 1", "tutorial", "instructions"],
    },
    RankingCategory {
        id: "comparison_content",
        label: "Comparison content",
        group: Structure,
        weight: 8,
        phrases: &["versus", "vs", "compared to", "pros and cons", "alternatives"],
    },
    RankingCategory {
        id: "list_content",
        label: "List content",
        group: Structure,
        weight: 7,
        phrases: &["top 10", "best of", "checklist", "numbered list"],
    },
    RankingCategory {
        id: "table_content",
        label: "Table content",
        group: Structure,
        weight: 7,
        phrases: &["table", "pricing table", "comparison table"],
    },
    RankingCategory {
        id: "headings_structure",
        label: "Heading structure",
        group: Structure,
        weight: 6,
        phrases: &["table of contents", "overview", "introduction", "getting started"],
    },
    // User intent
    RankingCategory {
        id: "question_phrasing",
        label: "Question phrasing",
        group: UserIntent,
        weight: 9,
        phrases: &["why does", "when should", "which is", "should i", "what are"],
    },
    RankingCategory {
        id: "problem_solving",
        label: "Problem solving",
        group: UserIntent,
        weight: 8,
        phrases: &["how to fix", "troubleshoot", "solution", "resolve", "workaround"],
    },
    RankingCategory {
        id: "buying_intent",
        label: "Buying intent",
        group: UserIntent,
        weight: 7,
        phrases: &["best price", "discount", "where to buy", "deal"],
    },
    RankingCategory {
        id: "local_intent",
        label: "Local intent",
        group: UserIntent,
        weight: 5,
        phrases: &["near me", "location", "directions", "opening hours"],
    },
    // Social proof
    RankingCategory {
        id: "testimonials",
        label: "Testimonials",
        group: SocialProof,
        weight: 6,
        phrases: &["testimonial", "customer review", "success story", "5 stars"],
    },
    RankingCategory {
        id: "ratings",
        label: "Ratings",
        group: SocialProof,
        weight: 6,
        phrases: &["rated", "out of 5", "review score"],
    },
    RankingCategory {
        id: "social_mentions",
        label: "Social mentions",
        group: SocialProof,
        weight: 4,
        phrases: &["share", "tweet", "follow us", "subscribe"],
    },
    RankingCategory {
        id: "community_engagement",
        label: "Community engagement",
        group: SocialProof,
        weight: 4,
        phrases: &["comments", "discussion", "forum", "join the community"],
    },
];
