use crate::defs::DEFAULT_CATEGORY;
use crate::defs::NewsItem;

// Whole words only: "lawn" is not "law" and "fundamentals" is not "fund".
const POLICY: &[&str] = &[
    "lawsuit", "lawsuits", "court", "courts", "copyright", "copyrights", "legal", "judge",
    "judges", "regulation", "regulations", "regulator", "regulators", "regulatory", "safety",
    "ethics", "ethical", "policy", "policies", "law", "laws",
];
const RESEARCH: &[&str] = &[
    "paper", "papers", "research", "researchers", "model", "models", "benchmark", "benchmarks",
    "arxiv", "study", "studies",
];
const TOOLS: &[&str] = &[
    "launch", "launches", "launched", "release", "releases", "released", "tool", "tools", "api",
    "apis", "feature", "features", "update", "updates",
];
const BUSINESS: &[&str] = &[
    "raise", "raises", "raised", "fund", "funds", "funding", "valuation", "billion", "million",
    "acquisition", "acquisitions", "acquire", "acquires", "acquired", "investment", "investments",
    "invest", "invests",
];
const TUTORIALS: &[&str] = &[
    "guide", "guides", "tutorial", "tutorials", "why", "opinion", "analysis", "insight", "insights",
];
const BREAKING: &[&str] = &["announce", "announces", "announced", "unveil", "unveils", "unveiled"];

fn has_word(words: &[&str], keywords: &[&str]) -> bool {
    words.iter().any(|word| keywords.contains(word))
}

/// Keyword categorization used when no language model is available.
///
/// Rules are checked in order and the first match wins, so a paper that
/// mentions a release still lands in research.
pub fn categorize(item: &NewsItem) -> &'static str {
    if item.is_paper() {
        return "Research & Models";
    }

    let title = item.title.to_lowercase();
    let words: Vec<&str> = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    if has_word(&words, POLICY) {
        "Policy & Ethics"
    } else if has_word(&words, RESEARCH) {
        "Research & Models"
    } else if has_word(&words, TOOLS) {
        "Tools & Applications"
    } else if title.contains('$') || has_word(&words, BUSINESS) {
        "Industry & Business"
    } else if title.contains("how to") || has_word(&words, TUTORIALS) {
        "Tutorials & Insights"
    } else if has_word(&words, BREAKING) {
        "Breaking News"
    } else {
        DEFAULT_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(title: &str, source: &str) -> NewsItem {
        NewsItem {
            id: String::new(),
            title: title.to_owned(),
            link: "https://example.com".to_owned(),
            published: Utc::now(),
            source: source.to_owned(),
            category: String::new(),
        }
    }

    fn assert_all(titles: &[&str], expected: &str) {
        for title in titles {
            assert_eq!(categorize(&item(title, "Wire")), expected, "{title}");
        }
    }

    #[test]
    fn papers_source_is_research() {
        assert_eq!(categorize(&item("Some headline", "Hugging Face Papers")), "Research & Models");
    }

    #[test]
    fn keyword_groups() {
        assert_all(
            &[
                "New AI lawsuit filed against company",
                "AI copyright issues in court",
                "AI safety concerns raised",
                "New AI regulation proposed",
            ],
            "Policy & Ethics",
        );
        assert_all(
            &[
                "New paper on transformers",
                "Research shows AI improvement",
                "New model beats benchmark",
                "Arxiv paper released",
            ],
            "Research & Models",
        );
        assert_all(
            &[
                "Company launches new AI tool",
                "New API release from OpenAI",
                "Feature update for ChatGPT",
            ],
            "Tools & Applications",
        );
        assert_all(
            &[
                "AI startup raises $50M",
                "Company funding round announced",
                "$100 billion valuation",
            ],
            "Industry & Business",
        );
        assert_all(
            &[
                "How to use ChatGPT effectively",
                "Complete guide to LLMs",
                "Tutorial on fine-tuning",
                "Why AI matters for developers",
            ],
            "Tutorials & Insights",
        );
        assert_all(&["OpenAI announces GPT-5", "Google unveils new Gemini"], "Breaking News");
    }

    #[test]
    fn keywords_match_whole_words_only() {
        assert_eq!(categorize(&item("Fundamentals: a guide to embeddings", "Blog")), "Tutorials & Insights");
        assert_eq!(categorize(&item("Lawn robots map gardens", "Blog")), DEFAULT_CATEGORY);
        assert_eq!(categorize(&item("Apiary drones count bees", "Blog")), DEFAULT_CATEGORY);
        assert_eq!(categorize(&item("Modeling the weather", "Blog")), DEFAULT_CATEGORY);
        assert_eq!(categorize(&item("Lab acquires chip startup", "Blog")), "Industry & Business");
    }

    #[test]
    fn unmatched_falls_back_to_default() {
        assert_eq!(categorize(&item("Some random AI headline", "Unknown")), DEFAULT_CATEGORY);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(categorize(&item("NEW LAWSUIT FILED", "News")), "Policy & Ethics");
        assert_eq!(categorize(&item("COMPANY RAISES FUNDING", "News")), "Industry & Business");
    }
}
