use crate::llm_adapter::{CompletionRequest, LlmAdapter};
use crate::rss_utils::text::preview;
use crate::types::{NewsItem, Result, DEFAULT_CATEGORY};
use interfaces::baseline;
use interfaces::defs::canonical_category;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

const CATEGORIZE_PROMPT: &str = "\
Categorize these AI news items.

STEP 1: FIND DUPLICATES
Two items are the SAME story when they describe the same event, even if worded differently:
- \"Company X wins case\" = \"Judge rules for Company X\" = \"Court favors Company X\"
- \"Product Y launched\" = \"Company releases Product Y\" = \"New Product Y available\"

STEP 2: CATEGORIZE with these rules:
- Policy & Ethics = lawsuits, court, copyright, legal, judge
- Research & Models = papers, research (ALL \"Hugging Face Papers\" items)
- Tools & Applications = launches, releases, new tools, APIs
- Industry & Business = funding, valuation, $, acquisitions, company news
- Tutorials & Insights = opinions, how-to, analysis, \"should\", \"killing\"
- Breaking News = ONLY major AI models released TODAY

Items:
";

const CATEGORIZE_INSTRUCTIONS: &str = "

OUTPUT: One line per item, in order. Write ONLY the category name, or SKIP for a duplicate of an earlier item.
NO NUMBERS. NO PUNCTUATION. Just the category or SKIP.

Example output:
Industry & Business
SKIP
Research & Models
Policy & Ethics";

/// What the model said about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Category(&'static str),
    Skip,
}

/// Turns collected items into categorized (and optionally shortened) items.
pub struct Summarizer {
    adapter: Option<Arc<dyn LlmAdapter>>,
    shorten_titles: bool,
}

impl Summarizer {
    pub fn new(adapter: Arc<dyn LlmAdapter>) -> Self {
        Self {
            adapter: Some(adapter),
            shorten_titles: true,
        }
    }

    /// Summarizer that never calls a model and categorizes by keywords.
    pub fn offline() -> Self {
        Self {
            adapter: None,
            shorten_titles: false,
        }
    }

    pub fn with_shortening(mut self, shorten_titles: bool) -> Self {
        self.shorten_titles = shorten_titles;
        self
    }

    /// Categorize the items and drop duplicate stories. A failed
    /// categorization request is returned as an error so the run aborts.
    pub async fn summarize(&self, items: Vec<NewsItem>) -> Result<Vec<NewsItem>> {
        if items.is_empty() {
            info!("No items to summarize");
            return Ok(items);
        }

        let Some(adapter) = &self.adapter else {
            info!("No language model configured, using keyword categorization");
            return Ok(items.into_iter().map(categorize_offline).collect());
        };

        let items = self.categorize(adapter.as_ref(), items).await?;
        log_distribution(&items);

        if self.shorten_titles {
            Ok(self.shorten(adapter.as_ref(), items).await)
        } else {
            Ok(items)
        }
    }

    async fn categorize(&self, adapter: &dyn LlmAdapter, items: Vec<NewsItem>) -> Result<Vec<NewsItem>> {
        info!("Categorizing {} items with {}", items.len(), adapter.adapter_name());

        let request = CompletionRequest::new(categorize_prompt(&items)).with_temperature(0.2);
        let response = adapter.complete(&request).await?;
        debug!("Categorization response: {}", preview(&response, 200));

        let verdicts = parse_verdicts(&response);
        let total = items.len();
        let mut kept = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            match verdicts.get(index) {
                Some(Verdict::Skip) => debug!("Skipping duplicate story: {}", item.title),
                Some(Verdict::Category(category)) => kept.push(item.with_category(*category)),
                None => kept.push(item),
            }
        }

        info!("After categorization: {} items (skipped {})", kept.len(), total - kept.len());
        Ok(kept)
    }

    /// Rewrite each title in ten words or fewer. A failed rewrite keeps
    /// the original title.
    async fn shorten(&self, adapter: &dyn LlmAdapter, items: Vec<NewsItem>) -> Vec<NewsItem> {
        let total = items.len();
        let mut shortened = 0;
        let mut result = Vec::with_capacity(total);

        for item in items {
            let request = CompletionRequest::new(format!(
                "Rewrite this headline in 10 words or fewer, keeping the core idea:\n{}",
                item.title
            ))
            .with_temperature(0.3)
            .with_max_tokens(32);

            match adapter.complete(&request).await {
                Ok(title) if !title.trim().is_empty() => {
                    shortened += 1;
                    let title = title.trim().to_string();
                    result.push(item.with_title(title));
                }
                Ok(_) => result.push(item),
                Err(e) => {
                    warn!("Could not shorten \"{}\": {}", preview(&item.title, 60), e);
                    result.push(item);
                }
            }
        }

        info!("Shortened {}/{} titles", shortened, total);
        result
    }
}

fn categorize_prompt(items: &[NewsItem]) -> String {
    let listing = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {} — {}", i + 1, item.title, item.source))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{}{}", CATEGORIZE_PROMPT, listing, CATEGORIZE_INSTRUCTIONS)
}

/// One verdict per response line, so line `i` always answers item `i`.
/// Leading numbering is tolerated; blank lines and unknown category names
/// map to the default category.
pub fn parse_verdicts(response: &str) -> Vec<Verdict> {
    response
        .trim()
        .lines()
        .map(str::trim)
        .map(|line| {
            let label = line.trim_start_matches(|c: char| c.is_ascii_digit() || ".-) \t".contains(c));
            if label.to_uppercase().contains("SKIP") {
                Verdict::Skip
            } else {
                match canonical_category(label) {
                    Some(category) => Verdict::Category(category),
                    None => {
                        warn!("No category match for {:?}, using {}", label, DEFAULT_CATEGORY);
                        Verdict::Category(DEFAULT_CATEGORY)
                    }
                }
            }
        })
        .collect()
}

/// Keep a known configured category, otherwise fall back to keywords.
fn categorize_offline(item: NewsItem) -> NewsItem {
    match canonical_category(&item.category) {
        Some(category) => item.with_category(category),
        None => {
            let category = baseline::categorize(&item);
            item.with_category(category)
        }
    }
}

fn log_distribution(items: &[NewsItem]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.category.as_str()).or_default() += 1;
    }
    info!("Category distribution: {:?}", counts);
}
