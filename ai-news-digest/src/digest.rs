use crate::rss_utils::text::collapse_whitespace;
use crate::types::{Digest, NewsItem, CATEGORIES, OTHER_CATEGORY};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const EMPTY_DIGEST: &str = "_No fresh AI headlines in the last 24 h._";
const HEADING: &str = "## Daily AI / LLM Headlines";

/// Renders summarized items into the Markdown digest.
pub struct DigestFormatter {
    max_chars: usize,
}

impl DigestFormatter {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn render(&self, items: &[NewsItem], date: NaiveDate) -> Digest {
        let issue_title = format!("AI News Digest — {}", date.format("%Y-%m-%d"));

        if items.is_empty() {
            info!("Rendering empty digest");
            return Digest {
                issue_title,
                markdown: EMPTY_DIGEST.to_string(),
                item_count: 0,
                truncated: false,
            };
        }

        let markdown = to_markdown(items);
        let (markdown, omitted) = truncate_lines(markdown, self.max_chars);
        if omitted > 0 {
            warn!("Digest exceeded {} characters, omitted {} headlines", self.max_chars, omitted);
        }

        info!("Rendered {} items ({} characters)", items.len() - omitted, markdown.chars().count());
        Digest {
            issue_title,
            markdown,
            item_count: items.len() - omitted,
            truncated: omitted > 0,
        }
    }
}

impl Default for DigestFormatter {
    fn default() -> Self {
        Self::new(60_000)
    }
}

/// Sections in display order: known categories first, then any other
/// configured category alphabetically, then items with no category.
fn sections(items: &[NewsItem]) -> Vec<(&str, Vec<&NewsItem>)> {
    let mut grouped: BTreeMap<&str, Vec<&NewsItem>> = BTreeMap::new();
    for item in items {
        let category = item.category.trim();
        let category = if category.is_empty() { OTHER_CATEGORY } else { category };
        grouped.entry(category).or_default().push(item);
    }

    let mut ordered = Vec::with_capacity(grouped.len());
    for category in CATEGORIES {
        if let Some(items) = grouped.remove(category) {
            ordered.push((category, items));
        }
    }
    let other = grouped.remove(OTHER_CATEGORY);
    ordered.extend(grouped);
    if let Some(items) = other {
        ordered.push((OTHER_CATEGORY, items));
    }
    ordered
}

fn to_markdown(items: &[NewsItem]) -> String {
    let mut lines = vec![HEADING.to_string(), String::new()];

    for (category, mut section) in sections(items) {
        section.sort_by(|a, b| b.published.cmp(&a.published).then_with(|| a.source.cmp(&b.source)));

        lines.push(format!("### {}", category));
        for item in section {
            lines.push(format!(
                "- [{}]({}) — {}",
                link_text(&item.title),
                item.link,
                collapse_whitespace(&item.source)
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// One-line Markdown link text. Brackets are escaped so a title cannot
/// close the link early.
fn link_text(title: &str) -> String {
    collapse_whitespace(title).replace('[', "\\[").replace(']', "\\]")
}

fn is_item_line(line: &str) -> bool {
    line.starts_with("- [")
}

/// Keep whole lines until the document fits in `max_chars`, ending with a
/// note on how many headlines were dropped. Returns the omitted count.
fn truncate_lines(markdown: String, max_chars: usize) -> (String, usize) {
    if markdown.chars().count() <= max_chars {
        return (markdown, 0);
    }

    let lines: Vec<&str> = markdown.lines().collect();
    let total_items = lines.iter().filter(|line| is_item_line(line)).count();

    let mut kept: Vec<&str> = Vec::new();
    let mut kept_items = 0;
    let mut used = 0;
    for &line in &lines {
        let note = omitted_note(total_items - kept_items - usize::from(is_item_line(line)));
        // Line plus newline, and one more for the blank line before the note.
        let cost = line.chars().count() + 1;
        if used + cost + 1 + note.chars().count() > max_chars {
            break;
        }
        kept.push(line);
        used += cost;
        if is_item_line(line) {
            kept_items += 1;
        }
    }

    // Drop a dangling section heading left without any items under it.
    while kept.last().is_some_and(|line| line.is_empty() || line.starts_with("### ")) {
        kept.pop();
    }

    let omitted = total_items - kept_items;
    let mut result = kept.join("\n");
    if !result.is_empty() {
        result.push_str("\n\n");
    }
    result.push_str(&omitted_note(omitted));

    if result.chars().count() > max_chars {
        result = crate::rss_utils::text::truncate_chars(&result, max_chars).to_string();
    }
    (result, omitted)
}

fn omitted_note(omitted: usize) -> String {
    format!("_Digest truncated: {} more headlines omitted._", omitted)
}
