use crate::rss_utils::text::title_key;
use crate::types::NewsItem;
use std::collections::HashSet;
use tracing::{debug, info};

/// Newest-first list keeping only the newest item per id. An item whose
/// title matches an already kept title is treated as the same story.
pub fn deduplicate(mut items: Vec<NewsItem>) -> Vec<NewsItem> {
    items.sort_by(|a, b| b.published.cmp(&a.published));

    let total = items.len();
    let mut seen_ids = HashSet::new();
    let mut seen_titles = HashSet::new();
    let mut unique_items = Vec::with_capacity(total);

    for item in items {
        if !seen_ids.insert(item.id.clone()) || !seen_titles.insert(title_key(&item.title)) {
            debug!("Removing duplicate entry: {} ({})", item.title, item.link);
            continue;
        }
        unique_items.push(item);
    }

    let removed_count = total - unique_items.len();
    if removed_count > 0 {
        info!("Removed {} duplicate entries", removed_count);
    }

    unique_items
}

/// Keep at most `limit` items from papers feeds, preferring the newest.
/// Expects newest-first input, as produced by [`deduplicate`].
pub fn limit_papers(items: Vec<NewsItem>, limit: usize) -> Vec<NewsItem> {
    let mut paper_count = 0;
    let mut skipped = 0;

    let kept: Vec<NewsItem> = items
        .into_iter()
        .filter(|item| {
            if !item.is_paper() {
                return true;
            }
            if paper_count < limit {
                paper_count += 1;
                true
            } else {
                debug!("Skipping paper: {}", item.title);
                skipped += 1;
                false
            }
        })
        .collect();

    if skipped > 0 {
        info!("Skipped {} additional papers (kept top {})", skipped, limit);
    }
    kept
}
