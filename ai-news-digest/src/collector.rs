use crate::filter::deduplicate;
use crate::rss_utils::text::collapse_whitespace;
use crate::rss_utils::url::{is_valid_feed_url, normalize_url};
use crate::traits::FeedSource;
use crate::types::{FeedSpec, NewsItem, ParsedEntry};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};

/// Pulls every configured feed and turns fresh entries into news items.
pub struct Collector {
    source: Box<dyn FeedSource>,
    window: Duration,
}

impl Collector {
    pub fn new(source: Box<dyn FeedSource>) -> Self {
        Self {
            source,
            window: Duration::hours(24),
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub async fn collect(&self, feeds: &[FeedSpec]) -> Vec<NewsItem> {
        self.collect_at(feeds, Utc::now()).await
    }

    /// Collect items published within the window ending at `now`.
    /// Feeds that fail to fetch or parse are skipped.
    pub async fn collect_at(&self, feeds: &[FeedSpec], now: DateTime<Utc>) -> Vec<NewsItem> {
        let cutoff = now.checked_sub_signed(self.window).unwrap_or(DateTime::<Utc>::MIN_UTC);
        info!(
            "Collecting items newer than {} from {} feeds via {}",
            cutoff,
            feeds.len(),
            self.source.source_name()
        );

        let mut items = Vec::new();
        for feed in feeds {
            if !is_valid_feed_url(&feed.url) {
                warn!("Skipping {}: invalid feed URL {:?}", feed.source, feed.url);
                continue;
            }

            let parsed = match self.source.pull(feed).await {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!("Feed error for {} ({}): {}", feed.source, feed.url, e);
                    continue;
                }
            };

            let before = items.len();
            items.extend(
                parsed
                    .entries
                    .iter()
                    .filter_map(|entry| to_news_item(entry, feed, cutoff)),
            );
            debug!(
                "Kept {} of {} entries from {}",
                items.len() - before,
                parsed.entries.len(),
                feed.source
            );
        }

        info!("Collected {} total items from all feeds", items.len());
        deduplicate(items)
    }
}

/// Stable id for a link: hex SHA-256 of its normalized form.
pub fn item_id(link: &str) -> String {
    format!("{:x}", Sha256::digest(normalize_url(link).as_bytes()))
}

fn to_news_item(entry: &ParsedEntry, feed: &FeedSpec, cutoff: DateTime<Utc>) -> Option<NewsItem> {
    let published = entry.published_at.or(entry.updated_at)?;
    if published < cutoff {
        return None;
    }

    // Feeds such as arXiv wrap long titles across lines.
    let title = entry.title.as_deref().map(collapse_whitespace).unwrap_or_default();
    let link = entry.link.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() || link.is_empty() {
        return None;
    }

    Some(NewsItem {
        id: item_id(link),
        title: title.to_string(),
        link: link.to_string(),
        published,
        source: feed.source.clone(),
        category: feed.category.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_ignore_tracking_noise() {
        assert_eq!(
            item_id("https://www.example.com/story/?utm_source=x"),
            item_id("https://example.com/story")
        );
        assert_ne!(item_id("https://example.com/a"), item_id("https://example.com/b"));
        assert_eq!(item_id("https://example.com/a").len(), 64);
    }

    struct NoFeeds;

    #[async_trait::async_trait]
    impl FeedSource for NoFeeds {
        fn source_name(&self) -> String {
            "none".to_string()
        }

        async fn pull(&self, _feed: &FeedSpec) -> crate::types::Result<crate::types::ParsedFeed> {
            Err(crate::types::DigestError::Parse("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn window_reaching_past_the_calendar_does_not_panic() {
        let collector = Collector::new(Box::new(NoFeeds)).with_window(Duration::hours(i64::from(u32::MAX)));
        let feeds = [FeedSpec {
            url: "https://example.com/rss".into(),
            category: "Breaking News".into(),
            source: "Example".into(),
        }];
        assert!(collector.collect_at(&feeds, Utc::now()).await.is_empty());
    }

    #[test]
    fn entries_need_date_title_and_link() {
        let now = Utc::now();
        let feed = FeedSpec {
            url: "https://example.com/rss".into(),
            category: "Breaking News".into(),
            source: "Example".into(),
        };
        let entry = ParsedEntry {
            title: Some("  Headline ".into()),
            link: Some("https://example.com/h".into()),
            published_at: None,
            updated_at: Some(now - Duration::hours(1)),
        };
        let cutoff = now - Duration::hours(24);

        let item = to_news_item(&entry, &feed, cutoff).unwrap();
        assert_eq!(item.title, "Headline");
        assert_eq!(item.category, "Breaking News");

        let stale = ParsedEntry { updated_at: Some(now - Duration::hours(30)), ..entry.clone() };
        assert!(to_news_item(&stale, &feed, cutoff).is_none());

        let undated = ParsedEntry { updated_at: None, ..entry.clone() };
        assert!(to_news_item(&undated, &feed, cutoff).is_none());

        let untitled = ParsedEntry { title: Some("   ".into()), ..entry.clone() };
        assert!(to_news_item(&untitled, &feed, cutoff).is_none());

        let wrapped = ParsedEntry {
            title: Some("Scaling Laws for\n    Sparse Mixture-of-Experts\n\n Models".into()),
            ..entry
        };
        let item = to_news_item(&wrapped, &feed, cutoff).unwrap();
        assert_eq!(item.title, "Scaling Laws for Sparse Mixture-of-Experts Models");
    }
}
