// Shared fakes and fixtures for the integration tests
#![allow(dead_code)]

use ai_news_digest::{DigestError, FeedSource, FeedSpec, ParsedEntry, ParsedFeed, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Feed source answering from a fixed table instead of the network.
/// URLs missing from the table fail like an unreachable host.
#[derive(Default)]
pub struct StaticFeedSource {
    feeds: HashMap<String, Vec<ParsedEntry>>,
    pulled: Mutex<Vec<String>>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, entries: Vec<ParsedEntry>) -> Self {
        self.feeds.insert(url.to_string(), entries);
        self
    }

    pub fn pulled(&self) -> Vec<String> {
        self.pulled.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn source_name(&self) -> String {
        "static test feeds".to_string()
    }

    async fn pull(&self, feed: &FeedSpec) -> Result<ParsedFeed> {
        self.pulled.lock().unwrap().push(feed.url.clone());
        match self.feeds.get(&feed.url) {
            Some(entries) => Ok(ParsedFeed {
                title: Some(feed.source.clone()),
                entries: entries.clone(),
            }),
            None => Err(DigestError::Parse(format!("no such feed: {}", feed.url))),
        }
    }
}

pub fn feed(url: &str, category: &str, source: &str) -> FeedSpec {
    FeedSpec {
        url: url.to_string(),
        category: category.to_string(),
        source: source.to_string(),
    }
}

pub fn entry(title: &str, link: &str, published: DateTime<Utc>) -> ParsedEntry {
    ParsedEntry {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        published_at: Some(published),
        updated_at: None,
    }
}

pub fn hours_ago(now: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    now - Duration::hours(hours)
}

pub fn rss_document(items: &[(&str, &str, DateTime<Utc>)]) -> String {
    let body: String = items
        .iter()
        .map(|(title, link, published)| {
            format!(
                "<item><title>{}</title><link>{}</link><pubDate>{}</pubDate></item>",
                title,
                link,
                published.to_rfc2822()
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Test feed</title><link>https://example.com</link><description>Test</description>{}</channel></rss>"#,
        body
    )
}
