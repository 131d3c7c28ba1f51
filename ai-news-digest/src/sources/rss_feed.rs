use crate::traits::FeedSource;
use crate::types::{FeedSpec, FetchConfig, ParsedFeed, Result};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::info;

/// Feed source that downloads feeds over HTTP and parses them with feed-rs
pub struct RssFeedSource {
    fetcher: Fetcher,
}

impl RssFeedSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    fn source_name(&self) -> String {
        "RSS/Atom over HTTP".to_string()
    }

    async fn pull(&self, feed: &FeedSpec) -> Result<ParsedFeed> {
        info!("Pulling feed {} ({})", feed.source, feed.url);

        let fetch_result = self.fetcher.fetch_feed(&feed.url).await?;
        let parsed_feed = FeedParser::parse_feed(&fetch_result.content)?;

        info!(
            "Pulled {} entries from {} (HTTP {})",
            parsed_feed.entries.len(),
            feed.source,
            fetch_result.http_status
        );
        Ok(parsed_feed)
    }
}
