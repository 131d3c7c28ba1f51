use crate::types::{FeedSpec, ParsedFeed, Result};
use async_trait::async_trait;

/// Trait for pulling entries from a configured feed.
///
/// The collector only sees this seam, so tests can swap the network for a
/// fixed set of entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source implementation
    fn source_name(&self) -> String;

    /// Fetch and parse the feed described by `feed`
    async fn pull(&self, feed: &FeedSpec) -> Result<ParsedFeed>;
}
