use crate::collector::Collector;
use crate::digest::DigestFormatter;
use crate::feed_registry::FeedRegistry;
use crate::filter::limit_papers;
use crate::publisher::Publisher;
use crate::summarizer::Summarizer;
use crate::traits::FeedSource;
use crate::types::{DigestConfig, Result, RunReport};
use chrono::{DateTime, Utc};
use tracing::info;

/// One run: collect → filter → summarize → render → publish, in order.
pub struct DigestPipeline {
    registry: FeedRegistry,
    collector: Collector,
    summarizer: Summarizer,
    formatter: DigestFormatter,
    publisher: Publisher,
    paper_limit: usize,
}

impl DigestPipeline {
    pub fn new(
        registry: FeedRegistry,
        source: Box<dyn FeedSource>,
        summarizer: Summarizer,
        config: &DigestConfig,
    ) -> Self {
        Self {
            registry,
            collector: Collector::new(source).with_window(config.window),
            summarizer: summarizer.with_shortening(config.shorten_titles),
            formatter: DigestFormatter::new(config.max_chars),
            publisher: Publisher::new(config.output_path.clone()),
            paper_limit: config.paper_limit,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        self.run_at(Utc::now()).await
    }

    /// Any error aborts the run before the digest is written.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunReport> {
        info!("Starting digest run with {} feeds", self.registry.len());

        let collected = self.collector.collect_at(self.registry.feeds(), now).await;
        let collected_count = collected.len();

        let items = limit_papers(collected, self.paper_limit);
        info!("After filtering: {} items", items.len());
        let kept = items.len();

        let items = self.summarizer.summarize(items).await?;

        let digest = self.formatter.render(&items, now.date_naive());
        let output_path = self.publisher.publish(&digest).await?;

        Ok(RunReport {
            feeds: self.registry.len(),
            collected: collected_count,
            kept,
            rendered: digest.item_count,
            truncated: digest.truncated,
            output_path,
        })
    }
}
