pub mod collector;
pub mod config;
pub mod digest;
pub mod feed_registry;
pub mod fetcher;
pub mod filter;
pub mod llm_adapter;
pub mod parser;
pub mod pipeline;
pub mod publisher;
pub mod rss_utils;
pub mod sources;
pub mod summarizer;
pub mod traits;
pub mod types;

pub use collector::Collector;
pub use digest::DigestFormatter;
pub use feed_registry::FeedRegistry;
pub use fetcher::Fetcher;
pub use llm_adapter::{CompletionRequest, LlmAdapter, MockLlmAdapter, OpenAiAdapter};
pub use parser::FeedParser;
pub use pipeline::DigestPipeline;
pub use publisher::Publisher;
pub use sources::RssFeedSource;
pub use summarizer::Summarizer;
pub use traits::FeedSource;
pub use types::*;
