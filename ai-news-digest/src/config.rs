//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment variable
//! named next to it, which is how the scheduled job passes secrets.

use crate::types::{DigestConfig, FetchConfig, LlmConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Collect AI news feeds and render a daily Markdown digest")]
pub struct Cli {
    /// JSON file mapping feed URL to {category, source}
    #[arg(long, env = "FEEDS_FILE", default_value = "feeds.json")]
    pub feeds_file: PathBuf,

    /// Where the rendered Markdown digest is written
    #[arg(short, long, env = "OUTPUT_FILE", default_value = "news.md")]
    pub output: PathBuf,

    /// API key for the language model; without it no model is called
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub openai_base_url: String,

    /// Maximum number of research-paper items in the digest
    #[arg(long, env = "PAPER_LIMIT", default_value_t = 7)]
    pub paper_limit: usize,

    /// Per-feed request timeout in seconds
    #[arg(long, env = "RSS_TIMEOUT", default_value_t = 10)]
    pub rss_timeout: u64,

    /// Retries for transient feed fetch failures
    #[arg(long, env = "RSS_RETRIES", default_value_t = 0)]
    pub rss_retries: u32,

    /// Only entries published within this many hours are collected
    #[arg(long, env = "WINDOW_HOURS", default_value_t = 24)]
    pub window_hours: u32,

    /// Upper bound on the digest length in characters
    #[arg(long, env = "MAX_DIGEST_CHARS", default_value_t = 60_000)]
    pub max_digest_chars: usize,

    /// Ask the model to shorten each headline
    #[arg(long, env = "SHORTEN_TITLES", default_value_t = true, action = clap::ArgAction::Set)]
    pub shorten_titles: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_seconds: self.rss_timeout,
            max_retries: self.rss_retries,
            ..FetchConfig::default()
        }
    }

    pub fn digest_config(&self) -> DigestConfig {
        DigestConfig {
            window: chrono::Duration::hours(i64::from(self.window_hours)),
            paper_limit: self.paper_limit,
            max_chars: self.max_digest_chars,
            shorten_titles: self.shorten_titles,
            output_path: self.output.clone(),
        }
    }

    /// `None` when no API key is configured.
    pub fn llm_config(&self) -> Option<LlmConfig> {
        let api_key = self.openai_api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        Some(LlmConfig {
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
            timeout: Duration::from_secs(60),
            ..LlmConfig::new(api_key)
        })
    }
}
