use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

// Use the interfaces crate for core types
pub use interfaces::defs::{FeedSpec, NewsItem};
pub use interfaces::defs::{CATEGORIES, DEFAULT_CATEGORY, OTHER_CATEGORY};

pub const USER_AGENT: &str = concat!("ai-news-digest/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout_seconds: 10,
            max_retries: 0,
            retry_delay_seconds: 1,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// How far back an entry may be published and still count as fresh.
    pub window: chrono::Duration,
    /// Maximum number of items whose source is a papers feed.
    pub paper_limit: usize,
    /// Upper bound on the rendered Markdown, in characters.
    pub max_chars: usize,
    pub shorten_titles: bool,
    pub output_path: PathBuf,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            window: chrono::Duration::hours(24),
            paper_limit: 7,
            // GitHub rejects issue bodies above 65536 characters.
            max_chars: 60_000,
            shorten_titles: true,
            output_path: PathBuf::from("news.md"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug)]
pub struct FetchResult {
    pub url: String,
    pub http_status: u16,
    pub response_time_ms: u64,
    pub content: String,
}

#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<ParsedEntry>,
}

#[derive(Debug, Clone)]
pub struct ParsedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Rendered digest for one run. Built once, never changed afterwards.
#[derive(Debug, Clone)]
pub struct Digest {
    pub issue_title: String,
    pub markdown: String,
    pub item_count: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub feeds: usize,
    pub collected: usize,
    pub kept: usize,
    pub rendered: usize,
    pub truncated: bool,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed size exceeds limit of {limit_mb}MB")]
    FeedTooLarge { limit_mb: usize },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DigestError {
    /// Whether repeating the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            DigestError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            DigestError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
