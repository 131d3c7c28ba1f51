use crate::types::{DigestError, FetchConfig, FetchResult, Result};
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    /// Download a feed body. Only transient failures are retried, and only
    /// when `max_retries` is non-zero.
    pub async fn fetch_feed(&self, url: &str) -> Result<FetchResult> {
        let start_time = Instant::now();

        debug!("Fetching feed: {}", url);

        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(10),
            multiplier: 2.0,
            max_elapsed_time: None,
            ..Default::default()
        };

        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok((http_status, content)) => {
                    let response_time_ms = start_time.elapsed().as_millis() as u64;
                    info!("Fetched feed: {} ({} bytes, {} ms)", url, content.len(), response_time_ms);
                    return Ok(FetchResult {
                        url: url.to_string(),
                        http_status,
                        response_time_ms,
                        content,
                    });
                }
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = backoff
                        .next_backoff()
                        .unwrap_or_else(|| Duration::from_secs(self.config.retry_delay_seconds));
                    warn!("Attempt {} failed for {}: {}; retrying in {:?}", attempt, url, e, delay);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!("Failed to fetch feed after {} attempts: {}: {}", attempt + 1, url, e);
                    return Err(e);
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<(u16, String)> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DigestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let limit_bytes = self.config.max_feed_size_mb.saturating_mul(1024 * 1024);
        if response.content_length().is_some_and(|len| len > limit_bytes as u64) {
            return Err(DigestError::FeedTooLarge {
                limit_mb: self.config.max_feed_size_mb,
            });
        }

        // Content-Length is absent on chunked responses, so count as we read.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit_bytes {
                warn!("Feed body from {} passed {} bytes, aborting download", url, limit_bytes);
                return Err(DigestError::FeedTooLarge {
                    limit_mb: self.config.max_feed_size_mb,
                });
            }
            body.extend_from_slice(&chunk);
        }

        let content = String::from_utf8_lossy(&body).into_owned();
        Ok((status.as_u16(), content))
    }
}
