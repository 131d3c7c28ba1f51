use crate::rss_utils::text::preview;
use crate::types::{DigestError, LlmConfig, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A single-prompt completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.2,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Trait for LLM adapters that can answer a prompt
#[async_trait]
pub trait LlmAdapter: Send + Sync {
    /// Get the name of this LLM adapter
    fn adapter_name(&self) -> String;

    /// Send one prompt and return the model's text reply
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Adapter for OpenAI-compatible `/v1/chat/completions` endpoints.
///
/// A transient failure (timeout, connection error, HTTP 429 or 5xx) is
/// retried once; anything else is returned to the caller immediately.
pub struct OpenAiAdapter {
    client: Client,
    config: LlmConfig,
    retry_delay: Duration,
}

impl OpenAiAdapter {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            retry_delay: Duration::from_secs(2),
        })
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    async fn complete_once(&self, request: &CompletionRequest) -> Result<String> {
        let url = self.endpoint();
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!("Sending completion request to {} ({} prompt bytes)", url, request.prompt.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!("Completion request failed: HTTP {}: {}", status, preview(&error_body, 200));
            return Err(DigestError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let chat: ChatResponse = response.json().await?;
        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| DigestError::Llm("response contained no choices".to_string()))
    }
}

#[async_trait]
impl LlmAdapter for OpenAiAdapter {
    fn adapter_name(&self) -> String {
        format!("OpenAI-compatible ({})", self.config.model)
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        match self.complete_once(request).await {
            Err(e) if e.is_transient() => {
                warn!("Completion failed ({}), retrying once in {:?}", e, self.retry_delay);
                tokio::time::sleep(self.retry_delay).await;
                self.complete_once(request).await
            }
            result => result,
        }
    }
}

/// Scripted LLM adapter for development and testing
pub struct MockLlmAdapter {
    name: String,
    responses: Mutex<VecDeque<std::result::Result<String, String>>>,
    fallback: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Mutex::new(VecDeque::new()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply for the next unanswered request.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.push(Ok(response.into()));
        self
    }

    /// Queue a failure for the next unanswered request.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    /// Reply used once the queue is exhausted.
    pub fn with_fallback(mut self, response: impl Into<String>) -> Self {
        self.fallback = Some(response.into());
        self
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn push(&self, response: std::result::Result<String, String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }
}

#[async_trait]
impl LlmAdapter for MockLlmAdapter {
    fn adapter_name(&self) -> String {
        format!("Mock LLM Adapter ({})", self.name)
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let next = self.responses.lock().ok().and_then(|mut queue| queue.pop_front());
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(DigestError::Llm(message)),
            None => match &self.fallback {
                Some(response) => Ok(response.clone()),
                None => {
                    info!("{} has no scripted response left", self.adapter_name());
                    Err(DigestError::Llm("no scripted response".to_string()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_replays_script_then_fallback() {
        let adapter = MockLlmAdapter::new("test")
            .with_response("first")
            .with_failure("boom")
            .with_fallback("again");

        let request = CompletionRequest::new("hello");
        assert_eq!(adapter.complete(&request).await.unwrap(), "first");
        assert!(matches!(adapter.complete(&request).await, Err(DigestError::Llm(_))));
        assert_eq!(adapter.complete(&request).await.unwrap(), "again");
        assert_eq!(adapter.requests().len(), 3);
    }

    #[test]
    fn request_serializes_in_chat_format() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage { role: "user", content: "hi" }],
            temperature: 0.3,
            max_tokens: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("max_tokens").is_none());
    }
}
