//! Chat completions client for the hosted LLM gateway
//!
//! Speaks the OpenAI-compatible chat completions protocol. The gateway's
//! rate-limit (429) and credit-exhaustion (402) responses are surfaced as
//! distinct error categories so the API layer can relay the right status.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::GatewayConfig;

/// One completion request: an optional system message plus the user prompt
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: String) -> Self {
        Self {
            system: None,
            prompt,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Error categories for gateway interactions
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Gateway returned 429
    #[error("Gateway rate limit exceeded")]
    RateLimited,

    /// Gateway returned 402
    #[error("Gateway credits depleted")]
    CreditsExhausted,

    /// Gateway returned another non-success status
    #[error("Gateway error: {0}")]
    Upstream(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Text completion boundary used by the orchestrator
///
/// Kept as a trait so services can be exercised against a scripted backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one completion request and return the reply text
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

/// HTTP client for the chat completions gateway
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl GatewayClient {
    /// Create a client from gateway configuration and an API key
    pub fn new(config: &GatewayConfig, api_key: String) -> Result<Self, GatewayError> {
        let base = config.base_url.as_str().trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}/chat/completions", base))
            .map_err(|e| GatewayError::Upstream(format!("Invalid gateway URL: {}", e)))?;

        let client = Client::builder()
            .user_agent("copygen-agent/0.1")
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionBackend for GatewayClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let start_time = std::time::Instant::now();
        let prompt_length = request.prompt.len();

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatRequest {
            model: &self.model,
            temperature: request.temperature,
            messages,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(model = %self.model, "Gateway request rate limited");
            return Err(GatewayError::RateLimited);
        }
        if status == StatusCode::PAYMENT_REQUIRED {
            tracing::warn!(model = %self.model, "Gateway credits depleted");
            return Err(GatewayError::CreditsExhausted);
        }
        if !status.is_success() {
            tracing::error!(
                model = %self.model,
                status = status.as_u16(),
                "Gateway request failed"
            );
            return Err(GatewayError::Upstream(format!("HTTP {}", status)));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = extract_content(parsed);

        let elapsed = start_time.elapsed();
        if content.is_empty() {
            tracing::warn!(
                model = %self.model,
                elapsed_ms = elapsed.as_millis(),
                prompt_length = prompt_length,
                "Gateway returned an empty completion"
            );
        } else {
            tracing::debug!(
                model = %self.model,
                elapsed_ms = elapsed.as_millis(),
                prompt_length = prompt_length,
                reply_length = content.len(),
                "Gateway completion succeeded"
            );
        }

        Ok(content)
    }
}

/// Pull the first choice's message content out of a chat response
fn extract_content(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default()
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_choice_content() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Own the morning"}},{"message":{"role":"assistant","content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(response), "Own the morning");
    }

    #[test]
    fn test_extract_tolerates_missing_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(extract_content(response), "");
    }

    #[test]
    fn test_client_builds_with_trailing_slash_base_url() {
        let mut config = GatewayConfig::default();
        config.base_url = Url::parse("https://gw.example.com/v1/").unwrap();
        let client = GatewayClient::new(&config, "test-key".to_string()).unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "https://gw.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_built_from_base_url() {
        let config = GatewayConfig::default();
        let client = GatewayClient::new(&config, "test-key".to_string()).unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "https://ai.gateway.lovable.dev/v1/chat/completions"
        );
    }
}
