//! HTTP client for the chat-completion advice service.

use serde::{Deserialize, Serialize};

use super::error::AdviceError;

/// Default base URL for the advice API (OpenAI-compatible).
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default completion model.
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration for the advice client.
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    /// API key; `None` means only the offline knowledge base is served.
    pub api_key: Option<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Completion model name.
    pub model: String,
    /// Request timeout in seconds. A slow upstream must not hang the
    /// caller past this bound.
    pub timeout_secs: u64,
}

impl AdviceConfig {
    /// Create a new config with the given optional API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
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
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Travel-advice API client.
///
/// Asks a chat-completion model for short, destination-specific advice.
/// The request timeout is enforced by the underlying HTTP client, so a
/// stalled upstream surfaces as a recoverable [`AdviceError::Http`].
#[derive(Debug, Clone)]
pub struct AdviceClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl AdviceClient {
    /// Create a new advice client with the given configuration.
    pub fn new(config: AdviceConfig) -> Result<Self, AdviceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
        })
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask for advice about a destination.
    ///
    /// Returns the model's reply text, or a typed error. Having no key
    /// configured is [`AdviceError::NotConfigured`], which callers are
    /// expected to answer from the offline knowledge base.
    pub async fn get_advice(
        &self,
        destination: &str,
        question: &str,
    ) -> Result<String, AdviceError> {
        let api_key = self.api_key.as_ref().ok_or(AdviceError::NotConfigured)?;

        let system_prompt = format!(
            "You are an expert local guide for {destination}. \
             Give specific, actionable advice (names of specific dishes, \
             places, or items). Keep it under 50 words."
        );

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: 0.7,
            max_tokens: 150,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdviceError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AdviceError::RateLimited);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| AdviceError::Json {
            message: e.to_string(),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AdviceError::Json {
                message: "response contained no choices".to_string(),
            })
    }
}
