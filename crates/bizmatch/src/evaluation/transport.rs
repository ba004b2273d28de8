use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::EvaluationError;

/// Resolved target of a completion call.
#[derive(Clone)]
pub struct ChatEndpoint {
    pub url: String,
    pub api_key: String,
}

impl fmt::Debug for ChatEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatEndpoint")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    #[default]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Wire body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: ChatRole::Assistant,
                    content: content.into(),
                },
            }],
        }
    }

    /// Content of the first completion, which is all the gateway reads.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

/// Outbound seam to the chat-completion provider.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(
        &self,
        endpoint: &ChatEndpoint,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, EvaluationError>;
}

/// `reqwest`-backed transport with a whole-request timeout.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: Client,
    timeout: Duration,
}

impl HttpChatTransport {
    pub fn new(timeout: Duration) -> Result<Self, EvaluationError> {
        let client = Client::builder().timeout(timeout).build().map_err(|err| {
            EvaluationError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self { client, timeout })
    }

    fn describe_send_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            format!("request failed: {err}")
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn complete(
        &self,
        endpoint: &ChatEndpoint,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, EvaluationError> {
        debug!(url = %endpoint.url, model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&endpoint.url)
            .header(AUTHORIZATION, format!("Bearer {}", endpoint.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| EvaluationError::Transport(self.describe_send_error(&err)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| EvaluationError::Transport(self.describe_send_error(&err)))?;

        if !status.is_success() {
            return Err(EvaluationError::Transport(format!("HTTP {status}: {body}")));
        }

        serde_json::from_str(&body).map_err(|err| {
            EvaluationError::Parse(format!("response is not a chat completion: {err}"))
        })
    }
}
