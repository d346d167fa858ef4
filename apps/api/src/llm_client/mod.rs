/// Completion client — the single point of entry for all calls to the hosted
/// chat-completion endpoint.
///
/// No other module may talk to the endpoint directly. Domain helpers in
/// `assistant` shape messages and delegate here.
///
/// One request per call: no retries, no backoff, no timeout override.
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

mod stream;

const INVOKE_URL: &str = "https://integrate.api.nvidia.com/v1/chat/completions";
/// Environment variable holding the endpoint's bearer credential.
pub const API_KEY_ENV: &str = "NVIDIA_API_KEY";
/// Optional environment variable overriding the completion URL.
pub const API_URL_ENV: &str = "NVIDIA_API_URL";
/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "meta/llama-guard-4-12b";
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 0.9;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is required. Set NVIDIA_API_KEY or pass it directly")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a conversation. Order within a sequence is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Model and sampling parameters for a single completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub max_tokens: u32,
    /// 0.0 – 1.0
    pub temperature: f32,
    /// 0.0 – 1.0
    pub top_p: f32,
    pub stream: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            stream: false,
        }
    }
}

/// Wire payload sent to the endpoint. `messages` is forwarded verbatim.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub stream: bool,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(messages: &'a [Message], options: &'a CompletionOptions) -> Self {
        Self {
            model: &options.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
            stream: options.stream,
        }
    }
}

/// Response envelope. Non-streaming bodies carry `message`, stream chunks carry `delta`.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceContent>,
    #[serde(default)]
    pub delta: Option<ChoiceContent>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceContent {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice's message. Empty when there is none.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }
}

/// Client for the hosted chat-completion endpoint.
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl CompletionClient {
    /// Fails before any request is possible when the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            endpoint: INVOKE_URL.to_string(),
        })
    }

    /// Builds a client from `NVIDIA_API_KEY`, honouring `NVIDIA_API_URL` when set.
    /// Fails when the key is unset or blank.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let client = Self::new(lookup(API_KEY_ENV).unwrap_or_default())?;
        match lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => Ok(client.with_endpoint(url)),
            None => Ok(client),
        }
    }

    /// Points the client at a different chat-completion URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one completion request and returns the text of the first choice.
    ///
    /// With `options.stream` set, the body is read as server-sent events and the
    /// `delta.content` fragments are concatenated.
    pub async fn chat_completion(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let request_body = CompletionRequest::new(messages, options);
        let accept = if options.stream {
            "text/event-stream"
        } else {
            "application/json"
        };

        debug!(
            "Completion request: model={}, messages={}, stream={}",
            options.model,
            messages.len(),
            options.stream
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, accept)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: upstream_error_message(body),
            });
        }

        if options.stream {
            return stream::collect_stream(response).await;
        }

        let body = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        let text = parsed.text().to_string();

        debug!(
            "Completion succeeded: choices={}, chars={}",
            parsed.choices.len(),
            text.len()
        );

        Ok(text)
    }
}

/// Pulls a readable message out of an error body, falling back to the raw text.
fn upstream_error_message(body: String) -> String {
    let Ok(value) = serde_json::from_str::<Value>(&body) else {
        return body;
    };

    let message = value
        .get("error")
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(Value::as_str)
        .or_else(|| value.get("detail").and_then(Value::as_str));

    match message {
        Some(m) => m.to_string(),
        None => body,
    }
}
