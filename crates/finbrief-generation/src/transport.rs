//! Chat completions transport.

use std::time::Duration;

use finbrief_core::errors::{FinbriefResult, GenerationError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::ChatMessage;

/// Body of a chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: usize,
}

/// Sends one chat request and returns the assistant text.
///
/// Implementations report an unknown or retired model as
/// `GenerationError::ModelUnavailable` so callers can switch models.
pub trait ChatTransport {
    fn complete(&self, request: &ChatRequest) -> FinbriefResult<String>;
}

/// OpenAI-compatible HTTP transport (Groq by default). No retries.
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl HttpChatTransport {
    pub fn new(
        api_key: &str,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> FinbriefResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|e| {
            GenerationError::RequestFailed {
                reason: format!("invalid API key header: {e}"),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl ChatTransport for HttpChatTransport {
    fn complete(&self, request: &ChatRequest) -> FinbriefResult<String> {
        debug!(endpoint = %self.endpoint, model = %request.model, "sending chat request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| GenerationError::RequestFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(classify_failure(status, &body, &request.model).into());
        }

        let parsed: ChatResponse =
            response
                .json()
                .map_err(|e| GenerationError::RequestFailed {
                    reason: format!("failed to parse response: {e}"),
                })?;
        assistant_text(parsed, &request.model)
    }
}

/// Map an unsuccessful HTTP status to an error, separating model problems
/// from everything else.
fn classify_failure(status: StatusCode, body: &str, model: &str) -> GenerationError {
    let model_problem = status == StatusCode::NOT_FOUND
        || body.contains("model_not_found")
        || body.contains("model_decommissioned");
    if model_problem {
        GenerationError::ModelUnavailable {
            model: model.to_string(),
            reason: format!("{status}: {body}"),
        }
    } else {
        GenerationError::RequestFailed {
            reason: format!("API returned {status}: {body}"),
        }
    }
}

fn assistant_text(response: ChatResponse, model: &str) -> FinbriefResult<String> {
    response
        .choices
        .into_iter()
        .find_map(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            GenerationError::EmptyResponse {
                model: model.to_string(),
            }
            .into()
        })
}
