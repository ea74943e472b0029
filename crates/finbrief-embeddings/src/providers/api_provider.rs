//! OpenAI-compatible embedding API provider.
//!
//! One blocking request per batch. Failures are reported, never retried.

use std::time::Duration;

use finbrief_core::errors::{EmbeddingError, FinbriefResult};
use finbrief_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct ApiProvider {
    client: Client,
    endpoint: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(
        api_key: &str,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> FinbriefResult<Self> {
        if api_key.trim().is_empty() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: "api: empty API key".to_string(),
            }
            .into());
        }

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|e| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("api: invalid API key header: {e}"),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("api: failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            dimensions,
        })
    }

    fn request_embeddings(&self, texts: &[String]) -> FinbriefResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(endpoint = %self.endpoint, batch = texts.len(), "requesting embeddings");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("API returned {status}: {body}"),
            }
            .into());
        }

        let parsed: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("JSON parse error: {e}"),
                })?;

        order_embeddings(parsed.data, texts.len(), self.dimensions)
    }
}

/// Restore request order and check the count and width of every vector.
fn order_embeddings(
    mut data: Vec<EmbedData>,
    expected: usize,
    dimensions: usize,
) -> FinbriefResult<Vec<Vec<f32>>> {
    if data.len() != expected {
        return Err(EmbeddingError::InferenceFailed {
            reason: format!("expected {expected} embeddings, got {}", data.len()),
        }
        .into());
    }
    data.sort_by_key(|d| d.index);

    let mut vectors = Vec::with_capacity(expected);
    for d in data {
        if d.embedding.len() != dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dimensions,
                actual: d.embedding.len(),
            }
            .into());
        }
        vectors.push(d.embedding);
    }
    Ok(vectors)
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> FinbriefResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> FinbriefResult<Vec<Vec<f32>>> {
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
