//! Executive summary generator backed by a chat model.

use std::time::Duration;

use finbrief_core::config::GenerationConfig;
use finbrief_core::errors::{FinbriefError, FinbriefResult, GenerationError};
use finbrief_core::traits::ISummaryGenerator;
use finbrief_observability::events;
use tracing::info;

use crate::prompt::build_messages;
use crate::transport::{ChatRequest, ChatTransport, HttpChatTransport};

pub struct ChatSummaryGenerator {
    transport: Box<dyn ChatTransport>,
    model: String,
    fallback_model: Option<String>,
    temperature: f32,
    max_tokens: usize,
}

impl ChatSummaryGenerator {
    /// Build an HTTP-backed generator with an explicit API key.
    ///
    /// A missing or blank key is `GenerationError::MissingCredential`.
    pub fn from_config(
        config: &GenerationConfig,
        api_key: Option<String>,
    ) -> FinbriefResult<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingCredential {
                env_var: config.api_key_env.clone(),
            })?;
        let transport = HttpChatTransport::new(
            &api_key,
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Build an HTTP-backed generator reading the key from `config.api_key_env`.
    pub fn from_env(config: &GenerationConfig) -> FinbriefResult<Self> {
        Self::from_config(config, std::env::var(&config.api_key_env).ok())
    }

    pub fn with_transport(config: &GenerationConfig, transport: Box<dyn ChatTransport>) -> Self {
        Self {
            transport,
            model: config.model.clone(),
            fallback_model: config
                .fallback_model
                .clone()
                .filter(|m| !m.is_empty() && *m != config.model),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn request(&self, model: &str, passages: &[String]) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: build_messages(passages),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl ISummaryGenerator for ChatSummaryGenerator {
    fn generate(&self, passages: &[String]) -> FinbriefResult<String> {
        info!(model = %self.model, passages = passages.len(), "generating executive summary");
        let primary = self.transport.complete(&self.request(&self.model, passages));
        let (model, summary) = match (primary, self.fallback_model.as_deref()) {
            (Ok(summary), _) => (self.model.as_str(), summary),
            (
                Err(FinbriefError::GenerationError(GenerationError::ModelUnavailable {
                    model,
                    reason,
                })),
                Some(fallback),
            ) => {
                events::generation_model_fallback(&model, fallback, &reason);
                let summary = self.transport.complete(&self.request(fallback, passages))?;
                (fallback, summary)
            }
            (Err(e), _) => return Err(e),
        };

        events::summary_generated(model, passages.len(), summary.chars().count());
        Ok(summary)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
