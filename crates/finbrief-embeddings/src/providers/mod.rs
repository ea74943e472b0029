//! Provider registry.
//!
//! The configured provider is created once per run. If it cannot be created the
//! TF-IDF provider takes its place before any text is embedded.

pub mod api_provider;
#[cfg(feature = "local-model")]
pub mod fastembed_provider;
pub mod tfidf_fallback;

use std::time::Duration;

pub use api_provider::ApiProvider;
#[cfg(feature = "local-model")]
pub use fastembed_provider::FastEmbedProvider;
pub use tfidf_fallback::TfIdfFallback;

use finbrief_core::config::defaults::DEFAULT_TIMEOUT_SECS;
use finbrief_core::config::EmbeddingConfig;
use finbrief_core::traits::IEmbeddingProvider;
use finbrief_observability::events;
use tracing::info;

/// Create the configured provider, boxed.
///
/// Falls back to [`TfIdfFallback`] when the configured provider is unknown,
/// cannot be created, or reports itself unavailable.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    let created = match config.provider.as_str() {
        "tfidf" => {
            let provider: Box<dyn IEmbeddingProvider> =
                Box::new(TfIdfFallback::new(config.dimensions));
            Ok(provider)
        }
        "fastembed" => create_local(config),
        "api" => create_api(config),
        other => Err(format!("unknown provider '{other}'")),
    };
    match created {
        Ok(provider) => ensure_available(config, provider),
        Err(reason) => fallback(config, &reason),
    }
}

/// Keep `provider` if it can serve requests, otherwise switch to TF-IDF.
fn ensure_available(
    config: &EmbeddingConfig,
    provider: Box<dyn IEmbeddingProvider>,
) -> Box<dyn IEmbeddingProvider> {
    if !provider.is_available() {
        let reason = format!("provider '{}' is unavailable", provider.name());
        return fallback(config, &reason);
    }
    info!(
        provider = provider.name(),
        dimensions = provider.dimensions(),
        "embedding provider selected"
    );
    provider
}

fn create_api(config: &EmbeddingConfig) -> Result<Box<dyn IEmbeddingProvider>, String> {
    let api_key = std::env::var(&config.api_key_env)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| format!("{} is not set", config.api_key_env))?;
    let provider = ApiProvider::new(
        &api_key,
        config.api_endpoint.clone(),
        config.model.clone(),
        config.dimensions,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    )
    .map_err(|e| e.to_string())?;
    Ok(Box::new(provider))
}

#[cfg(feature = "local-model")]
fn create_local(config: &EmbeddingConfig) -> Result<Box<dyn IEmbeddingProvider>, String> {
    let provider = FastEmbedProvider::load(&config.model).map_err(|e| e.to_string())?;
    Ok(Box::new(provider))
}

#[cfg(not(feature = "local-model"))]
fn create_local(_config: &EmbeddingConfig) -> Result<Box<dyn IEmbeddingProvider>, String> {
    Err("built without the local-model feature".to_string())
}

fn fallback(config: &EmbeddingConfig, reason: &str) -> Box<dyn IEmbeddingProvider> {
    events::provider_fallback(&config.provider, "tfidf", reason);
    Box::new(TfIdfFallback::new(config.dimensions))
}
