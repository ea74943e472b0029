//! Local sentence-embedding provider backed by fastembed (ONNX Runtime).

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use finbrief_core::errors::{EmbeddingError, FinbriefResult};
use finbrief_core::traits::IEmbeddingProvider;
use tracing::info;

/// Map a model name to its fastembed variant and output width.
fn resolve_model(name: &str) -> Option<(EmbeddingModel, usize)> {
    match name.to_ascii_lowercase().as_str() {
        "all-minilm-l6-v2" => Some((EmbeddingModel::AllMiniLML6V2, 384)),
        "all-minilm-l12-v2" => Some((EmbeddingModel::AllMiniLML12V2, 384)),
        "bge-small-en-v1.5" => Some((EmbeddingModel::BGESmallENV15, 384)),
        "bge-base-en-v1.5" => Some((EmbeddingModel::BGEBaseENV15, 768)),
        _ => None,
    }
}

pub struct FastEmbedProvider {
    // fastembed needs exclusive access while running a batch.
    model: Mutex<TextEmbedding>,
    name: String,
    dimensions: usize,
}

impl FastEmbedProvider {
    /// Load (downloading on first use) the named model.
    pub fn load(model_name: &str) -> FinbriefResult<Self> {
        let (variant, dimensions) =
            resolve_model(model_name).ok_or_else(|| EmbeddingError::ModelLoadFailed {
                model: model_name.to_string(),
                reason: "unsupported local model".to_string(),
            })?;

        let model = TextEmbedding::try_new(
            InitOptions::new(variant).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            model: model_name.to_string(),
            reason: e.to_string(),
        })?;

        info!(model = model_name, dimensions, "local embedding model loaded");
        Ok(Self {
            model: Mutex::new(model),
            name: model_name.to_string(),
            dimensions,
        })
    }
}

impl IEmbeddingProvider for FastEmbedProvider {
    fn embed(&self, text: &str) -> FinbriefResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "model returned no embedding".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> FinbriefResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let mut model = self
            .model
            .lock()
            .map_err(|_| EmbeddingError::ProviderUnavailable {
                provider: self.name.clone(),
            })?;
        model
            .embed(texts.to_vec(), None)
            .map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
