//! Sequential pipeline: extract, clean, chunk, index, retrieve, filter, generate.
//!
//! Each stage consumes the previous stage's output. Generation is optional so
//! a dry run can stop after the executive filter.

use std::path::Path;

use finbrief_core::config::FinbriefConfig;
use finbrief_core::errors::{FinbriefError, FinbriefResult};
use finbrief_core::models::{Passage, RunMetrics};
use finbrief_core::traits::{ISummaryGenerator, IVectorIndex};
use finbrief_embeddings::{EmbeddingEngine, FlatVectorIndex};
use finbrief_ingest::{BoilerplatePatterns, PdfExtractor, RecursiveChunker, TextCleaner};
use finbrief_observability::events;
use finbrief_retrieval::{ExecutiveFilter, ExecutiveSelection, FinancialRetriever};
use serde::Serialize;
use tracing::{info, warn};

/// Cleaned and chunked document text, ready for indexing.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedText {
    /// Pages that contributed text, when the input came from a PDF.
    pub pages: Option<usize>,
    pub raw_chars: usize,
    pub cleaned_chars: usize,
    pub passages: Vec<Passage>,
}

impl PreparedText {
    /// Whether the cleaned text is below `threshold` characters.
    pub fn is_short(&self, threshold: usize) -> bool {
        self.cleaned_chars < threshold
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub metrics: RunMetrics,
    /// Embedding provider that built the index.
    pub provider: String,
    /// Output of the financial retriever, best first.
    pub retrieved: Vec<String>,
    pub selection: ExecutiveSelection,
    /// `None` when no generator was supplied.
    pub summary: Option<String>,
}

pub struct Pipeline {
    config: FinbriefConfig,
    extractor: PdfExtractor,
    cleaner: TextCleaner,
    chunker: RecursiveChunker,
    filter: ExecutiveFilter,
}

impl Pipeline {
    /// Validate `config` and build the stateless stages.
    pub fn new(config: FinbriefConfig) -> FinbriefResult<Self> {
        config.validate()?;
        Ok(Self {
            extractor: PdfExtractor::new(&config.ingest),
            cleaner: TextCleaner::new(BoilerplatePatterns::from_config(&config.ingest)),
            chunker: RecursiveChunker::from_config(&config.ingest)?,
            filter: ExecutiveFilter::new(&config.executive)?,
            config,
        })
    }

    pub fn config(&self) -> &FinbriefConfig {
        &self.config
    }

    /// Extract the PDF at `path` and prepare its text.
    pub fn prepare_document(&self, path: impl AsRef<Path>) -> FinbriefResult<PreparedText> {
        let document = self.extractor.extract(path)?;
        let mut prepared = self.prepare_text(&document.text)?;
        prepared.pages = Some(document.pages);
        Ok(prepared)
    }

    /// Clean and chunk already-extracted text.
    pub fn prepare_text(&self, raw: &str) -> FinbriefResult<PreparedText> {
        if raw.trim().is_empty() {
            return Err(empty("extraction"));
        }
        let raw_chars = raw.chars().count();

        let cleaned = self.cleaner.clean(raw);
        let cleaned_chars = cleaned.chars().count();
        events::text_cleaned(raw_chars, cleaned_chars);
        if cleaned.is_empty() {
            return Err(empty("cleaning"));
        }
        if cleaned_chars < self.config.ingest.short_text_warning_chars {
            warn!(
                cleaned_chars,
                threshold = self.config.ingest.short_text_warning_chars,
                "cleaned text is unusually short"
            );
        }

        let passages = self.chunker.split(&cleaned);
        if passages.is_empty() {
            return Err(empty("chunking"));
        }

        Ok(PreparedText {
            pages: None,
            raw_chars,
            cleaned_chars,
            passages,
        })
    }

    /// Index the prepared passages, rank them, and generate a summary when a
    /// generator is supplied.
    pub fn run(
        &self,
        prepared: PreparedText,
        generator: Option<&dyn ISummaryGenerator>,
    ) -> FinbriefResult<PipelineRun> {
        let mut metrics = RunMetrics::new();
        metrics.raw_chars = prepared.raw_chars;
        metrics.cleaned_chars = prepared.cleaned_chars;
        metrics.passages = prepared.passages.len();

        let engine = EmbeddingEngine::new(&self.config.embedding);
        let index = FlatVectorIndex::build(
            Box::new(engine),
            prepared.passages,
            self.config.embedding.batch_size,
        )?;
        let provider = index.provider_name().to_string();

        let retriever =
            FinancialRetriever::new(Some(&index as &dyn IVectorIndex), &self.config.retrieval);
        let retrieved =
            retriever.retrieve_financial(&self.config.retrieval.query, self.config.retrieval.top_k)?;
        metrics.retrieved = retrieved.len();

        let selection = self.filter.select(
            &retrieved,
            self.config.executive.min_score,
            self.config.executive.max_chunks,
        );
        metrics.executive = selection.passages.len();
        metrics.fallback_used = selection.fallback_used;

        let summary = match generator {
            Some(generator) => Some(generator.generate(&selection.passages)?),
            None => {
                info!(run_id = %metrics.run_id, "dry run, skipping generation");
                None
            }
        };

        Ok(PipelineRun {
            metrics,
            provider,
            retrieved,
            selection,
            summary,
        })
    }

    /// [`prepare_document`](Self::prepare_document) followed by [`run`](Self::run).
    pub fn run_document(
        &self,
        path: impl AsRef<Path>,
        generator: Option<&dyn ISummaryGenerator>,
    ) -> FinbriefResult<PipelineRun> {
        let prepared = self.prepare_document(path)?;
        self.run(prepared, generator)
    }

    /// [`prepare_text`](Self::prepare_text) followed by [`run`](Self::run).
    pub fn run_text(
        &self,
        raw: &str,
        generator: Option<&dyn ISummaryGenerator>,
    ) -> FinbriefResult<PipelineRun> {
        let prepared = self.prepare_text(raw)?;
        self.run(prepared, generator)
    }
}

fn empty(stage: &str) -> FinbriefError {
    FinbriefError::EmptyContent {
        stage: stage.to_string(),
    }
}
