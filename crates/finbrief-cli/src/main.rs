use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use finbrief_cli::{output, report, Pipeline};
use finbrief_core::config::FinbriefConfig;
use finbrief_core::constants::{BANNER_WIDTH, SUMMARY_TITLE};
use finbrief_core::traits::ISummaryGenerator;
use finbrief_core::FinbriefError;
use finbrief_generation::ChatSummaryGenerator;
use finbrief_observability::init_tracing;

#[derive(Parser, Debug)]
#[command(
    name = "finbrief",
    version,
    about = "Generate a CFO-level executive summary from an annual report PDF"
)]
struct Cli {
    /// Annual report to summarize
    pdf: PathBuf,

    /// TOML configuration file; flags below override its values
    #[arg(long, env = "FINBRIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the summary artifact
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum passage length in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared by consecutive passages
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Embedding provider (tfidf, fastembed or api)
    #[arg(long, env = "FINBRIEF_EMBEDDING_PROVIDER")]
    embedding_provider: Option<String>,

    /// Embedding model name for the local or api provider
    #[arg(long)]
    embedding_model: Option<String>,

    /// Passages returned by the financial retriever
    #[arg(long)]
    top_k: Option<usize>,

    /// Minimum executive score a passage needs to be selected
    #[arg(long, allow_negative_numbers = true)]
    min_score: Option<i32>,

    /// Maximum passages handed to the summary generator
    #[arg(long)]
    max_chunks: Option<usize>,

    /// Also write the run metrics as JSON to this file
    #[arg(long)]
    metrics_json: Option<PathBuf>,

    /// Print the selected passages and skip the model call
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl Cli {
    fn load_config(&self) -> Result<FinbriefConfig> {
        let mut config = match &self.config {
            Some(path) => FinbriefConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => FinbriefConfig::default(),
        };

        if let Some(v) = self.chunk_size {
            config.ingest.chunk_size = v;
        }
        if let Some(v) = self.chunk_overlap {
            config.ingest.chunk_overlap = v;
        }
        if let Some(v) = &self.embedding_provider {
            config.embedding.provider = v.clone();
        }
        if let Some(v) = &self.embedding_model {
            config.embedding.model = v.clone();
        }
        if let Some(v) = self.top_k {
            config.retrieval.top_k = v;
        }
        if let Some(v) = self.min_score {
            config.executive.min_score = v;
        }
        if let Some(v) = self.max_chunks {
            config.executive.max_chunks = v;
        }
        if let Some(v) = &self.output {
            config.output.path = v.display().to_string();
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.observability);

    if !cli.pdf.exists() {
        bail!("[ERROR] PDF not found: {}", cli.pdf.display());
    }

    println!("\n{}", report::banner("EXECUTIVE SUMMARY AGENT"));

    let generator = if cli.dry_run {
        None
    } else {
        Some(
            ChatSummaryGenerator::from_env(&config.generation)
                .map_err(|e| with_config_hint(e, &config))?,
        )
    };

    let short_text_chars = config.ingest.short_text_warning_chars;
    let output_path = config.output.path.clone();
    let pipeline = Pipeline::new(config)?;

    let prepared = pipeline
        .prepare_document(&cli.pdf)
        .with_context(|| format!("preparing {}", cli.pdf.display()))?;
    println!("{}", report::ingest_summary(&prepared, short_text_chars));

    let run = pipeline
        .run(
            prepared,
            generator.as_ref().map(|g| g as &dyn ISummaryGenerator),
        )
        .map_err(|e| with_config_hint(e, pipeline.config()))?;
    println!(
        "{}",
        report::filter_diagnostics(&run.selection, run.retrieved.len())
    );

    match &run.summary {
        Some(summary) => {
            println!("\n{}", report::banner(SUMMARY_TITLE));
            println!("{summary}");
            println!("\n{}", "=".repeat(BANNER_WIDTH));

            output::write_summary(&output_path, summary)
                .with_context(|| format!("writing {output_path}"))?;
            println!("[INFO] Summary saved to: {output_path}");
        }
        None => {
            println!("\n{}", report::banner("SELECTED PASSAGES (DRY RUN)"));
            for (i, passage) in run.selection.passages.iter().enumerate() {
                println!("\n--- passage {} ---\n{passage}", i + 1);
            }
        }
    }

    if let Some(path) = &cli.metrics_json {
        let json = serde_json::to_string_pretty(&run.metrics)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing metrics to {}", path.display()))?;
    }

    println!("\n{}", report::process_metrics(&run.metrics));
    Ok(())
}

/// Generation failures get a pointer to the settings that usually cause them.
fn with_config_hint(err: FinbriefError, config: &FinbriefConfig) -> anyhow::Error {
    match err {
        FinbriefError::GenerationError(_) => anyhow::Error::new(err).context(format!(
            "summary generation failed; check {} and the [generation] endpoint and model ({})",
            config.generation.api_key_env, config.generation.model
        )),
        other => anyhow::Error::new(other),
    }
}
