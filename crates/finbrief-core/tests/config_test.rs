use finbrief_core::config::*;
use finbrief_core::errors::{ConfigError, FinbriefError};
use std::io::Write;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = FinbriefConfig::from_toml("").unwrap();

    // Ingest defaults
    assert_eq!(config.ingest.chunk_size, 4000);
    assert_eq!(config.ingest.chunk_overlap, 500);
    assert_eq!(config.ingest.min_line_chars, 20);
    assert_eq!(config.ingest.header_lines.len(), 1);
    assert!(config.ingest.header_lines[0].starts_with("TO OUR GROUP MANAGEMENT REPORT"));
    assert!(!config.ingest.skip_blank_pages);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "fastembed");
    assert_eq!(config.embedding.model, "all-MiniLM-L6-v2");
    assert_eq!(config.embedding.dimensions, 384);

    // Retrieval defaults
    assert_eq!(config.retrieval.top_k, 10);
    assert_eq!(config.retrieval.over_fetch_factor, 2);
    assert!(config.retrieval.query.contains("Operating profit"));

    // Executive defaults
    assert_eq!(config.executive.min_score, 20);
    assert_eq!(config.executive.max_chunks, 5);
    assert_eq!(config.executive.fallback_count, 3);
    assert_eq!(config.executive.header_penalty, "TO OUR GROUP MANAGEMENT REPORT");

    // Generation defaults
    assert_eq!(config.generation.model, "llama-3.3-70b-versatile");
    assert_eq!(
        config.generation.fallback_model.as_deref(),
        Some("mixtral-8x7b-32768")
    );
    assert_eq!(config.generation.max_tokens, 1500);
    assert_eq!(config.generation.api_key_env, "GROQ_API_KEY");

    // Output and observability defaults
    assert_eq!(config.output.path, "executive_summary.txt");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[ingest]
chunk_size = 1000
chunk_overlap = 100

[executive]
min_score = 50
"#;
    let config = FinbriefConfig::from_toml(toml).unwrap();
    assert_eq!(config.ingest.chunk_size, 1000);
    assert_eq!(config.ingest.chunk_overlap, 100);
    // Non-overridden fields keep defaults
    assert_eq!(config.ingest.min_line_chars, 20);
    assert_eq!(config.executive.min_score, 50);
    assert_eq!(config.executive.max_chunks, 5);
    assert_eq!(config.retrieval.top_k, 10);
}

#[test]
fn config_serde_roundtrip() {
    let config = FinbriefConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = FinbriefConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.ingest.chunk_size, config.ingest.chunk_size);
    assert_eq!(roundtripped.retrieval.query, config.retrieval.query);
    assert_eq!(
        roundtripped.executive.table_pattern,
        config.executive.table_pattern
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = FinbriefConfig::from_toml("[ingest\nchunk_size = ").unwrap_err();
    assert!(matches!(
        err,
        FinbriefError::ConfigError(ConfigError::Parse { .. })
    ));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[retrieval]\ntop_k = 4").unwrap();
    let config = FinbriefConfig::from_file(file.path()).unwrap();
    assert_eq!(config.retrieval.top_k, 4);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = FinbriefConfig::from_file("/nonexistent/finbrief.toml").unwrap_err();
    assert!(matches!(
        err,
        FinbriefError::ConfigError(ConfigError::Read { .. })
    ));
}

#[test]
fn defaults_validate() {
    FinbriefConfig::default().validate().unwrap();
}

#[test]
fn overlap_larger_than_chunk_size_is_rejected() {
    let mut config = FinbriefConfig::default();
    config.ingest.chunk_size = 100;
    config.ingest.chunk_overlap = 101;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ingest.chunk_overlap"));
}

#[test]
fn zero_top_k_is_rejected() {
    let mut config = FinbriefConfig::default();
    config.retrieval.top_k = 0;
    assert!(config.validate().is_err());
}

#[test]
fn blank_query_is_rejected() {
    let mut config = FinbriefConfig::default();
    config.retrieval.query = " \n ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("retrieval.query"));
}

#[test]
fn invalid_table_pattern_is_rejected() {
    let mut config = FinbriefConfig::default();
    config.executive.table_pattern = r"\d{4".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("executive.table_pattern"));
}
