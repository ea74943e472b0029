// Single source of truth for all default values.

// --- Ingest ---
pub const DEFAULT_CHUNK_SIZE: usize = 4_000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 500;
pub const DEFAULT_MIN_LINE_CHARS: usize = 20;
pub const DEFAULT_SKIP_BLANK_PAGES: bool = false;
pub const DEFAULT_SHORT_TEXT_WARNING_CHARS: usize = 50_000;
pub const DEFAULT_HEADER_LINE: &str = "TO OUR GROUP MANAGEMENT REPORT – GROUP MANAGEMENT REPORT – GROUP MANAGEMENT REPORT – CONSOLIDATED ADDITIONAL";
pub const DEFAULT_BANNER_LINE: &str = "SHAREHOLDERS OUR COMPANY FINANCIAL REVIEW SUSTAINABILITY STATEMENT FINANCIAL STATEMENTS INFORMATION";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 1_024;
pub const DEFAULT_EMBEDDING_API_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_API_KEY_ENV: &str = "OPENAI_API_KEY";

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_OVER_FETCH_FACTOR: usize = 2;
pub const DEFAULT_FINANCIAL_QUERY: &str = "Financial results 2024 vs 2023:
Operating profit, Revenue, Sales, Net income, EBITDA,
Gross margin, Operating margin, Cash flow,
Segment performance (Footwear, Apparel, Accessories),
Regional results (North America, EMEA, Asia-Pacific),
Financial guidance 2025,
Risks mentioned, Opportunities mentioned.";

// --- Executive filter ---
pub const DEFAULT_MIN_EXECUTIVE_SCORE: i32 = 20;
pub const DEFAULT_MAX_EXECUTIVE_CHUNKS: usize = 5;
pub const DEFAULT_FALLBACK_COUNT: usize = 3;
pub const DEFAULT_TABLE_PATTERN: &str = r"\d{4}\s+\d{4}\s+\d{4}\s+\d{4}";
pub const DEFAULT_HEADER_PENALTY: &str = "TO OUR GROUP MANAGEMENT REPORT";

// --- Generation ---
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_FALLBACK_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: usize = 1_500;
pub const DEFAULT_GENERATION_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// --- Output ---
pub const DEFAULT_OUTPUT_PATH: &str = "executive_summary.txt";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
