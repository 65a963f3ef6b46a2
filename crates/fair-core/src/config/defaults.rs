//! Compiled defaults for every tunable.

// Embeddings
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_MODEL: &str = "hashed-tfidf-v1";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;

// Retrieval
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.7;
pub const DEFAULT_CURATED_BOOST: f64 = 1.2;
pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;
pub const DEFAULT_MAX_FETCHED: usize = 3;

// Expansion
pub const DEFAULT_QUERY_EXPANSION: bool = true;
pub const DEFAULT_MAX_EXPANSION_TERMS: usize = 8;

// Quality
pub const DEFAULT_RECENCY_DECAY_PER_YEAR: f64 = 0.2;
pub const DEFAULT_RECENCY_FLOOR: f64 = 0.6;
pub const DEFAULT_UNDATED_RECENCY: f64 = 1.0;
pub const DEFAULT_DENSITY_MIN: f64 = 0.8;
pub const DEFAULT_DENSITY_MAX: f64 = 1.2;
pub const DEFAULT_DENSITY_SATURATION: usize = 5;
pub const DEFAULT_QUALITY_CAP_FACTOR: f64 = 1.2;

pub const WEIGHT_CLINICAL_GUIDELINE: f64 = 1.20;
pub const WEIGHT_ACADEMIC_RESEARCH: f64 = 1.15;
pub const WEIGHT_MEDICAL_REFERENCE: f64 = 1.10;
pub const WEIGHT_REGULATORY_GUIDANCE: f64 = 1.10;
pub const WEIGHT_FINANCIAL_EDUCATION: f64 = 1.05;
pub const WEIGHT_GENERAL: f64 = 1.00;

// Threshold
pub const THRESHOLD_FINANCE: f64 = 0.30;
pub const THRESHOLD_MEDICAL: f64 = 0.35;
pub const THRESHOLD_CROSS_DOMAIN: f64 = 0.30;
pub const THRESHOLD_UNKNOWN: f64 = 0.25;
pub const DEFAULT_LENGTH_ADJUSTMENT: f64 = 0.05;
pub const DEFAULT_TECHNICAL_DENSITY_LEVEL: f64 = 0.3;
pub const DEFAULT_TECHNICAL_ADJUSTMENT: f64 = 0.05;
pub const DEFAULT_THRESHOLD_MIN: f64 = 0.15;
pub const DEFAULT_THRESHOLD_MAX: f64 = 0.50;
pub const DEFAULT_RELAXATION_STEP: f64 = 0.05;
pub const DEFAULT_RELAXATION_FLOOR: f64 = 0.0;

// Diversity
pub const DEFAULT_MMR_LAMBDA: f64 = 0.7;
pub const DEFAULT_MAX_SOURCES: usize = 5;

// Calibration
pub const DEFAULT_BASE_MIN: f64 = 0.2;
pub const DEFAULT_BASE_MAX: f64 = 0.5;
pub const DEFAULT_BASE_START: f64 = 0.30;
pub const DEFAULT_EVIDENCE_WEIGHT: f64 = 0.25;
pub const DEFAULT_EVIDENCE_TARGET: usize = 5;
pub const DEFAULT_EVIDENCE_CAP: f64 = 0.35;
pub const DEFAULT_FETCHED_BONUS_PER_SOURCE: f64 = 0.05;
pub const DEFAULT_FETCHED_BONUS_CAP: f64 = 0.15;
pub const DEFAULT_REASONING_WEIGHT: f64 = 0.15;
pub const DEFAULT_REASONING_TARGET: usize = 5;
pub const DEFAULT_REASONING_CAP: f64 = 0.15;
pub const DEFAULT_SAFETY_WEIGHT: f64 = 0.10;
pub const DEFAULT_SAFETY_CAP: f64 = 0.10;
pub const DEFAULT_VALIDATION_MIN: f64 = -0.3;
pub const DEFAULT_VALIDATION_MAX: f64 = 0.1;
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.10;
pub const DEFAULT_CONFIDENCE_CEILING: f64 = 0.95;
pub const DEFAULT_QUALITY_SCALING: bool = true;
pub const DEFAULT_QUALITY_REFERENCE_BOOST: f64 = 0.15;
pub const DEFAULT_REQUIRE_EVIDENCE: bool = true;

// Generation
pub const DEFAULT_GENERATION_MODEL: &str = "llama3.2";
pub const DEFAULT_GENERATION_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 30_000;
