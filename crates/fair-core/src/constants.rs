/// FAIR system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator byte between model version and content in cache keys.
pub const CACHE_KEY_SEPARATOR: u8 = 0x1f;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "FAIR_";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "FAIR_LOG";

/// Queries with at most this many tokens count as short.
pub const SHORT_QUERY_TOKENS: usize = 5;

/// Queries with at least this many tokens count as long.
pub const LONG_QUERY_TOKENS: usize = 15;

/// Prompt instruction telling the generator how to cite.
pub const CITATION_INSTRUCTION: &str =
    "Cite the sources you rely on inline using their labels, for example [Source 1].";
