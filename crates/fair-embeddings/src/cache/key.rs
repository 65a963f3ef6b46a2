use fair_core::constants::CACHE_KEY_SEPARATOR;

/// Cache key for `content` embedded under `model_version`: blake3 hex digest.
pub fn cache_key(model_version: &str, content: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(model_version.as_bytes());
    hasher.update(&[CACHE_KEY_SEPARATOR]);
    hasher.update(content.as_bytes());
    hasher.finalize().to_hex().to_string()
}
