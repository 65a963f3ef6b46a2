//! L2 SQLite-backed embedding cache.
//!
//! Persists `cache_key -> vector` rows plus the model version that produced
//! them. Opening with a different model version discards every row.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fair_core::errors::CacheError;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::model_version::{detect_model_change, DetectionResult};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS cache_meta (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS embeddings (
        content_hash TEXT PRIMARY KEY,
        dims         INTEGER NOT NULL,
        vector       BLOB NOT NULL
    );
";

const MODEL_VERSION_KEY: &str = "model_version";

/// L2 persistent embedding cache backed by a SQLite connection.
pub struct L2SqliteCache {
    conn: Mutex<Connection>,
    persistent: bool,
    detection: DetectionResult,
}

impl L2SqliteCache {
    /// Open (or create) a cache file stamped with `model_version`.
    pub fn open(path: &Path, model_version: &str) -> Result<Self, CacheError> {
        let conn = Connection::open(path).map_err(|e| CacheError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let detection = prepare(&conn, model_version).map_err(|e| CacheError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
            persistent: true,
            detection,
        })
    }

    /// Cache that lives only as long as the process.
    pub fn open_in_memory(model_version: &str) -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory().map_err(|e| CacheError::OpenFailed {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        let detection = prepare(&conn, model_version).map_err(|e| CacheError::OpenFailed {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
            persistent: false,
            detection,
        })
    }

    /// Look up a vector. A row that does not decode is reported as corrupt.
    pub fn get(&self, key: &str) -> Result<Option<Vec<f32>>, CacheError> {
        let conn = self.lock();
        let row: Option<(i64, Vec<u8>)> = conn
            .query_row(
                "SELECT dims, vector FROM embeddings WHERE content_hash = ?1",
                params![key],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()
            .map_err(|e| CacheError::ReadFailed {
                reason: e.to_string(),
            })?;

        match row {
            None => Ok(None),
            Some((dims, bytes)) => decode(&bytes, dims)
                .map(Some)
                .map_err(|reason| CacheError::CorruptEntry {
                    key: key.to_string(),
                    reason,
                }),
        }
    }

    /// Store a vector, replacing any previous row for `key`.
    pub fn insert(&self, key: &str, embedding: &[f32]) -> Result<(), CacheError> {
        let bytes: Vec<u8> = embedding.iter().flat_map(|f| f.to_le_bytes()).collect();
        let conn = self.lock();
        conn.execute(
            "INSERT OR REPLACE INTO embeddings (content_hash, dims, vector) VALUES (?1, ?2, ?3)",
            params![key, embedding.len() as i64, bytes],
        )
        .map_err(|e| CacheError::WriteFailed {
            reason: e.to_string(),
        })?;
        debug!(key, dims = embedding.len(), "L2 cache insert");
        Ok(())
    }

    pub fn len(&self) -> usize {
        let conn = self.lock();
        conn.query_row("SELECT COUNT(*) FROM embeddings", [], |r| r.get::<_, i64>(0))
            .map(|n| n as usize)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every cached vector. The model version stamp is kept.
    pub fn clear(&self) -> Result<(), CacheError> {
        let conn = self.lock();
        conn.execute("DELETE FROM embeddings", [])
            .map(|_| ())
            .map_err(|e| CacheError::WriteFailed {
                reason: e.to_string(),
            })
    }

    /// Model version currently stamped in the cache.
    pub fn stored_model_version(&self) -> Option<String> {
        let conn = self.lock();
        read_model_version(&conn).ok().flatten()
    }

    /// What happened to existing rows when the cache was opened.
    pub fn detection(&self) -> &DetectionResult {
        &self.detection
    }

    /// Whether rows survive the process.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create tables and reconcile the stored model version.
fn prepare(conn: &Connection, model_version: &str) -> rusqlite::Result<DetectionResult> {
    conn.execute_batch(SCHEMA)?;
    let stored = read_model_version(conn)?;
    let detection = detect_model_change(stored.as_deref(), model_version);
    match detection {
        DetectionResult::NoChange => {}
        DetectionResult::FirstRun | DetectionResult::Invalidated { .. } => {
            conn.execute("DELETE FROM embeddings", [])?;
            conn.execute(
                "INSERT OR REPLACE INTO cache_meta (key, value) VALUES (?1, ?2)",
                params![MODEL_VERSION_KEY, model_version],
            )?;
        }
    }
    Ok(detection)
}

fn read_model_version(conn: &Connection) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM cache_meta WHERE key = ?1",
        params![MODEL_VERSION_KEY],
        |r| r.get(0),
    )
    .optional()
}

fn decode(bytes: &[u8], dims: i64) -> Result<Vec<f32>, String> {
    if bytes.len() % 4 != 0 {
        return Err(format!("blob length {} is not a multiple of 4", bytes.len()));
    }
    let n = bytes.len() / 4;
    if dims < 0 || n != dims as usize {
        return Err(format!("blob holds {n} floats, row says {dims}"));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let cache = L2SqliteCache::open_in_memory("m:1").unwrap();
        let embedding = vec![1.0f32, 2.5, -3.7, 0.0];
        cache.insert("deadbeef", &embedding).unwrap();
        assert_eq!(cache.get("deadbeef").unwrap(), Some(embedding));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn miss_returns_none() {
        let cache = L2SqliteCache::open_in_memory("m:1").unwrap();
        assert!(cache.get("missing").unwrap().is_none());
    }

    #[test]
    fn fresh_cache_is_first_run() {
        let cache = L2SqliteCache::open_in_memory("m:1").unwrap();
        assert_eq!(cache.detection(), &DetectionResult::FirstRun);
        assert_eq!(cache.stored_model_version().as_deref(), Some("m:1"));
        assert!(!cache.is_persistent());
    }

    #[test]
    fn decode_rejects_ragged_blob() {
        assert!(decode(&[0, 0, 0, 0, 0xFF], 1).is_err());
        assert!(decode(&[0, 0, 0, 0], 2).is_err());
        assert_eq!(decode(&1.5f32.to_le_bytes(), 1).unwrap(), vec![1.5]);
    }

    #[test]
    fn clear_keeps_version() {
        let cache = L2SqliteCache::open_in_memory("m:1").unwrap();
        cache.insert("a", &[1.0]).unwrap();
        cache.clear().unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.stored_model_version().as_deref(), Some("m:1"));
    }
}
