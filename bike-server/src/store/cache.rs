//! Disk-based cache for the last fetched snapshot.
//!
//! A restarted process seeds its marker store from this cache so the map is
//! not empty while waiting for the first live fetch. The cached payload is
//! the *raw* station array; it goes back through `apply_snapshot` like any
//! other snapshot.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SnapshotError;

/// Default cache TTL: 10 minutes.
///
/// Live availability goes stale quickly; an old snapshot is worse than a
/// briefly empty map.
const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Cached snapshot with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct CachedSnapshot {
    /// Unix timestamp when the cache was written.
    cached_at_secs: u64,
    /// The raw station array.
    stations: Value,
}

/// Configuration for the snapshot disk cache.
#[derive(Debug, Clone)]
pub struct SnapshotCacheConfig {
    /// Path to the cache file.
    pub path: PathBuf,
    /// How long the cache remains valid.
    pub ttl: Duration,
}

impl SnapshotCacheConfig {
    /// Create a new cache config with the given path and default TTL (10 minutes).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for SnapshotCacheConfig {
    fn default() -> Self {
        // Default to a cache file in the current directory
        Self::new("stations_snapshot.json")
    }
}

/// Disk cache for the last raw station snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    config: SnapshotCacheConfig,
}

impl SnapshotCache {
    /// Create a new snapshot cache with the given config.
    pub fn new(config: SnapshotCacheConfig) -> Self {
        Self { config }
    }

    /// Try to load the cached snapshot.
    ///
    /// Returns `None` if the cache doesn't exist, is invalid, or has expired.
    pub fn load(&self) -> Option<Value> {
        let contents = std::fs::read_to_string(&self.config.path).ok()?;
        let cached: CachedSnapshot = serde_json::from_str(&contents).ok()?;

        // Check if cache has expired
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()?
            .as_secs();

        let age_secs = now.saturating_sub(cached.cached_at_secs);
        if age_secs >= self.config.ttl.as_secs() {
            return None;
        }

        Some(cached.stations)
    }

    /// Save a raw station snapshot to the cache.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, stations: &Value) -> Result<(), SnapshotError> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| SnapshotError::Cache {
                message: "system time before unix epoch".to_string(),
            })?
            .as_secs();

        let cached = CachedSnapshot {
            cached_at_secs: now,
            stations: stations.clone(),
        };

        // Create parent directories if needed
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SnapshotError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string(&cached).map_err(|e| SnapshotError::Cache {
            message: format!("failed to serialize cache: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| SnapshotError::Cache {
            message: format!("failed to write cache file: {}", e),
        })?;

        Ok(())
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Get the cache TTL.
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }
}
