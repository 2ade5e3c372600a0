//! The marker store.
//!
//! Owns the current keyed collection of station markers. Every accepted
//! snapshot replaces the whole collection atomically under a write lock;
//! readers either see the previous snapshot or the new one, never a mix.

mod cache;

pub use cache::{SnapshotCache, SnapshotCacheConfig};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::{RwLock, watch};

use crate::domain::{StationKey, StationMarker};
use crate::feed::normalize_all;

/// Errors from applying a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The payload was not a JSON array. The store is left untouched.
    #[error("snapshot payload is not an array")]
    InvalidShape,

    /// Disk cache read/write failure.
    #[error("snapshot cache error: {message}")]
    Cache { message: String },
}

/// Counts reported by one `apply_snapshot` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Markers retained after validation and deduplication.
    pub accepted: usize,
    /// Records dropped: undecodable, failed validation, or duplicate-keyed.
    pub rejected: usize,
}

#[derive(Debug, Default)]
struct StoreState {
    markers: Vec<StationMarker>,
    applied_at: Option<DateTime<Utc>>,
    generation: u64,
}

/// Keyed, ordered collection of the currently displayed markers.
///
/// Single writer (the feed refresh path), many readers (the web layer).
/// Created empty; there is no partial-update API, only whole-snapshot
/// replacement.
#[derive(Debug)]
pub struct MarkerStore {
    state: RwLock<StoreState>,
    notify: watch::Sender<u64>,
}

impl MarkerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            state: RwLock::new(StoreState::default()),
            notify,
        }
    }

    /// Validate a raw snapshot payload and replace the store's contents.
    ///
    /// The payload must be a JSON array of station records; anything else
    /// fails with [`SnapshotError::InvalidShape`] and leaves the current
    /// collection untouched. Individual records that fail validation are
    /// silently dropped and counted, never surfaced as errors. An empty
    /// array is a valid snapshot that clears every marker.
    pub async fn apply_snapshot(&self, payload: &Value) -> Result<ApplyOutcome, SnapshotError> {
        let elements = payload.as_array().ok_or(SnapshotError::InvalidShape)?;

        let snapshot = normalize_all(elements);
        let before_dedup = snapshot.markers.len();
        let markers = dedup_last_wins(snapshot.markers);
        let duplicates = before_dedup - markers.len();

        let outcome = ApplyOutcome {
            accepted: markers.len(),
            rejected: snapshot.rejected + duplicates,
        };

        let generation = {
            let mut state = self.state.write().await;
            state.markers = markers;
            state.applied_at = Some(Utc::now());
            state.generation += 1;
            state.generation
        };

        // Receivers may all be gone; that's fine.
        let _ = self.notify.send(generation);

        tracing::debug!(
            accepted = outcome.accepted,
            rejected = outcome.rejected,
            generation,
            "applied station snapshot"
        );

        Ok(outcome)
    }

    /// The markers as of the last completed `apply_snapshot`, in snapshot
    /// order.
    pub async fn current_markers(&self) -> Vec<StationMarker> {
        let state = self.state.read().await;
        state.markers.clone()
    }

    /// Number of markers currently held.
    pub async fn len(&self) -> usize {
        let state = self.state.read().await;
        state.markers.len()
    }

    /// Whether the store holds no markers.
    pub async fn is_empty(&self) -> bool {
        let state = self.state.read().await;
        state.markers.is_empty()
    }

    /// When the last snapshot was applied, if any.
    pub async fn last_applied(&self) -> Option<DateTime<Utc>> {
        let state = self.state.read().await;
        state.applied_at
    }

    /// Subscribe to snapshot notifications.
    ///
    /// The channel carries a generation counter that increments once per
    /// applied snapshot; consumers await changes and then re-read
    /// `current_markers`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop earlier occurrences of duplicate keys.
///
/// The retained marker keeps the position of its last occurrence, as if the
/// earlier ones had never arrived.
fn dedup_last_wins(markers: Vec<StationMarker>) -> Vec<StationMarker> {
    let mut seen: HashSet<StationKey> = HashSet::with_capacity(markers.len());

    let mut deduped: Vec<StationMarker> = markers
        .into_iter()
        .rev()
        .filter(|marker| seen.insert(marker.key.clone()))
        .collect();

    deduped.reverse();
    deduped
}
