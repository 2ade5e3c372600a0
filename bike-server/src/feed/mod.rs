//! Station feed: upstream client, DTOs, and normalization.
//!
//! The feed delivers full snapshots, never deltas: every fetch returns the
//! complete station list for the configured network, and the marker store
//! replaces its contents wholesale with each one. Individual records carry
//! no schema guarantees, so [`convert`] is the sole validation gate.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{CityBikesClient, CityBikesConfig};
pub use convert::{NormalizedSnapshot, RejectReason, normalize, normalize_all};
pub use error::FeedError;
pub use mock::MockFeedClient;
pub use types::{RawExtra, RawStation};

use serde_json::Value;

/// A snapshot source: either the live API or a local mock file.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Live(CityBikesClient),
    Mock(MockFeedClient),
}

impl FeedSource {
    /// Fetch the current full station snapshot.
    pub async fn fetch_stations(&self) -> Result<Value, FeedError> {
        match self {
            FeedSource::Live(client) => client.fetch_stations().await,
            FeedSource::Mock(client) => client.fetch_stations().await,
        }
    }
}
