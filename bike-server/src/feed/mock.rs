//! Mock feed client for development without network access.
//!
//! Serves a station snapshot from a local JSON file as if it came from the
//! live API. The file may hold either a bare station array or a full
//! network response envelope.

use std::path::Path;

use serde_json::Value;

use super::client::extract_stations;
use super::error::FeedError;

/// Mock feed client backed by a JSON file.
#[derive(Debug, Clone)]
pub struct MockFeedClient {
    stations: Value,
}

impl MockFeedClient {
    /// Load a snapshot file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| FeedError::Api {
            status: 0,
            message: format!("failed to read mock data {:?}: {}", path, e),
        })?;

        let parsed: Value = serde_json::from_str(&contents).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: None,
        })?;

        let stations = extract_stations(parsed)?;

        Ok(Self { stations })
    }

    /// Return the loaded snapshot.
    ///
    /// Mimics `CityBikesClient::fetch_stations`; mock data is static.
    pub async fn fetch_stations(&self) -> Result<Value, FeedError> {
        Ok(self.stations.clone())
    }
}
