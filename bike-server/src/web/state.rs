//! Application state for the web layer.

use std::sync::Arc;

use crate::store::MarkerStore;

/// Initial map view settings for the page template.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial map center latitude.
    pub center_lat: f64,
    /// Initial map center longitude.
    pub center_lng: f64,
    /// Initial zoom level.
    pub zoom: u8,
    /// How often the page re-polls the marker API, in seconds.
    pub refresh_secs: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Downtown Miami
        Self {
            center_lat: 25.7723312,
            center_lng: -80.1813103,
            zoom: 7,
            refresh_secs: 30,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The marker store fed by the snapshot refresh task
    pub store: Arc<MarkerStore>,

    /// Map view settings
    pub map: Arc<MapConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: Arc<MarkerStore>, map: MapConfig) -> Self {
        Self {
            store,
            map: Arc::new(map),
        }
    }
}
