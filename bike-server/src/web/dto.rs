//! JSON DTOs for the web API.

use serde::Serialize;

use crate::domain::StationMarker;

/// One marker as served to the map page.
///
/// `position` is a `[lat, lng]` pair, the shape Leaflet consumes directly.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerDto {
    pub key: String,
    pub name: String,
    pub position: [f64; 2],
    pub content: String,
    pub free_bikes: u32,
    pub empty_slots: u32,
}

impl From<&StationMarker> for MarkerDto {
    fn from(marker: &StationMarker) -> Self {
        Self {
            key: marker.key.to_string(),
            name: marker.name.clone(),
            position: [marker.position.lat(), marker.position.lng()],
            content: marker.content.clone(),
            free_bikes: marker.free_bikes,
            empty_slots: marker.empty_slots,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub markers: usize,
    /// RFC 3339 timestamp of the last applied snapshot, if any.
    pub last_applied: Option<String>,
}
