//! The marker view model.

use super::{LatLng, StationKey};

/// A display-ready bike station, decoupled from the raw upstream shape.
///
/// Produced by the feed normalizer; the web layer consumes these without
/// further validation. `name` and `content` may be empty strings when the
/// upstream record omitted them; the counts default to 0 when the upstream
/// values were absent or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    /// Unique key within a snapshot.
    pub key: StationKey,

    /// Human-readable station name. May be empty.
    pub name: String,

    /// Marker position on the map.
    pub position: LatLng,

    /// Popup content (typically the street address). May be empty.
    pub content: String,

    /// Bikes currently available for hire.
    pub free_bikes: u32,

    /// Empty docking slots available for returns.
    pub empty_slots: u32,
}
