//! Upstream station feed DTOs.
//!
//! These types map to the station objects in a CityBikes-style network
//! response. Every field is effectively optional: the upstream imposes no
//! schema, so decoding is the lenient half of validation. The display counts
//! use custom decoders that accept any JSON value and clamp anything that is
//! not a non-negative number to 0, because those fields are advisory display
//! data and a malformed count should never cost us the whole station.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One raw station record, as delivered by the feed.
///
/// No invariants hold here; `feed::convert::normalize` is the gate that
/// turns this into a trusted [`crate::domain::StationMarker`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStation {
    /// Opaque station identifier. Missing or empty ids are grounds for
    /// rejection during normalization.
    pub id: Option<String>,

    /// Display name. Absent or non-string values become the empty string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Latitude in degrees. Range checking happens during normalization.
    pub latitude: Option<f64>,

    /// Longitude in degrees. Range checking happens during normalization.
    pub longitude: Option<f64>,

    /// Free-form metadata bag. Only the address is used.
    #[serde(default, deserialize_with = "lenient_extra")]
    pub extra: RawExtra,

    /// Bikes available. Clamped to 0 when absent, non-numeric, or negative.
    #[serde(default, deserialize_with = "lenient_count")]
    pub free_bikes: u32,

    /// Empty docking slots. Clamped like `free_bikes`.
    #[serde(default, deserialize_with = "lenient_count")]
    pub empty_slots: u32,

    /// Upstream timestamp for this record. Informational only.
    pub timestamp: Option<String>,
}

/// The `extra` metadata object attached to a station.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExtra {
    /// Street address shown in the marker popup.
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
}

/// Decode a display count from any JSON value.
///
/// Non-negative numbers are truncated to an integer; everything else
/// (null, strings, negatives, objects) decodes to 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let count = match &value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.min(u64::from(u32::MAX)) as u32
            } else if let Some(f) = n.as_f64() {
                // Covers negative integers (as_u64 fails) and floats.
                if f.is_finite() && f > 0.0 {
                    f.min(f64::from(u32::MAX)) as u32
                } else {
                    0
                }
            } else {
                0
            }
        }
        _ => 0,
    };

    Ok(count)
}

/// Decode a string field, treating any non-string value as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Decode the `extra` object, treating any non-object value as absent.
fn lenient_extra<'de, D>(deserializer: D) -> Result<RawExtra, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_station() {
        let json = r#"{
            "id": "6d5c0e3f00c6b1c9",
            "name": "Bayfront Park A",
            "latitude": 25.7723312,
            "longitude": -80.1813103,
            "extra": {"address": "100 Biscayne Blvd", "uid": "245"},
            "free_bikes": 5,
            "empty_slots": 3,
            "timestamp": "2026-08-29T12:00:00.000Z"
        }"#;

        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.id.as_deref(), Some("6d5c0e3f00c6b1c9"));
        assert_eq!(station.name, "Bayfront Park A");
        assert_eq!(station.latitude, Some(25.7723312));
        assert_eq!(station.longitude, Some(-80.1813103));
        assert_eq!(station.extra.address, "100 Biscayne Blvd");
        assert_eq!(station.free_bikes, 5);
        assert_eq!(station.empty_slots, 3);
    }

    #[test]
    fn deserialize_empty_object() {
        let station: RawStation = serde_json::from_str("{}").unwrap();

        assert!(station.id.is_none());
        assert_eq!(station.name, "");
        assert!(station.latitude.is_none());
        assert!(station.longitude.is_none());
        assert_eq!(station.extra.address, "");
        assert_eq!(station.free_bikes, 0);
        assert_eq!(station.empty_slots, 0);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let json = r#"{"id": "a", "free_bikes": -3, "empty_slots": -1}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.free_bikes, 0);
        assert_eq!(station.empty_slots, 0);
    }

    #[test]
    fn non_numeric_counts_clamp_to_zero() {
        let json = r#"{"id": "a", "free_bikes": "lots", "empty_slots": null}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.free_bikes, 0);
        assert_eq!(station.empty_slots, 0);
    }

    #[test]
    fn fractional_counts_truncate() {
        let json = r#"{"id": "a", "free_bikes": 4.9, "empty_slots": 0.2}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.free_bikes, 4);
        assert_eq!(station.empty_slots, 0);
    }

    #[test]
    fn non_string_name_becomes_empty() {
        let json = r#"{"id": "a", "name": 42}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.name, "");
    }

    #[test]
    fn non_object_extra_becomes_empty() {
        let json = r#"{"id": "a", "extra": "not an object"}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.extra.address, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"id": "a", "network": "citi-bike-miami", "ebikes": 2}"#;
        let station: RawStation = serde_json::from_str(json).unwrap();

        assert_eq!(station.id.as_deref(), Some("a"));
    }
}
