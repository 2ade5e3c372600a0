//! Normalization of raw feed records into domain markers.
//!
//! This module is the single validation gate between the untrusted feed
//! and the marker store. A record either becomes a well-formed
//! [`StationMarker`] or is rejected with a reason; nothing malformed gets
//! past here.

use serde_json::Value;

use crate::domain::{LatLng, StationKey, StationMarker};

use super::types::RawStation;

/// Why a single raw record was rejected during normalization.
///
/// Rejections are per-record and never fail a snapshot; callers count them
/// and drop the record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectReason {
    /// The record has no id, or an empty one.
    #[error("missing or empty station id")]
    MissingId,

    /// Latitude or longitude is absent.
    #[error("missing latitude/longitude")]
    MissingPosition,

    /// Coordinates are present but not finite numbers in valid range.
    #[error("invalid position: ({0}, {1})")]
    InvalidPosition(f64, f64),

    /// The element was not decodable as a station object at all.
    #[error("undecodable station record")]
    Undecodable,
}

/// The result of normalizing one snapshot's worth of raw elements.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSnapshot {
    /// Accepted markers, in input order. Keys may still contain duplicates;
    /// deduplication is the store's concern.
    pub markers: Vec<StationMarker>,

    /// Number of elements dropped during decoding or normalization.
    pub rejected: usize,
}

/// Normalize a single raw station record.
///
/// Pure and deterministic. Display counts were already clamped during
/// decoding; this function only enforces the invariants that make a record
/// renderable: a non-empty key and a valid position.
pub fn normalize(raw: &RawStation) -> Result<StationMarker, RejectReason> {
    let key = raw
        .id
        .as_deref()
        .and_then(|id| StationKey::parse(id).ok())
        .ok_or(RejectReason::MissingId)?;

    let (lat, lng) = match (raw.latitude, raw.longitude) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => return Err(RejectReason::MissingPosition),
    };

    let position = LatLng::new(lat, lng).map_err(|_| RejectReason::InvalidPosition(lat, lng))?;

    Ok(StationMarker {
        key,
        name: raw.name.clone(),
        position,
        content: raw.extra.address.clone(),
        free_bikes: raw.free_bikes,
        empty_slots: raw.empty_slots,
    })
}

/// Normalize every element of a snapshot, dropping rejects.
///
/// Elements that do not even decode as station objects count as rejected,
/// the same as records failing validation.
pub fn normalize_all(elements: &[Value]) -> NormalizedSnapshot {
    let mut markers = Vec::with_capacity(elements.len());
    let mut rejected = 0;

    for element in elements {
        let outcome = serde_json::from_value::<RawStation>(element.clone())
            .map_err(|_| RejectReason::Undecodable)
            .and_then(|raw| normalize(&raw));

        match outcome {
            Ok(marker) => markers.push(marker),
            Err(reason) => {
                rejected += 1;
                tracing::debug!(%reason, "dropping station record");
            }
        }
    }

    NormalizedSnapshot { markers, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(id: &str, lat: f64, lng: f64) -> RawStation {
        RawStation {
            id: Some(id.to_string()),
            latitude: Some(lat),
            longitude: Some(lng),
            ..RawStation::default()
        }
    }

    #[test]
    fn normalize_complete_record() {
        let raw: RawStation = serde_json::from_value(json!({
            "id": "a",
            "latitude": 25.0,
            "longitude": -80.0,
            "name": "X",
            "extra": {"address": "Y"},
            "empty_slots": 3,
            "free_bikes": 5
        }))
        .unwrap();

        let marker = normalize(&raw).unwrap();

        assert_eq!(marker.key.as_str(), "a");
        assert_eq!(marker.name, "X");
        assert_eq!(marker.position.lat(), 25.0);
        assert_eq!(marker.position.lng(), -80.0);
        assert_eq!(marker.content, "Y");
        assert_eq!(marker.empty_slots, 3);
        assert_eq!(marker.free_bikes, 5);
    }

    #[test]
    fn reject_missing_id() {
        let mut station = raw("a", 25.0, -80.0);
        station.id = None;

        assert_eq!(normalize(&station), Err(RejectReason::MissingId));
    }

    #[test]
    fn reject_empty_id() {
        let station = raw("", 25.0, -80.0);

        assert_eq!(normalize(&station), Err(RejectReason::MissingId));
    }

    #[test]
    fn reject_missing_coordinates() {
        let mut station = raw("a", 25.0, -80.0);
        station.longitude = None;

        assert_eq!(normalize(&station), Err(RejectReason::MissingPosition));
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        let station = raw("a", 999.0, -80.0);

        assert_eq!(
            normalize(&station),
            Err(RejectReason::InvalidPosition(999.0, -80.0))
        );
    }

    #[test]
    fn absent_name_and_address_become_empty() {
        let station = raw("a", 25.0, -80.0);
        let marker = normalize(&station).unwrap();

        assert_eq!(marker.name, "");
        assert_eq!(marker.content, "");
    }

    #[test]
    fn normalize_all_preserves_input_order() {
        let elements = vec![
            json!({"id": "b", "latitude": 1.0, "longitude": 2.0}),
            json!({"id": "a", "latitude": 3.0, "longitude": 4.0}),
            json!({"id": "c", "latitude": 5.0, "longitude": 6.0}),
        ];

        let snapshot = normalize_all(&elements);

        let keys: Vec<&str> = snapshot.markers.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(snapshot.rejected, 0);
    }

    #[test]
    fn normalize_all_counts_rejects() {
        let elements = vec![
            json!({"id": "a", "latitude": 25.0, "longitude": -80.0}),
            json!({"id": "", "latitude": 25.0, "longitude": -80.0}),
            json!("not an object"),
            json!(null),
        ];

        let snapshot = normalize_all(&elements);

        assert_eq!(snapshot.markers.len(), 1);
        assert_eq!(snapshot.rejected, 3);
    }

    #[test]
    fn normalize_all_empty_input() {
        let snapshot = normalize_all(&[]);

        assert!(snapshot.markers.is_empty());
        assert_eq!(snapshot.rejected, 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Output never exceeds input, whatever the elements look like
        #[test]
        fn output_bounded_by_input(
            records in prop::collection::vec(
                (".{0,8}", prop::num::f64::ANY, prop::num::f64::ANY, -50i64..50),
                0..20,
            )
        ) {
            let elements: Vec<_> = records
                .iter()
                .map(|(id, lat, lng, bikes)| {
                    json!({"id": id, "latitude": lat, "longitude": lng, "free_bikes": bikes})
                })
                .collect();

            let snapshot = normalize_all(&elements);

            prop_assert!(snapshot.markers.len() <= elements.len());
            prop_assert_eq!(snapshot.markers.len() + snapshot.rejected, elements.len());
        }

        /// Accepted markers always satisfy the view-model invariants
        #[test]
        fn accepted_markers_are_well_formed(
            records in prop::collection::vec(
                (".{0,8}", prop::num::f64::ANY, prop::num::f64::ANY, -50i64..50),
                0..20,
            )
        ) {
            let elements: Vec<_> = records
                .iter()
                .map(|(id, lat, lng, bikes)| {
                    json!({"id": id, "latitude": lat, "longitude": lng, "free_bikes": bikes})
                })
                .collect();

            for marker in normalize_all(&elements).markers {
                prop_assert!(!marker.key.as_str().is_empty());
                prop_assert!(marker.position.lat().abs() <= 90.0);
                prop_assert!(marker.position.lng().abs() <= 180.0);
            }
        }
    }
}
