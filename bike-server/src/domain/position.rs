//! Geographic position type.

use std::fmt;

/// Error returned when constructing an invalid position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position: {reason}")]
pub struct InvalidLatLng {
    reason: &'static str,
}

/// A validated latitude/longitude pair.
///
/// Both components are guaranteed finite, with latitude in [-90, 90] and
/// longitude in [-180, 180]. Marker rendering can rely on these bounds.
///
/// # Examples
///
/// ```
/// use bike_server::domain::LatLng;
///
/// let miami = LatLng::new(25.7723312, -80.1813103).unwrap();
/// assert_eq!(miami.lat(), 25.7723312);
/// assert_eq!(miami.lng(), -80.1813103);
///
/// // Out of range is rejected
/// assert!(LatLng::new(999.0, 0.0).is_err());
/// assert!(LatLng::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Construct a position from raw coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidLatLng> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidLatLng {
                reason: "coordinates must be finite numbers",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidLatLng {
                reason: "latitude must be in [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidLatLng {
                reason: "longitude must be in [-180, 180]",
            });
        }

        Ok(LatLng { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_coordinates() {
        assert!(LatLng::new(0.0, 0.0).is_ok());
        assert!(LatLng::new(25.7723312, -80.1813103).is_ok());
        assert!(LatLng::new(-90.0, -180.0).is_ok());
        assert!(LatLng::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_out_of_range_latitude() {
        assert!(LatLng::new(90.0001, 0.0).is_err());
        assert!(LatLng::new(-90.0001, 0.0).is_err());
        assert!(LatLng::new(999.0, -80.0).is_err());
    }

    #[test]
    fn reject_out_of_range_longitude() {
        assert!(LatLng::new(0.0, 180.0001).is_err());
        assert!(LatLng::new(0.0, -180.0001).is_err());
    }

    #[test]
    fn reject_non_finite() {
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
        assert!(LatLng::new(0.0, f64::NAN).is_err());
        assert!(LatLng::new(f64::INFINITY, 0.0).is_err());
        assert!(LatLng::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn accessors() {
        let pos = LatLng::new(51.5, -0.1).unwrap();
        assert_eq!(pos.lat(), 51.5);
        assert_eq!(pos.lng(), -0.1);
    }

    #[test]
    fn display() {
        let pos = LatLng::new(25.5, -80.25).unwrap();
        assert_eq!(format!("{}", pos), "(25.5, -80.25)");
    }
}
