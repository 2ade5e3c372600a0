//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station key: {reason}")]
pub struct InvalidStationKey {
    reason: &'static str,
}

/// A non-empty station identifier, used as the marker key.
///
/// The upstream feed uses opaque string ids (typically hex digests). This
/// type guarantees that any `StationKey` value is non-empty by construction;
/// no other structure is assumed.
///
/// # Examples
///
/// ```
/// use bike_server::domain::StationKey;
///
/// let key = StationKey::parse("6d5c0e3f").unwrap();
/// assert_eq!(key.as_str(), "6d5c0e3f");
///
/// // The empty string is rejected
/// assert!(StationKey::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationKey(String);

impl StationKey {
    /// Parse a station key from a string.
    ///
    /// The input must be non-empty; any other content is passed through
    /// unchanged.
    pub fn parse(s: &str) -> Result<Self, InvalidStationKey> {
        if s.is_empty() {
            return Err(InvalidStationKey {
                reason: "must be non-empty",
            });
        }

        Ok(StationKey(s.to_string()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
