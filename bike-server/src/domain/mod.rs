//! Validated domain types.
//!
//! Everything in this module is valid by construction: a `StationKey` is
//! never empty, a `LatLng` is always finite and in range. The feed layer
//! is the only place where untrusted data is turned into these types.

mod key;
mod marker;
mod position;

pub use key::{InvalidStationKey, StationKey};
pub use marker::StationMarker;
pub use position::{InvalidLatLng, LatLng};
