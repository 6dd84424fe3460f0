//! Geographical coordinates and the place metadata the geocoder resolves them from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use meteoboard::LatLon;
///
/// let lisbon = LatLon(38.7077, -9.1365);
/// assert_eq!(lisbon.0, 38.7077); // Latitude
/// assert_eq!(lisbon.1, -9.1365); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }
    pub fn longitude(self) -> f64 {
        self.1
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.0, self.1)
    }
}

/// A place resolved by the geocoder.
///
/// Built once per query from the first geocoding candidate and never mutated
/// afterwards; a new query produces a new `LocationInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// Short name of the place (e.g. "Lisboa").
    pub name: String,
    /// Full, human-readable name including region and country.
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationInfo {
    /// The coordinates of this place, in the form the weather fetcher expects.
    pub fn lat_lon(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}
