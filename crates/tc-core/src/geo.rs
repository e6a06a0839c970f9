//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Road distances in
//! the catalogue are integer metres; the geodesic distance here is only used
//! for curvature ratios, where double precision keeps the quotient stable.

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in metres, by the spherical law of cosines.
    ///
    /// Equal coordinates short-circuit to exactly `0.0`; the trigonometric
    /// form would otherwise amplify rounding into a spurious few metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lng = (self.lng - other.lng).to_radians();

        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lng.cos()).acos() * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
