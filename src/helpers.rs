use crate::consts::{DEGREES_TO_MILES, PRODUCTION_API_URL, SANDBOX_API_URL};
use crate::geocode::GeoPoint;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseUrl {
    Production,
    Sandbox,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Production => PRODUCTION_API_URL.to_string(),
            BaseUrl::Sandbox => SANDBOX_API_URL.to_string(),
        }
    }
}

/// Planar straight-line distance between two coordinate pairs, scaled to
/// approximate miles. Not great-circle; the tier cutoff only needs a rough
/// number.
pub(crate) fn planar_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = a.latitude - b.latitude;
    let d_lon = a.longitude - b.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt() * DEGREES_TO_MILES
}
