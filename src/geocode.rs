use crate::{prelude::*, types::ShippingAddress};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address-to-coordinates resolver.
///
/// This crate never implements geocoding itself; the host injects a
/// resolver and the distance heuristic consumes it. Failures surface as
/// [`Error::Lookup`](crate::Error::Lookup).
#[cfg_attr(test, mockall::automock)]
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &ShippingAddress) -> Result<GeoPoint>;
}
