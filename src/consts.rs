use std::time::Duration;

pub const PRODUCTION_API_URL: &str = "https://ws.fedex.com";
pub const SANDBOX_API_URL: &str = "https://wsbeta.fedex.com";

/// One Rate packaging used when the config does not override it.
pub const DEFAULT_PACKAGING_TYPE: &str = "FEDEX_SMALL_BOX";

pub(crate) const RATE_QUOTE_PATH: &str = "/web-services";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Shipper warehouse location and address.
pub(crate) const WAREHOUSE_LATITUDE: f64 = 37.7749;
pub(crate) const WAREHOUSE_LONGITUDE: f64 = -122.4194;
pub(crate) const WAREHOUSE_POSTAL_CODE: &str = "12345";
pub(crate) const WAREHOUSE_COUNTRY_CODE: &str = "US";

/// Rough degrees-to-miles conversion for the planar distance heuristic.
pub(crate) const DEGREES_TO_MILES: f64 = 69.0;

/// Destinations at or under this distance get the overnight tier.
pub(crate) const OVERNIGHT_DISTANCE_MILES: f64 = 150.0;

// Fixed One Rate package dimensions, inches.
pub(crate) const PACKAGE_LENGTH: u32 = 10;
pub(crate) const PACKAGE_WIDTH: u32 = 10;
pub(crate) const PACKAGE_HEIGHT: u32 = 5;
