// Generated mocks in test builds are pub within private modules
#![cfg_attr(not(test), deny(unreachable_pub))]

// Core modules
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;

// Injected capabilities
mod clock;
mod geocode;
mod shipment;

// Feature modules
mod rates;
pub mod types;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use consts::{DEFAULT_PACKAGING_TYPE, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use errors::Error;
pub use geocode::{GeoPoint, Geocoder};
pub use helpers::BaseUrl;
pub use rates::{extract_rate, RateClient, RateConfig};
pub use req::{HttpClient, RateTransport};
pub use shipment::ShipmentService;
pub use types::*;
