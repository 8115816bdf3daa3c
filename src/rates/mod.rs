mod rate_client;

pub use rate_client::{extract_rate, RateClient, RateConfig};
