use async_trait::async_trait;

use crate::{prelude::*, types::Delivery};

/// Carrier shipment creation, owned by an external collaborator.
///
/// Rate fetching only prices a delivery; actually registering the shipment
/// with the carrier (and obtaining a tracking id) is a separate integration
/// the host wires in. This crate declares the seam and never implements it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentService: Send + Sync {
    /// Register the shipment with the carrier, returning its tracking id.
    async fn create_shipment(&self, delivery: &Delivery) -> Result<String>;
}
