//! Rate-quote request payload, shaped to the FedEx wire schema.

use serde::{Deserialize, Serialize};

/// Shipping speed tier requested from the carrier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    #[serde(rename = "PRIORITY_OVERNIGHT")]
    PriorityOvernight,
    #[serde(rename = "FEDEX_EXPRESS_SAVER")]
    ExpressSaver,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct RateRequest {
    pub requested_shipment: RequestedShipment,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedShipment {
    /// RFC 3339 timestamp of the intended ship time
    pub ship_timestamp: String,
    pub dropoff_type: String,
    pub service_type: ServiceType,
    pub packaging_type: String,
    pub shipper: Party,
    pub recipient: Party,
    pub special_services_requested: SpecialServicesRequested,
    pub requested_package_line_items: Vec<PackageLineItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    pub address: PartyAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PartyAddress {
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialServicesRequested {
    /// Always "FEDEX_ONE_RATE" for this client
    pub special_service_types: String,
    pub saturday_delivery: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PackageLineItem {
    pub group_package_count: u32,
    pub weight: PackageWeight,
    pub dimensions: PackageDimensions,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeight {
    /// Weight unit code, "LB" here
    pub units: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}
