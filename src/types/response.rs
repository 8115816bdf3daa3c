//! Rate-quote response tree.
//!
//! Only the path down to the total net charge amount is modeled; anything
//! else the carrier returns is ignored by serde.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RateReply {
    #[serde(default)]
    pub rate_reply_details: Vec<RateReplyDetail>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RateReplyDetail {
    #[serde(default)]
    pub rated_shipment_details: Vec<RatedShipmentDetail>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RatedShipmentDetail {
    pub shipment_rate_detail: Option<ShipmentRateDetail>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRateDetail {
    pub total_net_charge: Option<TotalNetCharge>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TotalNetCharge {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}
