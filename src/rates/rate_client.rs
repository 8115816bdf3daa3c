//! Core RateClient implementation.
//!
//! The RateClient prices a shipment through the FedEx One Rate program:
//! it builds a rate-quote payload from a host order, posts it to the
//! carrier, pulls the total net charge out of the reply, and writes that
//! amount into the order's (and optionally the delivery's) cost field.

use std::time::Duration;

use chrono::{Datelike, Weekday};
use reqwest::Client;
use tracing::error;

use crate::{
    clock::{Clock, SystemClock},
    consts::{
        DEFAULT_PACKAGING_TYPE, DEFAULT_TIMEOUT, OVERNIGHT_DISTANCE_MILES, PACKAGE_HEIGHT,
        PACKAGE_LENGTH, PACKAGE_WIDTH, WAREHOUSE_COUNTRY_CODE, WAREHOUSE_LATITUDE,
        WAREHOUSE_LONGITUDE, WAREHOUSE_POSTAL_CODE,
    },
    geocode::{GeoPoint, Geocoder},
    helpers::planar_miles,
    prelude::*,
    req::{HttpClient, RateTransport},
    types::{
        Delivery, Order, PackageDimensions, PackageLineItem, PackageWeight, Party, PartyAddress,
        RateReply, RateRequest, RequestedShipment, ServiceType, ShippingAddress,
        SpecialServicesRequested,
    },
    BaseUrl, Error,
};

/// Client configuration supplied by the host application.
pub struct RateConfig {
    /// Static bearer token for the carrier API
    pub api_key: String,
    pub base_url: BaseUrl,
    /// One Rate packaging code sent in every request
    pub packaging_type: String,
    /// Per-request deadline; expiry surfaces as an external-service error
    pub timeout: Duration,
}

impl RateConfig {
    pub fn new(api_key: impl Into<String>, base_url: BaseUrl) -> Self {
        Self {
            api_key: api_key.into(),
            base_url,
            packaging_type: DEFAULT_PACKAGING_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Custom Debug implementation to prevent API key leakage
impl std::fmt::Debug for RateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("packaging_type", &self.packaging_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub struct RateClient {
    transport: Box<dyn RateTransport>,
    geocoder: Box<dyn Geocoder>,
    clock: Box<dyn Clock>,
    packaging_type: String,
}

impl RateClient {
    pub fn new(config: RateConfig, geocoder: Box<dyn Geocoder>) -> Self {
        Self::with_client(None, config, geocoder)
    }

    /// Build a client around a pre-configured [`reqwest::Client`]
    /// (connection pooling, proxies, and so on stay under host control).
    pub fn with_client(
        client: Option<Client>,
        config: RateConfig,
        geocoder: Box<dyn Geocoder>,
    ) -> Self {
        let client = client.unwrap_or_default();
        let http_client = HttpClient::new(
            client,
            config.base_url.get_url(),
            config.api_key,
            config.timeout,
        );
        Self::from_parts(
            Box::new(http_client),
            geocoder,
            Box::new(SystemClock),
            config.packaging_type,
        )
    }

    fn from_parts(
        transport: Box<dyn RateTransport>,
        geocoder: Box<dyn Geocoder>,
        clock: Box<dyn Clock>,
        packaging_type: String,
    ) -> Self {
        Self {
            transport,
            geocoder,
            clock,
            packaging_type,
        }
    }

    /// Fetch the One Rate quote for `order` and store it as the order's
    /// delivery cost.
    ///
    /// At most one carrier call is made; on any failure the cost field is
    /// left untouched and the typed error propagates after being logged.
    pub async fn fetch_and_apply_rate(&self, order: &mut Order) -> Result<f64> {
        let rate = self.fetch_rate(order).await.inspect_err(|err| {
            error!(error = %err, "error fetching FedEx One Rate");
        })?;
        order.delivery_cost = Some(rate);
        Ok(rate)
    }

    /// Price a delivery through its originating order, writing the rate
    /// onto both cost fields.
    ///
    /// Registering the shipment with the carrier is not done here; that
    /// belongs to the host's [`ShipmentService`](crate::ShipmentService).
    pub async fn create_shipment_and_apply_rate(&self, delivery: &mut Delivery) -> Result<f64> {
        let rate = self.fetch_and_apply_rate(&mut delivery.order).await?;
        delivery.delivery_cost = Some(rate);
        Ok(rate)
    }

    async fn fetch_rate(&self, order: &Order) -> Result<f64> {
        validate_order(order)?;

        let payload = self.prepare_payload(order)?;
        let body = serde_json::to_string(&payload).map_err(|e| Error::JsonParse(e.to_string()))?;

        let text = self.transport.request_rates(body).await?;
        let reply: RateReply =
            serde_json::from_str(&text).map_err(|e| Error::ExternalService {
                status: None,
                message: format!("malformed rate response: {e}"),
            })?;

        extract_rate(&reply)
    }

    /// Build the rate-quote payload for an order.
    ///
    /// Saturday delivery is requested only when today is Thursday, so a
    /// Thursday order can still land by Saturday. The rule is fixed, not
    /// a computed transit check.
    fn prepare_payload(&self, order: &Order) -> Result<RateRequest> {
        let saturday_delivery = self.clock.today().weekday() == Weekday::Thu;

        let distance = self.compute_distance(&order.shipping_address)?;
        let service_type = select_service_type(distance);

        Ok(RateRequest {
            requested_shipment: RequestedShipment {
                ship_timestamp: self.clock.now().to_rfc3339(),
                dropoff_type: "REGULAR_PICKUP".to_string(),
                service_type,
                packaging_type: self.packaging_type.clone(),
                shipper: Party {
                    address: PartyAddress {
                        postal_code: WAREHOUSE_POSTAL_CODE.to_string(),
                        country_code: WAREHOUSE_COUNTRY_CODE.to_string(),
                    },
                },
                recipient: Party {
                    address: PartyAddress {
                        postal_code: order.shipping_address.postal_code.clone(),
                        country_code: order.shipping_address.country_code.clone(),
                    },
                },
                special_services_requested: SpecialServicesRequested {
                    special_service_types: "FEDEX_ONE_RATE".to_string(),
                    saturday_delivery,
                },
                requested_package_line_items: vec![PackageLineItem {
                    group_package_count: 1,
                    weight: PackageWeight {
                        units: "LB".to_string(),
                        value: order_weight(order),
                    },
                    dimensions: PackageDimensions {
                        length: PACKAGE_LENGTH,
                        width: PACKAGE_WIDTH,
                        height: PACKAGE_HEIGHT,
                    },
                }],
            },
        })
    }

    /// Approximate miles between the warehouse and the destination, via
    /// the injected geocoder.
    fn compute_distance(&self, address: &ShippingAddress) -> Result<f64> {
        let destination = self.geocoder.geocode(address)?;
        let warehouse = GeoPoint {
            latitude: WAREHOUSE_LATITUDE,
            longitude: WAREHOUSE_LONGITUDE,
        };
        Ok(planar_miles(warehouse, destination))
    }
}

/// Overnight for destinations within the cutoff (inclusive), the cheaper
/// multi-day tier beyond it.
fn select_service_type(distance_miles: f64) -> ServiceType {
    if distance_miles <= OVERNIGHT_DISTANCE_MILES {
        ServiceType::PriorityOvernight
    } else {
        ServiceType::ExpressSaver
    }
}

fn order_weight(order: &Order) -> f64 {
    order
        .lines
        .iter()
        .map(|line| line.product_weight * line.quantity)
        .sum()
}

fn validate_order(order: &Order) -> Result<()> {
    let address = &order.shipping_address;
    if address.postal_code.trim().is_empty() {
        return Err(Error::Validation(
            "shipping address has no postal code".to_string(),
        ));
    }
    if address.country_code.trim().is_empty() {
        return Err(Error::Validation(
            "shipping address has no country code".to_string(),
        ));
    }
    for (idx, line) in order.lines.iter().enumerate() {
        if !line.product_weight.is_finite() || line.product_weight < 0.0 {
            return Err(Error::Validation(format!(
                "order line {idx} has an invalid product weight"
            )));
        }
        if !line.quantity.is_finite() || line.quantity < 0.0 {
            return Err(Error::Validation(format!(
                "order line {idx} has an invalid quantity"
            )));
        }
    }
    Ok(())
}

/// Pull the One Rate net charge out of a rate reply.
///
/// Only the first rate-reply detail and first rated-shipment detail are
/// consulted; a miss at any level of the path is an external-service error.
pub fn extract_rate(reply: &RateReply) -> Result<f64> {
    let detail = reply
        .rate_reply_details
        .first()
        .ok_or_else(|| Error::ExternalService {
            status: None,
            message: "no rate details found in FedEx response".to_string(),
        })?;

    detail
        .rated_shipment_details
        .first()
        .and_then(|rated| rated.shipment_rate_detail.as_ref())
        .and_then(|rate_detail| rate_detail.total_net_charge.as_ref())
        .and_then(|charge| charge.amount)
        .ok_or_else(|| Error::ExternalService {
            status: None,
            message: "no One Rate price found in FedEx response".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEGREES_TO_MILES;
    use crate::geocode::MockGeocoder;
    use crate::req::MockRateTransport;
    use crate::types::OrderLine;
    use chrono::{DateTime, NaiveDate, Utc};

    const SUCCESS_BODY: &str = r#"{
        "RateReplyDetails": [{
            "RatedShipmentDetails": [{
                "ShipmentRateDetail": {
                    "TotalNetCharge": {"Amount": 55.00, "Currency": "USD"}
                }
            }]
        }]
    }"#;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.and_hms_opt(12, 0, 0).unwrap().and_utc()
        }

        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    // 2026-08-26 is a Wednesday
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn sample_order() -> Order {
        Order {
            shipping_address: ShippingAddress {
                postal_code: "94107".to_string(),
                country_code: "US".to_string(),
            },
            lines: vec![OrderLine {
                product_weight: 5.0,
                quantity: 2.0,
            }],
            delivery_cost: None,
        }
    }

    fn geocoder_at(latitude: f64, longitude: f64) -> MockGeocoder {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_geocode().returning(move |_| {
            Ok(GeoPoint {
                latitude,
                longitude,
            })
        });
        geocoder
    }

    /// Geocoder placing every destination `miles` due north of the warehouse.
    fn geocoder_miles_away(miles: f64) -> MockGeocoder {
        geocoder_at(WAREHOUSE_LATITUDE + miles / DEGREES_TO_MILES, WAREHOUSE_LONGITUDE)
    }

    fn client(
        transport: MockRateTransport,
        geocoder: MockGeocoder,
        today: NaiveDate,
    ) -> RateClient {
        RateClient::from_parts(
            Box::new(transport),
            Box::new(geocoder),
            Box::new(FixedClock(today)),
            DEFAULT_PACKAGING_TYPE.to_string(),
        )
    }

    #[test]
    fn test_service_type_boundary() {
        assert_eq!(select_service_type(0.0), ServiceType::PriorityOvernight);
        assert_eq!(select_service_type(149.9), ServiceType::PriorityOvernight);
        // exactly 150 still qualifies for overnight
        assert_eq!(select_service_type(150.0), ServiceType::PriorityOvernight);
        assert_eq!(select_service_type(150.1), ServiceType::ExpressSaver);
        assert_eq!(select_service_type(1000.0), ServiceType::ExpressSaver);
    }

    #[test]
    fn test_order_weight_aggregates_lines() {
        let order = Order {
            shipping_address: ShippingAddress {
                postal_code: "94107".to_string(),
                country_code: "US".to_string(),
            },
            lines: vec![
                OrderLine {
                    product_weight: 2.0,
                    quantity: 3.0,
                },
                OrderLine {
                    product_weight: 1.5,
                    quantity: 2.0,
                },
            ],
            delivery_cost: None,
        };
        assert_eq!(order_weight(&order), 9.0);
    }

    #[test]
    fn test_saturday_delivery_only_on_thursday() {
        // 2026-08-24 is a Monday; walk one full week
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        for offset in 0..7 {
            let day = monday + chrono::Duration::days(offset);
            let rate_client = client(
                MockRateTransport::new(),
                geocoder_miles_away(5.0),
                day,
            );
            let payload = rate_client.prepare_payload(&sample_order()).unwrap();
            let expected = day.weekday() == Weekday::Thu;
            assert_eq!(
                payload
                    .requested_shipment
                    .special_services_requested
                    .saturday_delivery,
                expected,
                "wrong Saturday flag on {day}"
            );
        }
    }

    #[test]
    fn test_payload_far_destination_gets_express_saver() {
        let rate_client = client(
            MockRateTransport::new(),
            geocoder_miles_away(151.0),
            wednesday(),
        );
        let payload = rate_client.prepare_payload(&sample_order()).unwrap();
        assert_eq!(
            payload.requested_shipment.service_type,
            ServiceType::ExpressSaver
        );
    }

    #[test]
    fn test_extract_rate_from_full_reply() {
        let body = SUCCESS_BODY.replace("55.00", "42.50");
        let reply: RateReply = serde_json::from_str(&body).unwrap();
        assert_eq!(extract_rate(&reply).unwrap(), 42.50);
    }

    #[test]
    fn test_extract_rate_empty_details() {
        let reply: RateReply = serde_json::from_str(r#"{"RateReplyDetails": []}"#).unwrap();
        let err = extract_rate(&reply).unwrap_err();
        assert!(matches!(err, Error::ExternalService { status: None, .. }));
    }

    #[test]
    fn test_extract_rate_missing_amount() {
        let reply: RateReply = serde_json::from_str(
            r#"{"RateReplyDetails": [{"RatedShipmentDetails": [{"ShipmentRateDetail": {}}]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            extract_rate(&reply),
            Err(Error::ExternalService { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_and_apply_rate_end_to_end() {
        let mut transport = MockRateTransport::new();
        transport
            .expect_request_rates()
            .withf(|body| {
                body.contains("\"ServiceType\":\"PRIORITY_OVERNIGHT\"")
                    && body.contains("\"SaturdayDelivery\":false")
                    && body.contains("\"Value\":10.0")
                    && body.contains("\"SpecialServiceTypes\":\"FEDEX_ONE_RATE\"")
            })
            .times(1)
            .returning(|_| Ok(SUCCESS_BODY.to_string()));

        let rate_client = client(transport, geocoder_miles_away(10.0), wednesday());
        let mut order = sample_order();

        let rate = rate_client.fetch_and_apply_rate(&mut order).await.unwrap();
        assert_eq!(rate, 55.00);
        assert_eq!(order.delivery_cost, Some(55.00));
    }

    #[tokio::test]
    async fn test_http_error_leaves_cost_unset() {
        let mut transport = MockRateTransport::new();
        transport.expect_request_rates().returning(|_| {
            Err(Error::ExternalService {
                status: Some(500),
                message: "Internal Server Error".to_string(),
            })
        });

        let rate_client = client(transport, geocoder_miles_away(10.0), wednesday());
        let mut order = sample_order();

        let err = rate_client
            .fetch_and_apply_rate(&mut order)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ExternalService {
                status: Some(500),
                ..
            }
        ));
        assert_eq!(order.delivery_cost, None);
    }

    #[tokio::test]
    async fn test_malformed_response_is_external_service_error() {
        let mut transport = MockRateTransport::new();
        transport
            .expect_request_rates()
            .returning(|_| Ok("not json".to_string()));

        let rate_client = client(transport, geocoder_miles_away(10.0), wednesday());
        let mut order = sample_order();

        let err = rate_client
            .fetch_and_apply_rate(&mut order)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ExternalService { status: None, .. }));
        assert_eq!(order.delivery_cost, None);
    }

    #[tokio::test]
    async fn test_missing_postal_code_fails_before_any_call() {
        // no transport expectations: a carrier call would panic the mock
        let rate_client = client(
            MockRateTransport::new(),
            geocoder_miles_away(10.0),
            wednesday(),
        );
        let mut order = sample_order();
        order.shipping_address.postal_code = String::new();

        let err = rate_client
            .fetch_and_apply_rate(&mut order)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(order.delivery_cost, None);
    }

    #[tokio::test]
    async fn test_geocoder_failure_propagates_as_lookup() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_geocode()
            .returning(|_| Err(Error::Lookup("address not found".to_string())));

        let rate_client = client(MockRateTransport::new(), geocoder, wednesday());
        let mut order = sample_order();

        let err = rate_client
            .fetch_and_apply_rate(&mut order)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Lookup(_)));
        assert_eq!(order.delivery_cost, None);
    }

    #[tokio::test]
    async fn test_delivery_gets_rate_on_both_records() {
        let mut transport = MockRateTransport::new();
        transport
            .expect_request_rates()
            .times(1)
            .returning(|_| Ok(SUCCESS_BODY.to_string()));

        let rate_client = client(transport, geocoder_miles_away(10.0), wednesday());
        let mut delivery = Delivery {
            order: sample_order(),
            delivery_cost: None,
        };

        let rate = rate_client
            .create_shipment_and_apply_rate(&mut delivery)
            .await
            .unwrap();
        assert_eq!(rate, 55.00);
        assert_eq!(delivery.order.delivery_cost, Some(55.00));
        assert_eq!(delivery.delivery_cost, Some(55.00));
    }
}
