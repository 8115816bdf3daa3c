//! Host application records.
//!
//! These mirror the order/delivery/address shapes of the calling system.
//! The client only ever reads them, except for the `delivery_cost` fields
//! it writes a fetched rate into.

/// Destination address on an order. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub postal_code: String,
    pub country_code: String,
}

/// One order line: a product weight (lb) and how many of it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_weight: f64,
    pub quantity: f64,
}

/// Sales order being priced. `delivery_cost` is the field a fetched rate
/// lands in; it stays untouched when the fetch fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub shipping_address: ShippingAddress,
    pub lines: Vec<OrderLine>,
    pub delivery_cost: Option<f64>,
}

/// Outbound delivery (picking) with a reference back to its originating
/// order and its own cost field.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub order: Order,
    pub delivery_cost: Option<f64>,
}
