use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Delivery,
    Takeaway,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    CardOnDelivery,
}

/// Admin-curated delivery method record for a city.
///
/// A takeaway record carries a flat percentage discount for self
/// pickup; a delivery record usually carries no direct discount but
/// feeds the zone and cost lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMethod {
    pub delivery_type: DeliveryType,
    pub city: String,
    pub is_active: bool,
    /// Percentage discount granted by the method itself (e.g. 10 for
    /// 10% off takeaway orders).
    pub discount_percent: Option<Decimal>,
    /// Fallback delivery fee when no zone record applies at all.
    pub default_delivery_cost: Option<Decimal>,
    pub min_order_amount: Option<Decimal>,
    /// Window in which orders for "today / as soon as possible" are
    /// accepted.
    pub accepts_from: Option<NaiveTime>,
    pub accepts_until: Option<NaiveTime>,
    /// Window in which orders are handed to the customer or courier.
    pub handoff_from: Option<NaiveTime>,
    pub handoff_until: Option<NaiveTime>,
}

impl DeliveryMethod {
    pub fn is_takeaway(&self) -> bool {
        self.delivery_type == DeliveryType::Takeaway
    }
}
