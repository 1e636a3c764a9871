use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What an accepted promocode does to the order.
///
/// A single tagged variant per code: two effects can never be set at
/// once, which the flat optional-field representation used to allow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromoEffect {
    /// Percentage off the order subtotal.
    Percent { percent: Decimal },
    /// Flat amount off the order subtotal. Not locally clamped to the
    /// subtotal; the global discount cap bounds it.
    Flat { amount: Decimal },
    /// Waives the delivery fee instead of discounting the subtotal.
    FreeDelivery,
    /// No monetary effect; an informational gift message is attached.
    Gift,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub is_active: bool,
    pub first_order_only: bool,
    pub effect: PromoEffect,
}

impl PromoCode {
    /// Window check, re-run defensively even though callers are
    /// expected to validate codes before handing them to the engine.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.valid_from <= now && now <= self.valid_to
    }
}
