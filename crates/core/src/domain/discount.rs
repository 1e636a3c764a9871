use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{percent_of, round_to_cents};

/// Admin-curated discount types, looked up by kind rather than by a
/// user-supplied code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    FirstOrder,
    CashOnDelivery,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "value", rename_all = "snake_case")]
pub enum DiscountValue {
    Percent { percent: Decimal },
    Amount { amount: Decimal },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    pub value: DiscountValue,
    pub is_active: bool,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

impl Discount {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.valid_from <= now && now <= self.valid_to
    }

    /// Discount amount contributed for the given subtotal, rounded to
    /// cents before it is summed with the other components.
    pub fn amount_for(&self, subtotal: Decimal) -> Decimal {
        match &self.value {
            DiscountValue::Percent { percent } => percent_of(subtotal, *percent),
            DiscountValue::Amount { amount } => round_to_cents(*amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use super::{Discount, DiscountKind, DiscountValue};

    fn discount(value: DiscountValue) -> Discount {
        let now = Utc::now();
        Discount {
            kind: DiscountKind::FirstOrder,
            value,
            is_active: true,
            valid_from: now - Duration::days(1),
            valid_to: now + Duration::days(1),
        }
    }

    #[test]
    fn percent_discount_rounds_to_cents() {
        let d = discount(DiscountValue::Percent { percent: Decimal::new(1250, 2) });
        // 12.5% of 999.99 = 124.99875 -> 125.00
        assert_eq!(d.amount_for(Decimal::new(99_999, 2)), Decimal::new(12_500, 2));
    }

    #[test]
    fn flat_discount_is_returned_as_is() {
        let d = discount(DiscountValue::Amount { amount: Decimal::new(30_000, 2) });
        assert_eq!(d.amount_for(Decimal::new(10_000, 2)), Decimal::new(30_000, 2));
    }

    #[test]
    fn inactive_discount_is_not_applicable() {
        let mut d = discount(DiscountValue::Percent { percent: Decimal::TEN });
        d.is_active = false;
        assert!(!d.is_active_at(Utc::now()));
    }
}
