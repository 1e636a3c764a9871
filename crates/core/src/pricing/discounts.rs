//! Discount aggregation.
//!
//! Each independent discount source contributes a component rounded to
//! cents before summing; the automatic components are then clamped by
//! the configured global cap. The manual staff discount is tracked
//! separately and is never capped: a human already approved it, whereas
//! the cap exists to protect margin against stacked automatic
//! discounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::delivery::{DeliveryMethod, PaymentMethod};
use crate::domain::discount::Discount;
use crate::domain::promo::PromoEffect;
use crate::money::{percent_of, round_to_cents};

pub const CAP_MESSAGE: &str =
    "The total discount was limited to the maximum allowed share of the order amount.";

#[derive(Clone, Debug)]
pub struct DiscountInput<'a> {
    /// Effect of an already-gated promocode. Inapplicable codes must be
    /// rejected upstream; this component only turns an accepted effect
    /// into an amount.
    pub promo_effect: Option<&'a PromoEffect>,
    pub method: &'a DeliveryMethod,
    pub first_order: bool,
    pub payment: PaymentMethod,
    /// Staff goodwill discount, already vetted by the admin UI.
    pub manual_discount: Option<Decimal>,
    pub first_order_discount: Option<&'a Discount>,
    pub cash_discount: Option<&'a Discount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    pub promo_discount: Decimal,
    pub delivery_type_discount: Decimal,
    pub first_order_discount: Decimal,
    pub cash_discount: Decimal,
    pub manual_discount: Decimal,
    /// Capped automatic total plus the uncapped manual discount.
    pub total_discount: Decimal,
    pub cap_applied: bool,
    pub cap_message: Option<String>,
}

impl DiscountBreakdown {
    pub fn zero() -> Self {
        Self {
            promo_discount: Decimal::ZERO,
            delivery_type_discount: Decimal::ZERO,
            first_order_discount: Decimal::ZERO,
            cash_discount: Decimal::ZERO,
            manual_discount: Decimal::ZERO,
            total_discount: Decimal::ZERO,
            cap_applied: false,
            cap_message: None,
        }
    }
}

pub fn compute_discounts(
    subtotal: Decimal,
    input: &DiscountInput<'_>,
    max_discount_percent: Decimal,
) -> DiscountBreakdown {
    let promo_discount = promo_component(subtotal, input.promo_effect);
    let delivery_type_discount = delivery_type_component(subtotal, input.method);
    let first_order_discount = if input.first_order {
        input.first_order_discount.map(|d| d.amount_for(subtotal)).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    // The cash discount is delivery-specific: takeaway orders already
    // carry the pickup discount.
    let cash_discount = if input.payment == PaymentMethod::Cash && !input.method.is_takeaway() {
        input.cash_discount.map(|d| d.amount_for(subtotal)).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let manual_discount = round_to_cents(input.manual_discount.unwrap_or(Decimal::ZERO));

    let raw_total = round_to_cents(
        promo_discount + delivery_type_discount + first_order_discount + cash_discount,
    );
    let ceiling = percent_of(subtotal, max_discount_percent);
    let cap_applied = raw_total > ceiling;
    let automatic_total = if cap_applied { ceiling } else { raw_total };

    DiscountBreakdown {
        promo_discount,
        delivery_type_discount,
        first_order_discount,
        cash_discount,
        manual_discount,
        total_discount: round_to_cents(automatic_total + manual_discount),
        cap_applied,
        cap_message: cap_applied.then(|| CAP_MESSAGE.to_owned()),
    }
}

fn promo_component(subtotal: Decimal, effect: Option<&PromoEffect>) -> Decimal {
    match effect {
        Some(PromoEffect::Percent { percent }) => percent_of(subtotal, *percent),
        // Not locally clamped to the subtotal; the global cap bounds it.
        Some(PromoEffect::Flat { amount }) => round_to_cents(*amount),
        // Free delivery and gifts affect the delivery fee / messaging,
        // not the subtotal.
        Some(PromoEffect::FreeDelivery) | Some(PromoEffect::Gift) | None => Decimal::ZERO,
    }
}

fn delivery_type_component(subtotal: Decimal, method: &DeliveryMethod) -> Decimal {
    match method.discount_percent {
        Some(percent) => percent_of(subtotal, percent),
        None => Decimal::ZERO,
    }
}
