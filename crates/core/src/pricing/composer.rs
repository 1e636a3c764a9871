//! Order total composition.
//!
//! Two structurally different result shapes exist on purpose: when the
//! delivery cost is unknown the total is labelled as excluding
//! delivery and flagged pending, instead of guessing a fee or charging
//! zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::delivery::DeliveryType;
use crate::money::round_to_cents;
use crate::pricing::delivery_cost::DeliveryOutcome;
use crate::pricing::discounts::DiscountBreakdown;
use crate::pricing::promo::PromoEvaluation;

pub const TOTAL_TITLE_TAKEAWAY: &str = "Total amount";
pub const TOTAL_TITLE_INCL_DELIVERY: &str = "Total amount, incl. delivery";
pub const TOTAL_TITLE_EXCL_DELIVERY: &str = "Total amount, excl. delivery";

/// Delivery line of the result. Takeaway orders carry no delivery line
/// at all rather than a zero fee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryLine {
    NotApplicable,
    Included { cost: Decimal },
    Pending { message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalLine {
    pub title: String,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromoLine {
    pub code: Option<String>,
    pub accepted: bool,
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderPricingResult {
    pub subtotal: Decimal,
    pub discounts: DiscountBreakdown,
    pub promocode: PromoLine,
    pub delivery: DeliveryLine,
    pub total: TotalLine,
    /// User-facing annotations: promo notes, cap advisories, pending
    /// delivery clarifications.
    pub detail: Vec<String>,
}

pub fn compose_total(
    subtotal: Decimal,
    breakdown: DiscountBreakdown,
    promo: &PromoEvaluation,
    delivery_outcome: Option<DeliveryOutcome>,
    delivery_type: DeliveryType,
) -> OrderPricingResult {
    let discounted = round_to_cents(subtotal - breakdown.total_discount);

    let mut detail = Vec::new();
    if let Some(note) = &promo.note {
        detail.push(note.clone());
    }
    if let Some(message) = &breakdown.cap_message {
        detail.push(message.clone());
    }

    let (delivery, total) = match (delivery_type, delivery_outcome) {
        (DeliveryType::Takeaway, _) => (
            DeliveryLine::NotApplicable,
            TotalLine { title: TOTAL_TITLE_TAKEAWAY.to_owned(), amount: discounted },
        ),
        (DeliveryType::Delivery, Some(DeliveryOutcome::Cost { cost })) => (
            DeliveryLine::Included { cost },
            TotalLine {
                title: TOTAL_TITLE_INCL_DELIVERY.to_owned(),
                amount: round_to_cents(discounted + cost),
            },
        ),
        (DeliveryType::Delivery, Some(DeliveryOutcome::Pending { message })) => {
            detail.push(message.clone());
            (
                DeliveryLine::Pending { message },
                // Intentionally incomplete: the caller must flag this
                // total as non-final.
                TotalLine { title: TOTAL_TITLE_EXCL_DELIVERY.to_owned(), amount: discounted },
            )
        }
        // A delivery order priced without a delivery outcome is a
        // caller bug; degrade to the pending shape rather than invent
        // a fee.
        (DeliveryType::Delivery, None) => (
            DeliveryLine::Pending { message: "Delivery cost was not computed.".to_owned() },
            TotalLine { title: TOTAL_TITLE_EXCL_DELIVERY.to_owned(), amount: discounted },
        ),
    };

    OrderPricingResult {
        subtotal,
        discounts: breakdown,
        promocode: PromoLine {
            code: promo.code.clone(),
            accepted: promo.code.is_some() && promo.rejection.is_none(),
            note: promo.note.clone(),
        },
        delivery,
        total,
        detail,
    }
}
