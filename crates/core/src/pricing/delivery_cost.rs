//! Delivery fee calculation.
//!
//! The fee is computed against the post-discount subtotal: eligibility
//! for a zone's free-delivery threshold is judged on what the customer
//! actually pays for the items, not the raw cart amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::delivery::DeliveryMethod;
use crate::domain::zone::{DeliveryZone, ZoneKind};
use crate::errors::PricingError;
use crate::money::round_to_cents;

pub const CLARIFICATION_MESSAGE: &str = "Delivery address is outside our service area or an \
     error occurred while processing the delivery data. Please check with the administrator \
     regarding the delivery possibility and its cost.";

pub const CLARIFICATION_FREE_DELIVERY_MESSAGE: &str = "Delivery address is outside our service \
     area or an error occurred while processing the delivery data. Please check with the \
     administrator regarding the delivery possibility and the free delivery promocode.";

/// Either a concrete fee or a structurally distinct pending state. An
/// unknown cost is never silently reported as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Cost { cost: Decimal },
    Pending { message: String },
}

pub fn delivery_cost(
    zone: Option<&DeliveryZone>,
    discounted_subtotal: Decimal,
    method: &DeliveryMethod,
    free_delivery: bool,
    manual_cost: Option<Decimal>,
) -> Result<DeliveryOutcome, PricingError> {
    // Defensive path for callers pricing without any zone data.
    let Some(zone) = zone else {
        return Ok(DeliveryOutcome::Cost {
            cost: method.default_delivery_cost.unwrap_or(Decimal::ZERO),
        });
    };

    match &zone.kind {
        // An unclear address holds even a free-delivery promo: the
        // outcome stays pending until staff resolve the zone.
        ZoneKind::Undetermined => Ok(DeliveryOutcome::Pending {
            message: if free_delivery {
                CLARIFICATION_FREE_DELIVERY_MESSAGE.to_owned()
            } else {
                CLARIFICATION_MESSAGE.to_owned()
            },
        }),
        _ if free_delivery => Ok(DeliveryOutcome::Cost { cost: Decimal::ZERO }),
        ZoneKind::OnRequest => match manual_cost {
            Some(cost) if cost > Decimal::ZERO => {
                Ok(DeliveryOutcome::Cost { cost: round_to_cents(cost) })
            }
            _ => Err(PricingError::MissingManualDeliveryCost { zone: zone.name.clone() }),
        },
        ZoneKind::Fixed { delivery_cost, is_promo, promo_min_order_amount } => {
            let waived = *is_promo
                && promo_min_order_amount
                    .map(|threshold| discounted_subtotal >= threshold)
                    .unwrap_or(false);
            if waived {
                Ok(DeliveryOutcome::Cost { cost: Decimal::ZERO })
            } else {
                Ok(DeliveryOutcome::Cost { cost: *delivery_cost })
            }
        }
    }
}
