//! Order pricing engine.
//!
//! Pure, synchronous computation over inputs the caller has already
//! fetched: cart lines with snapshotted prices, a promocode record, a
//! delivery method and zone data. The same function backs the
//! pre-checkout preview and the order-save recalculation, so the two
//! call sites can never diverge.

pub mod composer;
pub mod delivery_cost;
pub mod discounts;
pub mod promo;
pub mod zones;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::domain::cart::{self, CartLine};
use crate::domain::delivery::{DeliveryMethod, PaymentMethod};
use crate::domain::discount::DiscountKind;
use crate::domain::promo::PromoCode;
use crate::domain::zone::{DeliveryZone, LatLon};
use crate::errors::PricingError;
use crate::money::round_to_cents;
use crate::stores::PricingStores;

pub use composer::{DeliveryLine, OrderPricingResult, PromoLine, TotalLine};
pub use delivery_cost::DeliveryOutcome;
pub use discounts::{DiscountBreakdown, DiscountInput};
pub use promo::{PromoEvaluation, PromoRejection};

/// Everything one pricing run needs. Gathering these inputs (database
/// lookups, geocoding, user history) is the caller's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub lines: Vec<CartLine>,
    pub city: String,
    pub delivery: DeliveryMethod,
    pub payment: PaymentMethod,
    /// Promocode record looked up by the caller; validity is re-checked
    /// defensively inside the engine.
    pub promocode: Option<PromoCode>,
    /// Resolved externally from the user's order history.
    pub first_order: bool,
    pub point: Option<LatLon>,
    /// Staff zone override; takes precedence over point resolution.
    pub manual_zone: Option<DeliveryZone>,
    /// Manually entered fee, required for on-request zones.
    pub manual_delivery_cost: Option<Decimal>,
    /// Staff goodwill discount; exempt from the automatic-discount cap.
    pub manual_discount: Option<Decimal>,
    pub now: DateTime<Utc>,
}

pub trait OrderPricingEngine: Send + Sync {
    /// Side-effect-free "show me the total before I commit".
    fn preview_total(
        &self,
        request: &PricingRequest,
        stores: &dyn PricingStores,
    ) -> Result<OrderPricingResult, PricingError>;

    /// Same computation, invoked at order-save time. Persisting the
    /// result belongs to the caller.
    fn finalize_total(
        &self,
        request: &PricingRequest,
        stores: &dyn PricingStores,
    ) -> Result<OrderPricingResult, PricingError>;
}

pub struct DeterministicOrderPricingEngine {
    config: PricingConfig,
}

impl DeterministicOrderPricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    fn price_order(
        &self,
        request: &PricingRequest,
        stores: &dyn PricingStores,
    ) -> Result<OrderPricingResult, PricingError> {
        let violations = cart::validate_lines(&request.lines);
        if !violations.is_empty() {
            let summary = violations
                .iter()
                .map(|violation| violation.code.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(PricingError::InvariantViolation(format!(
                "cart failed validation: {summary}"
            )));
        }

        let subtotal = cart::subtotal(&request.lines);
        let promo =
            promo::evaluate_promocode(request.promocode.as_ref(), request.now, request.first_order);

        let breakdown = discounts::compute_discounts(
            subtotal,
            &DiscountInput {
                promo_effect: promo.effect.as_ref(),
                method: &request.delivery,
                first_order: request.first_order,
                payment: request.payment,
                manual_discount: request.manual_discount,
                first_order_discount: stores
                    .active_discount(DiscountKind::FirstOrder, request.now)
                    .as_ref(),
                cash_discount: stores
                    .active_discount(DiscountKind::CashOnDelivery, request.now)
                    .as_ref(),
            },
            self.config.max_discount_percent,
        );

        // Takeaway orders skip zone resolution entirely.
        let delivery_outcome = if request.delivery.is_takeaway() {
            None
        } else {
            let zone = zones::resolve_zone(
                &request.city,
                request.point,
                request.manual_zone.as_ref(),
                stores,
            );
            let discounted = round_to_cents(subtotal - breakdown.total_discount);
            Some(delivery_cost::delivery_cost(
                Some(&zone),
                discounted,
                &request.delivery,
                promo.grants_free_delivery(),
                request.manual_delivery_cost,
            )?)
        };

        Ok(composer::compose_total(
            subtotal,
            breakdown,
            &promo,
            delivery_outcome,
            request.delivery.delivery_type,
        ))
    }
}

impl OrderPricingEngine for DeterministicOrderPricingEngine {
    fn preview_total(
        &self,
        request: &PricingRequest,
        stores: &dyn PricingStores,
    ) -> Result<OrderPricingResult, PricingError> {
        self.price_order(request, stores)
    }

    fn finalize_total(
        &self,
        request: &PricingRequest,
        stores: &dyn PricingStores,
    ) -> Result<OrderPricingResult, PricingError> {
        self.price_order(request, stores)
    }
}
