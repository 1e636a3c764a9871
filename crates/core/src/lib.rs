//! Order pricing and discount computation for a restaurant ordering
//! platform: deterministic totals from cart lines, delivery zones,
//! promocodes, payment method, and admin-curated discounts.

pub mod config;
pub mod domain;
pub mod errors;
pub mod money;
pub mod pricing;
pub mod stores;

pub use config::{ConfigError, ConfigOverrides, LoadOptions, LogFormat, PricingConfig};
pub use domain::cart::{subtotal, validate_lines, CartLine, LineViolation};
pub use domain::delivery::{DeliveryMethod, DeliveryType, PaymentMethod};
pub use domain::discount::{Discount, DiscountKind, DiscountValue};
pub use domain::dish::{Dish, DishId};
pub use domain::promo::{PromoCode, PromoEffect};
pub use domain::zone::{DeliveryZone, LatLon, ZoneId, ZoneKind};
pub use errors::PricingError;
pub use pricing::{
    DeliveryLine, DeliveryOutcome, DeterministicOrderPricingEngine, DiscountBreakdown,
    OrderPricingEngine, OrderPricingResult, PricingRequest, PromoEvaluation, PromoLine,
    PromoRejection, TotalLine,
};
pub use stores::{
    DiscountCatalog, DishCatalog, InMemoryStore, PricingStores, PromoDirectory, ZoneDirectory,
};
