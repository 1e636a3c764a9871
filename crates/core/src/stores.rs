//! Interfaces over the data the engine consumes.
//!
//! Persistence lives outside this crate; these traits describe the
//! lookups the pricing engine needs, and the in-memory implementation
//! backs tests and the operator CLI.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::discount::{Discount, DiscountKind};
use crate::domain::dish::{Dish, DishId};
use crate::domain::promo::PromoCode;
use crate::domain::zone::{DeliveryZone, ZoneId, ZoneKind};

pub trait DishCatalog: Send + Sync {
    fn price_of(&self, dish_id: &DishId) -> Option<Decimal>;
    fn is_active(&self, dish_id: &DishId) -> bool;
}

pub trait PromoDirectory: Send + Sync {
    fn find_code(&self, code: &str) -> Option<PromoCode>;
}

pub trait DiscountCatalog: Send + Sync {
    /// The active admin-curated discount of the given kind, if any.
    fn active_discount(&self, kind: DiscountKind, now: DateTime<Utc>) -> Option<Discount>;
}

pub trait ZoneDirectory: Send + Sync {
    fn zones_for_city(&self, city: &str) -> Vec<DeliveryZone>;

    /// The city's "needs clarification" fallback zone. Resolution must
    /// never fail, so a sentinel is synthesized when the directory has
    /// no stored row for the city.
    fn undetermined_zone(&self, city: &str) -> DeliveryZone {
        self.zones_for_city(city)
            .into_iter()
            .find(DeliveryZone::is_undetermined)
            .unwrap_or_else(|| DeliveryZone {
                id: ZoneId(format!("{city}:undetermined")),
                name: "undetermined".to_owned(),
                city: city.to_owned(),
                kind: ZoneKind::Undetermined,
                priority: i32::MAX,
                polygon: None,
            })
    }
}

/// Everything the pricing engine reads while computing a total.
pub trait PricingStores: DiscountCatalog + ZoneDirectory {}

impl<T: DiscountCatalog + ZoneDirectory> PricingStores for T {}

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    pub dishes: Vec<Dish>,
    pub promos: Vec<PromoCode>,
    pub discounts: Vec<Discount>,
    pub zones: Vec<DeliveryZone>,
}

impl DishCatalog for InMemoryStore {
    fn price_of(&self, dish_id: &DishId) -> Option<Decimal> {
        self.dishes.iter().find(|dish| &dish.id == dish_id).map(|dish| dish.price)
    }

    fn is_active(&self, dish_id: &DishId) -> bool {
        self.dishes.iter().any(|dish| &dish.id == dish_id && dish.active)
    }
}

impl PromoDirectory for InMemoryStore {
    fn find_code(&self, code: &str) -> Option<PromoCode> {
        self.promos.iter().find(|promo| promo.code == code).cloned()
    }
}

impl DiscountCatalog for InMemoryStore {
    fn active_discount(&self, kind: DiscountKind, now: DateTime<Utc>) -> Option<Discount> {
        self.discounts
            .iter()
            .find(|discount| discount.kind == kind && discount.is_active_at(now))
            .cloned()
    }
}

impl ZoneDirectory for InMemoryStore {
    fn zones_for_city(&self, city: &str) -> Vec<DeliveryZone> {
        self.zones.iter().filter(|zone| zone.city == city).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use super::{DiscountCatalog, DishCatalog, InMemoryStore, ZoneDirectory};
    use crate::domain::discount::{Discount, DiscountKind, DiscountValue};
    use crate::domain::dish::{Dish, DishId};
    use crate::domain::zone::ZoneKind;

    #[test]
    fn dish_catalog_returns_price_and_activity() {
        let store = InMemoryStore {
            dishes: vec![Dish {
                id: DishId("maki-8".to_owned()),
                name: "Maki set".to_owned(),
                price: Decimal::new(42_000, 2),
                active: true,
            }],
            ..InMemoryStore::default()
        };

        assert_eq!(store.price_of(&DishId("maki-8".to_owned())), Some(Decimal::new(42_000, 2)));
        assert!(store.is_active(&DishId("maki-8".to_owned())));
        assert!(!store.is_active(&DishId("gone".to_owned())));
    }

    #[test]
    fn expired_discounts_are_not_returned() {
        let now = Utc::now();
        let store = InMemoryStore {
            discounts: vec![Discount {
                kind: DiscountKind::FirstOrder,
                value: DiscountValue::Percent { percent: Decimal::TEN },
                is_active: true,
                valid_from: now - Duration::days(30),
                valid_to: now - Duration::days(1),
            }],
            ..InMemoryStore::default()
        };

        assert!(store.active_discount(DiscountKind::FirstOrder, now).is_none());
    }

    #[test]
    fn undetermined_zone_is_synthesized_when_missing() {
        let store = InMemoryStore::default();
        let zone = store.undetermined_zone("Novi Sad");
        assert!(matches!(zone.kind, ZoneKind::Undetermined));
        assert_eq!(zone.city, "Novi Sad");
    }
}
