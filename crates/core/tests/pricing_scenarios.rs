//! End-to-end pricing runs against the deterministic engine: the
//! canonical checkout scenarios, determinism of preview vs finalize,
//! and the rounding/cap properties.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tavolo_core::{
    CartLine, DeliveryLine, DeliveryMethod, DeliveryType, DeliveryZone, Discount,
    DeterministicOrderPricingEngine, DiscountKind, DiscountValue, DishId, InMemoryStore, LatLon,
    OrderPricingEngine, PaymentMethod, PricingConfig, PricingError, PricingRequest, PromoCode,
    PromoEffect, ZoneId, ZoneKind,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
}

fn engine() -> DeterministicOrderPricingEngine {
    DeterministicOrderPricingEngine::new(PricingConfig::default())
}

fn money(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn delivery_method(delivery_type: DeliveryType, discount_percent: Option<Decimal>) -> DeliveryMethod {
    DeliveryMethod {
        delivery_type,
        city: "Beograd".to_owned(),
        is_active: true,
        discount_percent,
        default_delivery_cost: None,
        min_order_amount: None,
        accepts_from: None,
        accepts_until: None,
        handoff_from: None,
        handoff_until: None,
    }
}

fn percent_promo(code: &str, percent: Decimal) -> PromoCode {
    PromoCode {
        code: code.to_owned(),
        valid_from: fixed_now() - Duration::days(7),
        valid_to: fixed_now() + Duration::days(7),
        is_active: true,
        first_order_only: false,
        effect: PromoEffect::Percent { percent },
    }
}

fn fixed_zone(name: &str, cost: Decimal, is_promo: bool, threshold: Option<Decimal>) -> DeliveryZone {
    DeliveryZone {
        id: ZoneId(name.to_owned()),
        name: name.to_owned(),
        city: "Beograd".to_owned(),
        kind: ZoneKind::Fixed { delivery_cost: cost, is_promo, promo_min_order_amount: threshold },
        priority: 0,
        polygon: Some(vec![
            LatLon { lat: 44.0, lon: 20.0 },
            LatLon { lat: 44.0, lon: 21.0 },
            LatLon { lat: 45.0, lon: 21.0 },
            LatLon { lat: 45.0, lon: 20.0 },
        ]),
    }
}

fn inside_point() -> LatLon {
    LatLon { lat: 44.5, lon: 20.5 }
}

fn base_request(lines: Vec<CartLine>, delivery: DeliveryMethod) -> PricingRequest {
    PricingRequest {
        lines,
        city: "Beograd".to_owned(),
        delivery,
        payment: PaymentMethod::Card,
        promocode: None,
        first_order: false,
        point: None,
        manual_zone: None,
        manual_delivery_cost: None,
        manual_discount: None,
        now: fixed_now(),
    }
}

fn lines_totaling(subtotal: Decimal) -> Vec<CartLine> {
    vec![CartLine::new(DishId("set-menu".to_owned()), subtotal, 1)]
}

#[test]
fn scenario_a_percent_promo_with_fixed_zone_fee() {
    let store = InMemoryStore {
        zones: vec![fixed_zone("center", money(50_000), false, None)],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        lines_totaling(money(550_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    request.promocode = Some(percent_promo("percnt10", Decimal::TEN));
    request.point = Some(inside_point());

    let result = engine().preview_total(&request, &store).expect("scenario A");
    assert_eq!(result.subtotal, money(550_000));
    assert_eq!(result.discounts.total_discount, money(55_000));
    assert_eq!(result.delivery, DeliveryLine::Included { cost: money(50_000) });
    assert_eq!(result.total.amount, money(545_000));
    assert_eq!(result.total.title, "Total amount, incl. delivery");
}

#[test]
fn scenario_b_promo_zone_waives_fee_on_discounted_subtotal() {
    let store = InMemoryStore {
        zones: vec![fixed_zone("promo-zone", money(50_000), true, Some(money(250_000)))],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        lines_totaling(money(550_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    request.promocode = Some(percent_promo("percnt10", Decimal::TEN));
    request.point = Some(inside_point());

    let result = engine().preview_total(&request, &store).expect("scenario B");
    // discounted subtotal 4950.00 >= 2500.00 threshold
    assert_eq!(result.delivery, DeliveryLine::Included { cost: Decimal::ZERO });
    assert_eq!(result.total.amount, money(495_000));
}

#[test]
fn scenario_c_unresolved_zone_yields_pending_total_excl_delivery() {
    let store = InMemoryStore::default();
    let mut request = base_request(
        lines_totaling(money(300_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    // a point no polygon contains
    request.point = Some(LatLon { lat: 10.0, lon: 10.0 });

    let result = engine().preview_total(&request, &store).expect("scenario C");
    assert!(matches!(result.delivery, DeliveryLine::Pending { .. }));
    assert_eq!(result.total.amount, money(300_000));
    assert_eq!(result.total.title, "Total amount, excl. delivery");
    assert!(result.detail.iter().any(|d| d.contains("outside our service area")));
}

#[test]
fn scenario_d_takeaway_discount_without_delivery_line() {
    let store = InMemoryStore::default();
    let request = base_request(
        lines_totaling(money(100_000)),
        delivery_method(DeliveryType::Takeaway, Some(Decimal::TEN)),
    );

    let result = engine().preview_total(&request, &store).expect("scenario D");
    assert_eq!(result.discounts.delivery_type_discount, money(10_000));
    assert_eq!(result.discounts.total_discount, money(10_000));
    assert_eq!(result.delivery, DeliveryLine::NotApplicable);
    assert_eq!(result.total.amount, money(90_000));
    assert_eq!(result.total.title, "Total amount");
}

#[test]
fn scenario_e_stacked_discounts_hit_the_cap() {
    let now = fixed_now();
    let store = InMemoryStore {
        discounts: vec![
            Discount {
                kind: DiscountKind::FirstOrder,
                value: DiscountValue::Percent { percent: Decimal::TEN },
                is_active: true,
                valid_from: now - Duration::days(30),
                valid_to: now + Duration::days(30),
            },
            Discount {
                kind: DiscountKind::CashOnDelivery,
                value: DiscountValue::Percent { percent: Decimal::TEN },
                is_active: true,
                valid_from: now - Duration::days(30),
                valid_to: now + Duration::days(30),
            },
        ],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        lines_totaling(money(1_000_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    request.promocode = Some(PromoCode {
        code: "flat3000".to_owned(),
        valid_from: now - Duration::days(7),
        valid_to: now + Duration::days(7),
        is_active: true,
        first_order_only: false,
        effect: PromoEffect::Flat { amount: money(300_000) },
    });
    request.first_order = true;
    request.payment = PaymentMethod::Cash;
    // no zone data: pending delivery, total reported excl. delivery

    let result = engine().preview_total(&request, &store).expect("scenario E");
    assert_eq!(result.discounts.promo_discount, money(300_000));
    assert_eq!(result.discounts.first_order_discount, money(100_000));
    assert_eq!(result.discounts.cash_discount, money(100_000));
    assert!(result.discounts.cap_applied);
    assert_eq!(result.discounts.total_discount, money(250_000));
    assert!(result.detail.iter().any(|d| d.contains("limited")));
    assert_eq!(result.total.amount, money(750_000));
}

#[test]
fn preview_and_finalize_are_bit_identical() {
    let store = InMemoryStore {
        zones: vec![fixed_zone("center", money(50_000), false, None)],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        vec![
            CartLine::new(DishId("maki-8".to_owned()), money(42_000), 3),
            CartLine::new(DishId("miso".to_owned()), money(18_050), 2),
        ],
        delivery_method(DeliveryType::Delivery, None),
    );
    request.promocode = Some(percent_promo("percnt10", Decimal::TEN));
    request.point = Some(inside_point());

    let engine = engine();
    let preview = engine.preview_total(&request, &store).expect("preview");
    let finalized = engine.finalize_total(&request, &store).expect("finalize");
    assert_eq!(preview, finalized);

    for _ in 0..5 {
        assert_eq!(engine.preview_total(&request, &store).expect("repeat"), preview);
    }
}

#[test]
fn rounded_components_sum_to_total_before_capping() {
    let store = InMemoryStore::default();
    let mut request = base_request(
        vec![CartLine::new(DishId("odd".to_owned()), money(33_333), 1)],
        delivery_method(DeliveryType::Takeaway, Some(Decimal::new(333, 2))),
    );
    request.promocode = Some(percent_promo("odd-promo", Decimal::new(777, 2)));

    let result = engine().preview_total(&request, &store).expect("rounding run");
    let breakdown = &result.discounts;
    assert!(!breakdown.cap_applied);
    assert_eq!(
        breakdown.total_discount,
        breakdown.promo_discount
            + breakdown.delivery_type_discount
            + breakdown.first_order_discount
            + breakdown.cash_discount
    );
}

#[test]
fn free_delivery_promo_with_unresolved_zone_stays_pending() {
    let store = InMemoryStore::default();
    let mut request = base_request(
        lines_totaling(money(300_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    request.promocode = Some(PromoCode {
        code: "freedel".to_owned(),
        valid_from: fixed_now() - Duration::days(7),
        valid_to: fixed_now() + Duration::days(7),
        is_active: true,
        first_order_only: false,
        effect: PromoEffect::FreeDelivery,
    });

    let result = engine().preview_total(&request, &store).expect("free delivery pending");
    assert!(matches!(result.delivery, DeliveryLine::Pending { .. }));
    assert!(result.detail.iter().any(|d| d.contains("free delivery promocode")));
}

#[test]
fn rejected_promo_degrades_with_note_instead_of_failing() {
    let store = InMemoryStore {
        zones: vec![fixed_zone("center", money(50_000), false, None)],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        lines_totaling(money(550_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    let mut expired = percent_promo("percnt10", Decimal::TEN);
    expired.valid_to = fixed_now() - Duration::days(1);
    request.promocode = Some(expired);
    request.point = Some(inside_point());

    let result = engine().preview_total(&request, &store).expect("degraded promo");
    assert!(!result.promocode.accepted);
    assert_eq!(result.discounts.promo_discount, Decimal::ZERO);
    assert_eq!(result.total.amount, money(600_000));
    assert!(result.detail.iter().any(|d| d.contains("validity")));
}

#[test]
fn on_request_zone_without_manual_cost_is_a_hard_error() {
    let store = InMemoryStore {
        zones: vec![DeliveryZone {
            id: ZoneId("on-request".to_owned()),
            name: "on-request".to_owned(),
            city: "Beograd".to_owned(),
            kind: ZoneKind::OnRequest,
            priority: 0,
            polygon: Some(vec![
                LatLon { lat: 44.0, lon: 20.0 },
                LatLon { lat: 44.0, lon: 21.0 },
                LatLon { lat: 45.0, lon: 21.0 },
                LatLon { lat: 45.0, lon: 20.0 },
            ]),
        }],
        ..InMemoryStore::default()
    };
    let mut request = base_request(
        lines_totaling(money(300_000)),
        delivery_method(DeliveryType::Delivery, None),
    );
    request.point = Some(inside_point());

    let err = engine().finalize_total(&request, &store).expect_err("manual cost required");
    assert!(matches!(err, PricingError::MissingManualDeliveryCost { .. }));

    request.manual_delivery_cost = Some(money(70_000));
    let result = engine().finalize_total(&request, &store).expect("manual cost supplied");
    assert_eq!(result.delivery, DeliveryLine::Included { cost: money(70_000) });
}

#[test]
fn empty_cart_is_rejected_as_invariant_violation() {
    let store = InMemoryStore::default();
    let request =
        base_request(Vec::new(), delivery_method(DeliveryType::Takeaway, None));

    let err = engine().preview_total(&request, &store).expect_err("empty cart");
    assert!(matches!(err, PricingError::InvariantViolation(_)));
}

#[test]
fn manual_staff_discount_rides_above_the_cap() {
    let store = InMemoryStore::default();
    let mut request = base_request(
        lines_totaling(money(1_000_000)),
        delivery_method(DeliveryType::Takeaway, None),
    );
    request.promocode = Some(PromoCode {
        code: "flat9000".to_owned(),
        valid_from: fixed_now() - Duration::days(7),
        valid_to: fixed_now() + Duration::days(7),
        is_active: true,
        first_order_only: false,
        effect: PromoEffect::Flat { amount: money(900_000) },
    });
    request.manual_discount = Some(money(100_000));

    let result = engine().preview_total(&request, &store).expect("manual discount");
    // automatic capped at 2500.00, manual 1000.00 applied on top
    assert!(result.discounts.cap_applied);
    assert_eq!(result.discounts.total_discount, money(350_000));
    assert_eq!(result.total.amount, money(650_000));
}
