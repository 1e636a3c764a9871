use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::dish::DishId;
use crate::money::round_to_cents;

/// A single cart or order line with a snapshotted unit price.
///
/// `line_amount == unit_price * quantity` holds by construction: the
/// amount is recomputed whenever quantity or price changes and is never
/// accepted from outside (deserialization recomputes it too).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "CartLineWire")]
pub struct CartLine {
    dish_id: DishId,
    unit_price: Decimal,
    quantity: u32,
    line_amount: Decimal,
}

#[derive(Deserialize)]
struct CartLineWire {
    dish_id: DishId,
    unit_price: Decimal,
    quantity: u32,
}

impl From<CartLineWire> for CartLine {
    fn from(wire: CartLineWire) -> Self {
        CartLine::new(wire.dish_id, wire.unit_price, wire.quantity)
    }
}

impl CartLine {
    pub fn new(dish_id: DishId, unit_price: Decimal, quantity: u32) -> Self {
        let mut line = Self { dish_id, unit_price, quantity, line_amount: Decimal::ZERO };
        line.recompute_amount();
        line
    }

    pub fn dish_id(&self) -> &DishId {
        &self.dish_id
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_amount(&self) -> Decimal {
        self.line_amount
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute_amount();
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
        self.recompute_amount();
    }

    fn recompute_amount(&mut self) {
        self.line_amount = round_to_cents(self.unit_price * Decimal::from(self.quantity));
    }
}

/// Sum of line amounts. Always computed fresh from the lines, never
/// stored as independently editable truth.
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    round_to_cents(lines.iter().map(CartLine::line_amount).sum())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineViolation {
    pub code: String,
    pub message: String,
}

/// Structural validation of cart lines. Returns violations instead of
/// panicking; an empty result means the cart is priceable.
pub fn validate_lines(lines: &[CartLine]) -> Vec<LineViolation> {
    let mut violations = Vec::new();

    if lines.is_empty() {
        violations.push(LineViolation {
            code: "EMPTY_CART".to_string(),
            message: "Cart must contain at least one line".to_string(),
        });
        return violations;
    }

    for line in lines {
        let dish_id = line.dish_id.0.trim();
        if dish_id.is_empty() {
            violations.push(LineViolation {
                code: "MISSING_DISH_ID".to_string(),
                message: "Cart line is missing a dish id".to_string(),
            });
            continue;
        }

        if line.quantity == 0 {
            violations.push(LineViolation {
                code: "ZERO_QUANTITY".to_string(),
                message: format!("Dish {dish_id} has zero quantity"),
            });
        }

        if line.unit_price <= Decimal::ZERO {
            violations.push(LineViolation {
                code: "NON_POSITIVE_UNIT_PRICE".to_string(),
                message: format!("Dish {dish_id} has a non-positive unit price"),
            });
        }
    }

    violations
}
