use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishId(pub String);

/// Catalog entry. `price` is the current menu price; cart and order
/// lines snapshot it at add-time, so later catalog edits never alter
/// an existing cart or order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: Decimal,
    pub active: bool,
}
