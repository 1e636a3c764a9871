pub mod cart;
pub mod delivery;
pub mod discount;
pub mod dish;
pub mod promo;
pub mod zone;
