//! Fixed-point money arithmetic.
//!
//! Every monetary value is a base-10 `Decimal` with two fractional
//! digits. Intermediate percentage math is rounded to cents at each
//! computation boundary, not at the end of a multi-step calculation,
//! so the sum of reported components always equals the reported total.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places, half-up.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percent / 100`, rounded to cents immediately.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    round_to_cents(amount * percent / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{percent_of, round_to_cents};

    #[test]
    fn rounds_half_up_at_the_cent() {
        assert_eq!(round_to_cents(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_to_cents(Decimal::new(12344, 3)), Decimal::new(1234, 2));
        assert_eq!(round_to_cents(Decimal::new(125, 3)), Decimal::new(13, 2));
    }

    #[test]
    fn percent_of_rounds_immediately() {
        // 333.33 * 15% = 49.9995, reported as 50.00 not carried raw
        let amount = Decimal::new(33333, 2);
        assert_eq!(percent_of(amount, Decimal::new(15, 0)), Decimal::new(5000, 2));
    }

    #[test]
    fn percent_of_ten_percent_of_5500() {
        let amount = Decimal::new(550_000, 2);
        assert_eq!(percent_of(amount, Decimal::TEN), Decimal::new(55_000, 2));
    }
}
