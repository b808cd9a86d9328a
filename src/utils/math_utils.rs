//! Fixed-precision rounding and percentage-diff helpers shared by the lot
//! and indicator engines.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{PRICE_PRECISION, SUB_UNIT_PRICE_PRECISION};

/// Rounds a value to `dp` decimal places, half away from zero.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Ceiling-rounds a value to two decimal places.
pub fn round_up(value: Decimal) -> Decimal {
    (value * dec!(100)).ceil() / dec!(100)
}

/// Rounds a price-like value: four decimal places below 1.0, two otherwise.
pub fn round_price(value: Decimal) -> Decimal {
    if value < Decimal::ONE {
        round_to(value, SUB_UNIT_PRICE_PRECISION)
    } else {
        round_to(value, PRICE_PRECISION)
    }
}

/// Returns the day change (amount, percent) between two prices. Percent is
/// zero when there is no previous price to compare against.
pub fn price_diff(last: Decimal, prev: Decimal) -> (Decimal, Decimal) {
    let amount = if last < Decimal::ONE {
        round_to(last - prev, SUB_UNIT_PRICE_PRECISION)
    } else {
        round_up(last - prev)
    };
    let percent = if prev.is_zero() {
        Decimal::ZERO
    } else {
        round_up(amount / prev * dec!(100))
    };
    (amount, percent)
}
