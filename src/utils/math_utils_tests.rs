//! Tests for the rounding and percentage-diff helpers.

#[cfg(test)]
mod tests {
    use crate::utils::math_utils::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_to(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(round_to(dec!(1.23449), 4), dec!(1.2345));
    }

    #[test]
    fn test_round_up_is_ceiling_to_two_places() {
        assert_eq!(round_up(dec!(1.001)), dec!(1.01));
        assert_eq!(round_up(dec!(75)), dec!(75));
        assert_eq!(round_up(dec!(-1.009)), dec!(-1.00));
    }

    #[test]
    fn test_round_price_uses_four_places_below_one() {
        assert_eq!(round_price(dec!(0.123456)), dec!(0.1235));
        assert_eq!(round_price(dec!(1.23456)), dec!(1.23));
        assert_eq!(round_price(dec!(1)), dec!(1));
    }

    #[test]
    fn test_price_diff_whole_prices() {
        let (amount, percent) = price_diff(dec!(2.00), dec!(1.00));
        assert_eq!(amount, dec!(1.00));
        assert_eq!(percent, dec!(100));
    }

    #[test]
    fn test_price_diff_sub_unit_prices() {
        let (amount, percent) = price_diff(dec!(0.5), dec!(0.4));
        assert_eq!(amount, dec!(0.1000));
        assert_eq!(percent, dec!(25));
    }

    #[test]
    fn test_price_diff_guards_zero_previous() {
        let (amount, percent) = price_diff(dec!(3.00), dec!(0));
        assert_eq!(amount, dec!(3.00));
        assert_eq!(percent, dec!(0));
    }
}
