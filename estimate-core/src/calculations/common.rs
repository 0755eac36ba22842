//! Shared helpers for estimate calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from zero.
/// The calculators never round their own results; this is for the display and
/// export layers, which present money to two places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(17.948)), dec!(17.95));
/// assert_eq!(round_half_up(dec!(17.945)), dec!(17.95));
/// assert_eq!(round_half_up(dec!(-2.005)), dec!(-2.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(99.994));

        assert_eq!(result, dec!(99.99));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(99.995));

        assert_eq!(result, dec!(100.00));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-99.995));

        assert_eq!(result, dec!(-100.00)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(450.25));

        assert_eq!(result, dec!(450.25));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }
}
