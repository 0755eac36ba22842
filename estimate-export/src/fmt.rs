//! Display formatting for money and quantities.
//!
//! All amounts render in Indian Rupees with two decimal places and comma
//! thousands grouping (Indian estimates conventionally read `₹1,234.56`).

use estimate_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats a money value with the rupee sign: `₹1,234.56`.
pub fn money(value: Decimal) -> String {
    format!("₹{}", grouped(value))
}

/// Formats a money value without the sign, still grouped: `1,234.56`.
pub fn grouped(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut out = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{out}.{frac_part}")
}

/// Formats a quantity to two decimal places, no grouping.
pub fn qty(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(dec!(1234.56)), "₹1,234.56");
        assert_eq!(money(dec!(1234567.89)), "₹1,234,567.89");
    }

    #[test]
    fn money_pads_to_two_decimals() {
        assert_eq!(money(dec!(975)), "₹975.00");
        assert_eq!(money(dec!(0.5)), "₹0.50");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(money(dec!(99.995)), "₹100.00");
    }

    #[test]
    fn grouped_handles_negative_values() {
        assert_eq!(grouped(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(money(dec!(999.99)), "₹999.99");
        assert_eq!(money(Decimal::ZERO), "₹0.00");
    }

    #[test]
    fn qty_is_two_decimals_ungrouped() {
        assert_eq!(qty(dec!(1234.5)), "1234.50");
    }
}
