//! Area-based pricing for sheet goods (shutters, partitions, panels).
//!
//! Multiplies a rectangular face into an area and a money amount. No unit
//! conversion is performed; the caller is responsible for supplying length,
//! width, and rate in consistent units.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::compute_area;
//!
//! let quote = compute_area(dec!(6.0), dec!(4.0), dec!(150.00)).unwrap();
//!
//! assert_eq!(quote.area, dec!(24.0));
//! assert_eq!(quote.amount, dec!(3600.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvalidDimension;

/// Result of pricing one rectangular area item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaQuote {
    /// Face area, `length × width`, in the caller's units.
    pub area: Decimal,

    /// Money amount, `area × rate`.
    pub amount: Decimal,
}

/// Prices a rectangular area at a per-unit rate.
///
/// # Errors
///
/// Returns [`InvalidDimension`] when `length` or `width` is not strictly
/// positive, or when `rate` is negative. A zero rate is valid and yields a
/// zero amount.
pub fn compute_area(
    length: Decimal,
    width: Decimal,
    rate: Decimal,
) -> Result<AreaQuote, InvalidDimension> {
    if length <= Decimal::ZERO {
        return Err(InvalidDimension::NonPositive {
            field: "length",
            value: length,
        });
    }
    if width <= Decimal::ZERO {
        return Err(InvalidDimension::NonPositive {
            field: "width",
            value: width,
        });
    }
    if rate < Decimal::ZERO {
        return Err(InvalidDimension::NegativeRate { value: rate });
    }

    let area = length * width;

    Ok(AreaQuote {
        area,
        amount: area * rate,
    })
}
