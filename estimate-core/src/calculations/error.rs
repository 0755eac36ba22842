use rust_decimal::Decimal;
use thiserror::Error;

/// The single failure mode of the pricing calculators: an argument outside
/// its domain. The variant identifies which check failed so the caller can
/// present a precise message; no partial results accompany an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidDimension {
    /// A dimension or count that must be strictly positive was not.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    /// A money rate below zero.
    #[error("rate cannot be negative, got {value}")]
    NegativeRate { value: Decimal },

    /// Inputs so large the derived stick count does not fit the result type.
    #[error("{field} produces an out-of-range result ({value})")]
    OutOfRange { field: &'static str, value: Decimal },
}
