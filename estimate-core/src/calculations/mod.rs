//! Calculation modules for aluminum works estimates.
//!
//! This module provides the pricing logic behind the estimate builder,
//! organized by product category: area-based pricing for sheet goods and
//! profile wastage analysis for frame material cut from stock bars.

pub mod area;
pub mod common;
pub mod error;
pub mod profile;

pub use area::{AreaQuote, compute_area};
pub use error::InvalidDimension;
pub use profile::{CostBreakdown, ProfileJob, WastageCalculation, compute_wastage};
