pub mod calculations;
pub mod models;

pub use calculations::{
    AreaQuote, CostBreakdown, InvalidDimension, ProfileJob, WastageCalculation,
};
pub use models::*;
