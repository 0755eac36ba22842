//! Aluminum profile wastage analysis for frame construction.
//!
//! Shutter frames are cut from stock bars of a fixed purchased length. This
//! module converts shutter geometry and a stock length into the number of
//! whole bars required, the leftover (wastage) material, and a cost split
//! between useful and wasted length.
//!
//! # Calculation
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | `perimeter_per_shutter = 2 × (height + width)` |
//! | 2 | `total_required_length = perimeter × num_shutters` |
//! | 3 | `sticks_needed = ceil(total_required_length / stock_length)` |
//! | 4 | `total_supplied_length = sticks_needed × stock_length` |
//! | 5 | `wastage_length = supplied − required` |
//! | 6 | `wastage_percentage = wastage / supplied × 100` (0 when nothing supplied) |
//! | 7 | cost breakdown: supplied, wasted, and required length × rate |
//!
//! Sticks are counted over the *aggregate* required length, never per
//! shutter. Offcuts from one shutter are assumed usable on the next, which
//! is the cost-minimizing policy for a single uniform stock length.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::{ProfileJob, compute_wastage};
//!
//! let job = ProfileJob {
//!     shutter_height: dec!(7.0),
//!     shutter_width: dec!(3.0),
//!     num_shutters: 4,
//!     stock_length: dec!(19.5),
//!     rate_per_unit: dec!(10.00),
//! };
//!
//! let calc = compute_wastage(&job).unwrap();
//!
//! assert_eq!(calc.total_required_length, dec!(80.0));
//! assert_eq!(calc.sticks_needed, 5);
//! assert_eq!(calc.total_supplied_length, dec!(97.5));
//! assert_eq!(calc.wastage_length, dec!(17.5));
//! assert_eq!(calc.cost_breakdown.material_cost, dec!(975.00));
//! assert_eq!(calc.cost_breakdown.useful_cost, dec!(800.00));
//! assert_eq!(calc.cost_breakdown.wastage_cost, dec!(175.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::error::InvalidDimension;

/// Input for one profile wastage calculation.
///
/// `num_shutters` is a whole count by construction; fractional shutter
/// counts are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileJob {
    /// Shutter height, in the same linear unit as `stock_length`.
    pub shutter_height: Decimal,

    /// Shutter width.
    pub shutter_width: Decimal,

    /// Number of identical shutters to frame.
    pub num_shutters: u32,

    /// Length of one stock bar as purchased.
    pub stock_length: Decimal,

    /// Money rate per linear unit. Zero disables the cost breakdown.
    pub rate_per_unit: Decimal,
}

impl ProfileJob {
    /// A job with no pricing attached; the cost breakdown comes back zero.
    pub fn unpriced(
        shutter_height: Decimal,
        shutter_width: Decimal,
        num_shutters: u32,
        stock_length: Decimal,
    ) -> Self {
        Self {
            shutter_height,
            shutter_width,
            num_shutters,
            stock_length,
            rate_per_unit: Decimal::ZERO,
        }
    }

    fn validate(&self) -> Result<(), InvalidDimension> {
        let positive = [
            ("shutter_height", self.shutter_height),
            ("shutter_width", self.shutter_width),
            ("num_shutters", Decimal::from(self.num_shutters)),
            ("stock_length", self.stock_length),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(InvalidDimension::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Material and money split for one wastage calculation.
///
/// When the rate is positive, `material_cost = wastage_cost + useful_cost`
/// holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Cost of every supplied stick.
    pub material_cost: Decimal,

    /// Cost attributable to offcuts.
    pub wastage_cost: Decimal,

    /// Cost of the length actually built into frames.
    pub useful_cost: Decimal,
}

impl CostBreakdown {
    const ZERO: Self = Self {
        material_cost: Decimal::ZERO,
        wastage_cost: Decimal::ZERO,
        useful_cost: Decimal::ZERO,
    };
}

/// Result of one profile wastage calculation. Created fresh on every call
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WastageCalculation {
    /// Sum of frame perimeters, unrounded.
    pub total_required_length: Decimal,

    /// Whole stock bars to purchase.
    pub sticks_needed: u32,

    /// `sticks_needed × stock_length`; always ≥ the required length.
    pub total_supplied_length: Decimal,

    /// Leftover material, `supplied − required`.
    pub wastage_length: Decimal,

    /// Wastage as a share of supplied material, in percent.
    pub wastage_percentage: Decimal,

    /// Three-way cost split; all zero when the job carries no rate.
    pub cost_breakdown: CostBreakdown,
}

/// Computes the stock bars, wastage, and cost split for a profile job.
///
/// Pure function of the job's five fields: no I/O, no hidden state, and
/// identical inputs always produce identical results.
///
/// # Errors
///
/// Returns [`InvalidDimension`] when any of height, width, shutter count,
/// or stock length is not strictly positive. A zero rate is not an error;
/// it yields an all-zero [`CostBreakdown`].
pub fn compute_wastage(job: &ProfileJob) -> Result<WastageCalculation, InvalidDimension> {
    job.validate()?;

    let perimeter_per_shutter = Decimal::TWO * (job.shutter_height + job.shutter_width);
    let total_required_length = perimeter_per_shutter * Decimal::from(job.num_shutters);

    // Exact decimal division keeps the ceiling honest at exact multiples:
    // required == k × stock must give k sticks, not k + 1.
    let sticks = (total_required_length / job.stock_length).ceil();
    let sticks_needed = sticks
        .to_u32()
        .ok_or(InvalidDimension::OutOfRange {
            field: "sticks_needed",
            value: sticks,
        })?;

    let total_supplied_length = Decimal::from(sticks_needed) * job.stock_length;
    let wastage_length = total_supplied_length - total_required_length;
    let wastage_percentage = if total_supplied_length > Decimal::ZERO {
        wastage_length / total_supplied_length * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let cost_breakdown = if job.rate_per_unit > Decimal::ZERO {
        CostBreakdown {
            material_cost: total_supplied_length * job.rate_per_unit,
            wastage_cost: wastage_length * job.rate_per_unit,
            useful_cost: total_required_length * job.rate_per_unit,
        }
    } else {
        CostBreakdown::ZERO
    };

    Ok(WastageCalculation {
        total_required_length,
        sticks_needed,
        total_supplied_length,
        wastage_length,
        wastage_percentage,
        cost_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn standard_job() -> ProfileJob {
        ProfileJob {
            shutter_height: dec!(7.0),
            shutter_width: dec!(3.0),
            num_shutters: 4,
            stock_length: dec!(19.5),
            rate_per_unit: dec!(10.00),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[test]
    fn standard_case_matches_worked_example() {
        let calc = compute_wastage(&standard_job()).unwrap();

        assert_eq!(calc.total_required_length, dec!(80.0));
        assert_eq!(calc.sticks_needed, 5);
        assert_eq!(calc.total_supplied_length, dec!(97.5));
        assert_eq!(calc.wastage_length, dec!(17.5));
    }

    #[test]
    fn standard_case_wastage_percentage() {
        let calc = compute_wastage(&standard_job()).unwrap();

        // 17.5 / 97.5 × 100 ≈ 17.95%
        assert_eq!(
            calc.wastage_percentage.round_dp(2),
            dec!(17.95)
        );
    }

    #[test]
    fn exact_multiple_does_not_round_up_an_extra_stick() {
        // Perimeter 2 × (5 + 5) = 20, one shutter, stock 20: exactly one bar.
        let job = ProfileJob::unpriced(dec!(5), dec!(5), 1, dec!(20));

        let calc = compute_wastage(&job).unwrap();

        assert_eq!(calc.total_required_length, dec!(20));
        assert_eq!(calc.sticks_needed, 1);
        assert_eq!(calc.wastage_length, Decimal::ZERO);
        assert_eq!(calc.wastage_percentage, Decimal::ZERO);
    }

    #[test]
    fn exact_multiple_across_several_sticks() {
        // Required 3 × stock exactly: three sticks, zero wastage.
        let job = ProfileJob::unpriced(dec!(10), dec!(4.625), 2, dec!(19.5));

        let calc = compute_wastage(&job).unwrap();

        assert_eq!(calc.total_required_length, dec!(58.5));
        assert_eq!(calc.sticks_needed, 3);
        assert_eq!(calc.wastage_length, Decimal::ZERO);
    }

    #[test]
    fn infinitesimal_excess_needs_one_more_stick() {
        // Required 20.001 against stock 20: two bars, nearly one wasted.
        let job = ProfileJob::unpriced(dec!(5.0005), dec!(5), 1, dec!(20));

        let calc = compute_wastage(&job).unwrap();

        assert_eq!(calc.total_required_length, dec!(20.001));
        assert_eq!(calc.sticks_needed, 2);
        assert_eq!(calc.wastage_length, dec!(19.999));
    }

    #[test]
    fn supplied_never_less_than_required() {
        let cases = [
            (dec!(3.3), dec!(2.1), 7, dec!(19.5)),
            (dec!(12), dec!(8), 1, dec!(10)),
            (dec!(0.5), dec!(0.5), 100, dec!(6)),
        ];

        for (h, w, n, stock) in cases {
            let calc = compute_wastage(&ProfileJob::unpriced(h, w, n, stock)).unwrap();

            assert!(
                calc.total_supplied_length >= calc.total_required_length,
                "supplied {} < required {} for h={h} w={w} n={n} stock={stock}",
                calc.total_supplied_length,
                calc.total_required_length,
            );
            assert!(calc.wastage_length >= Decimal::ZERO);
        }
    }

    #[test]
    fn aggregate_rounding_beats_per_shutter_rounding() {
        // Per shutter: ceil(20 / 19.5) = 2 bars each, 8 bars for four shutters.
        // Aggregate: ceil(80 / 19.5) = 5 bars. The calculator must do the latter.
        let calc = compute_wastage(&standard_job()).unwrap();

        assert_eq!(calc.sticks_needed, 5);
    }

    // =========================================================================
    // Cost breakdown
    // =========================================================================

    #[test]
    fn zero_rate_disables_cost_breakdown() {
        let job = ProfileJob::unpriced(dec!(7.0), dec!(3.0), 4, dec!(19.5));

        let calc = compute_wastage(&job).unwrap();

        assert_eq!(calc.cost_breakdown, CostBreakdown::ZERO);
    }

    #[test]
    fn positive_rate_costs_split_exactly() {
        let calc = compute_wastage(&standard_job()).unwrap();
        let costs = calc.cost_breakdown;

        assert_eq!(costs.material_cost, dec!(975.00));
        assert_eq!(costs.useful_cost, dec!(800.00));
        assert_eq!(costs.wastage_cost, dec!(175.00));
        assert_eq!(costs.material_cost, costs.wastage_cost + costs.useful_cost);
    }

    #[test]
    fn cost_identity_holds_for_awkward_rates() {
        let job = ProfileJob {
            rate_per_unit: dec!(3.37),
            ..standard_job()
        };

        let costs = compute_wastage(&job).unwrap().cost_breakdown;

        assert_eq!(costs.material_cost, costs.wastage_cost + costs.useful_cost);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn zero_shutter_count_is_rejected() {
        let job = ProfileJob::unpriced(dec!(7.0), dec!(3.0), 0, dec!(19.5));

        let result = compute_wastage(&job);

        assert_eq!(
            result,
            Err(InvalidDimension::NonPositive {
                field: "num_shutters",
                value: Decimal::ZERO,
            })
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let height = compute_wastage(&ProfileJob::unpriced(dec!(0), dec!(3), 1, dec!(19.5)));
        let width = compute_wastage(&ProfileJob::unpriced(dec!(7), dec!(-2), 1, dec!(19.5)));
        let stock = compute_wastage(&ProfileJob::unpriced(dec!(7), dec!(3), 1, dec!(0)));

        assert!(matches!(
            height,
            Err(InvalidDimension::NonPositive {
                field: "shutter_height",
                ..
            })
        ));
        assert!(matches!(
            width,
            Err(InvalidDimension::NonPositive {
                field: "shutter_width",
                ..
            })
        ));
        assert!(matches!(
            stock,
            Err(InvalidDimension::NonPositive {
                field: "stock_length",
                ..
            })
        ));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let job = standard_job();

        let first = compute_wastage(&job).unwrap();
        let second = compute_wastage(&job).unwrap();

        assert_eq!(first, second);
    }
}
