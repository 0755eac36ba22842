use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{AreaQuote, ProfileJob, WastageCalculation};

/// Closed set of line-item categories. Exhaustiveness is checked at compile
/// time wherever an item's category drives behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Area,
    Quantity,
    Profile,
    Service,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Quantity => "quantity",
            Self::Profile => "profile",
            Self::Service => "service",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "area" => Some(Self::Area),
            "quantity" => Some(Self::Quantity),
            "profile" => Some(Self::Profile),
            "service" => Some(Self::Service),
            _ => None,
        }
    }
}

/// One line of an estimate. Immutable once created; `amount` is the
/// authoritative money value summed into totals.
///
/// For profile items `amount` deliberately differs from `quantity × rate`:
/// the quantity is the full supplied length but the posted amount covers
/// only the useful material. See [`EstimateItem::from_wastage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateItem {
    pub name: String,

    /// Area, length, or count depending on `item_type`.
    pub quantity: Decimal,

    pub unit: String,

    /// Money per unit of `quantity`.
    pub rate: Decimal,

    /// Money total for this line.
    pub amount: Decimal,

    pub item_type: ItemType,

    /// Descriptive only, e.g. `"7×3"`. Plays no part in any calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl EstimateItem {
    /// Line item for an area-priced product.
    pub fn area(
        name: impl Into<String>,
        quote: &AreaQuote,
        unit: impl Into<String>,
        rate: Decimal,
        dimensions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quote.area,
            unit: unit.into(),
            rate,
            amount: quote.amount,
            item_type: ItemType::Area,
            dimensions: Some(dimensions.into()),
        }
    }

    /// Line item for hardware and accessories sold by count.
    pub fn quantity(
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            rate,
            amount: quantity * rate,
            item_type: ItemType::Quantity,
            dimensions: None,
        }
    }

    /// Flat-amount labor or service line.
    pub fn service(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity: Decimal::ONE,
            unit: "service".to_string(),
            rate: amount,
            amount,
            item_type: ItemType::Service,
            dimensions: None,
        }
    }

    /// Converts a wastage calculation into a profile line item.
    ///
    /// The convention is asymmetric on purpose: `quantity` records the full
    /// supplied length (what must be purchased) while `amount` posts only
    /// the useful-material cost, so `quantity × rate` overstates the line.
    pub fn from_wastage(job: &ProfileJob, calc: &WastageCalculation) -> Self {
        Self {
            name: format!(
                "Aluminum Profile - {} shutters ({}×{} ft)",
                job.num_shutters, job.shutter_height, job.shutter_width
            ),
            quantity: calc.total_supplied_length,
            unit: "ft".to_string(),
            rate: job.rate_per_unit,
            amount: calc.cost_breakdown.useful_cost,
            item_type: ItemType::Profile,
            dimensions: Some(format!("{}×{}", job.shutter_height, job.shutter_width)),
        }
    }
}
