//! Flat record shape shared by all exporters.

use estimate_core::{ClientDetails, EstimateSession, EstimateTotals, ItemType};
use rust_decimal::Decimal;

/// One item flattened for rendering: `{name, quantity, unit, rate, amount,
/// item_type}`, lossless with respect to [`estimate_core::EstimateItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub item_type: ItemType,
}

/// Everything an exporter needs: client block, item rows in estimate order,
/// and the aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportData {
    pub client: ClientDetails,
    pub rows: Vec<ExportRow>,
    pub totals: EstimateTotals,
    pub additional_label: String,
}

impl ExportData {
    pub fn from_session(session: &EstimateSession) -> Self {
        let rows = session
            .items()
            .iter()
            .map(|item| ExportRow {
                name: item.name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                rate: item.rate,
                amount: item.amount,
                item_type: item.item_type,
            })
            .collect();

        Self {
            client: session.client.clone(),
            rows,
            totals: session.totals(),
            additional_label: session.additional_label.clone(),
        }
    }
}
