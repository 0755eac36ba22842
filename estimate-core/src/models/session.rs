//! Session state for one estimate in progress.
//!
//! The session is an explicit value owned by whatever layer drives it (CLI,
//! test harness); the calculators it feeds stay stateless. Items are kept in
//! insertion order and totals are recomputed on demand, never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::ClientDetails;
use super::item::EstimateItem;

/// Default label for the additional-charges line.
pub const ADDITIONAL_LABEL_DEFAULT: &str = "Transport/Misc";

/// One estimate being built: client metadata, the ordered item list, and
/// the adjustment figures applied on top of the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSession {
    pub client: ClientDetails,
    items: Vec<EstimateItem>,

    /// Flat discount in money. Ignored while `discount_percent` is positive.
    pub discount_amount: Decimal,

    /// Percentage discount over the subtotal; wins over the flat amount.
    pub discount_percent: Decimal,

    pub additional_charges: Decimal,
    pub additional_label: String,
}

/// Snapshot of the money aggregation over a session's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub additional_charges: Decimal,
    pub final_total: Decimal,
}

impl EstimateSession {
    pub fn new(client: ClientDetails) -> Self {
        Self {
            client,
            items: Vec::new(),
            discount_amount: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            additional_charges: Decimal::ZERO,
            additional_label: ADDITIONAL_LABEL_DEFAULT.to_string(),
        }
    }

    pub fn items(&self) -> &[EstimateItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a line item. Items are never edited in place; corrections go
    /// through [`remove_last`](Self::remove_last) and re-adding.
    pub fn add_item(&mut self, item: EstimateItem) {
        debug!(name = %item.name, amount = %item.amount, "adding estimate item");
        self.items.push(item);
    }

    pub fn remove_last(&mut self) -> Option<EstimateItem> {
        let removed = self.items.pop();
        if let Some(item) = &removed {
            debug!(name = %item.name, "removed last estimate item");
        }
        removed
    }

    pub fn clear_items(&mut self) {
        debug!(count = self.items.len(), "clearing estimate items");
        self.items.clear();
    }

    /// Sum of line amounts. `amount` is authoritative; `quantity × rate` is
    /// not consulted here, which is what keeps profile lines correct.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// The discount actually applied: the percentage when one is set,
    /// otherwise the flat amount.
    pub fn effective_discount(&self) -> Decimal {
        if self.discount_percent > Decimal::ZERO {
            self.subtotal() * self.discount_percent / Decimal::ONE_HUNDRED
        } else {
            self.discount_amount
        }
    }

    pub fn totals(&self) -> EstimateTotals {
        let subtotal = self.subtotal();
        let discount = self.effective_discount();

        EstimateTotals {
            subtotal,
            discount,
            additional_charges: self.additional_charges,
            final_total: subtotal - discount + self.additional_charges,
        }
    }
}
