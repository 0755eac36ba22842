//! Plain-text estimate document.
//!
//! Mirrors the printed estimate layout: centered title, estimate header,
//! client block, items table, right-aligned totals, and a footer line. The
//! rendered text doubles as the e-mail attachment body.

use rust_decimal::Decimal;

use crate::flat::ExportData;
use crate::fmt;

const WIDTH: usize = 78;

/// Renders the estimate as a printable text document.
pub fn render(data: &ExportData) -> String {
    let mut doc = String::new();

    doc.push_str(&center("ALUMINUM PROFILE ESTIMATE"));
    doc.push_str(&center("========================="));
    doc.push('\n');

    doc.push_str(&format!("Estimate No: {}\n", data.client.estimate_no));
    doc.push_str(&format!(
        "Date: {}\n\n",
        data.client.estimate_date.format("%Y-%m-%d")
    ));

    doc.push_str("Client Information\n");
    doc.push_str("------------------\n");
    doc.push_str(&format!("Name:    {}\n", data.client.client_name));
    doc.push_str(&format!("Phone:   {}\n", data.client.client_phone));
    doc.push_str(&format!("Address: {}\n\n", data.client.client_address));

    doc.push_str("Items Breakdown\n");
    doc.push_str("---------------\n");
    doc.push_str(&format!(
        "{:<4} {:<34} {:>9} {:<8} {:>10} {:>12}\n",
        "Sr.", "Description", "Qty", "Unit", "Rate (₹)", "Amount (₹)"
    ));
    for (index, row) in data.rows.iter().enumerate() {
        doc.push_str(&format!(
            "{:<4} {:<34} {:>9} {:<8} {:>10} {:>12}\n",
            index + 1,
            truncate(&row.name, 34),
            fmt::qty(row.quantity),
            row.unit,
            fmt::grouped(row.rate),
            fmt::grouped(row.amount),
        ));
    }
    doc.push('\n');

    let totals = &data.totals;
    doc.push_str(&right(&format!("Subtotal: {}", fmt::money(totals.subtotal))));
    if totals.discount > Decimal::ZERO {
        doc.push_str(&right(&format!("Discount: -{}", fmt::money(totals.discount))));
    }
    if totals.additional_charges > Decimal::ZERO {
        doc.push_str(&right(&format!(
            "{}: +{}",
            data.additional_label,
            fmt::money(totals.additional_charges)
        )));
    }
    doc.push_str(&right(&format!("TOTAL: {}", fmt::money(totals.final_total))));

    doc.push('\n');
    doc.push_str(&center("Thank you for your business!"));

    doc
}

fn center(text: &str) -> String {
    let pad = WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{}\n", " ".repeat(pad), text)
}

fn right(text: &str) -> String {
    let pad = WIDTH.saturating_sub(text.chars().count());
    format!("{}{}\n", " ".repeat(pad), text)
}

fn truncate(
    text: &str,
    max: usize,
) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
