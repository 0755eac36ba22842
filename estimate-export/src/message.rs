//! Share-message export (WhatsApp-style markup).
//!
//! `*bold*` markers and the emoji headers follow the message format clients
//! already receive; the text is meant to be pasted into a chat as-is.

use rust_decimal::Decimal;
use std::fmt::Write;

use crate::flat::ExportData;
use crate::fmt;

/// Renders the estimate as a chat message.
pub fn render(data: &ExportData) -> String {
    let mut text = String::from("*🏗️ ALUMINUM WORKS ESTIMATE*\n\n");

    let _ = writeln!(text, "*📋 Estimate No:* {}", data.client.estimate_no);
    let _ = writeln!(
        text,
        "*📅 Date:* {}",
        data.client.estimate_date.format("%Y-%m-%d")
    );
    let _ = writeln!(text, "*👤 Client:* {}", data.client.client_name);

    text.push_str("\n*📝 ITEMS:*\n");
    for (index, row) in data.rows.iter().enumerate() {
        let _ = writeln!(
            text,
            "{}. *{}*\n   {} {} @ {} = *{}*\n",
            index + 1,
            row.name,
            fmt::qty(row.quantity),
            row.unit,
            fmt::money(row.rate),
            fmt::money(row.amount),
        );
    }

    let totals = &data.totals;
    text.push_str("*💰 SUMMARY:*\n");
    let _ = write!(text, "Subtotal: {}", fmt::money(totals.subtotal));
    if totals.discount > Decimal::ZERO {
        let _ = write!(text, "\nDiscount: -{}", fmt::money(totals.discount));
    }
    if totals.additional_charges > Decimal::ZERO {
        let _ = write!(
            text,
            "\n{}: +{}",
            data.additional_label,
            fmt::money(totals.additional_charges)
        );
    }

    let _ = write!(
        text,
        "\n\n*🎯 FINAL TOTAL: {}*\n\nThank you for choosing us! 🙏",
        fmt::money(totals.final_total)
    );

    text
}
