//! CSV spreadsheet export.
//!
//! ## Output format
//!
//! One header row, one row per item in estimate order, then a totals block.
//! The discount and additional-charges rows appear only when non-zero, the
//! same rule the document export follows.
//!
//! | Column | Contents |
//! |--------------|------------------------------------------|
//! | `Sr. No.` | 1-based position in the estimate |
//! | `Description`| item name |
//! | `Quantity` | two decimal places |
//! | `Unit` | unit label (`sqft`, `pieces`, `ft`, ...) |
//! | `Rate (₹)` | grouped, two decimal places |
//! | `Amount (₹)` | grouped, two decimal places |

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::flat::ExportData;
use crate::fmt;

/// Errors that can occur while rendering the CSV export.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the estimate as CSV text.
pub fn to_csv(data: &ExportData) -> Result<String, CsvError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "Sr. No.",
        "Description",
        "Quantity",
        "Unit",
        "Rate (₹)",
        "Amount (₹)",
    ])?;

    for (index, row) in data.rows.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            row.name.clone(),
            fmt::qty(row.quantity),
            row.unit.clone(),
            fmt::grouped(row.rate),
            fmt::grouped(row.amount),
        ])?;
    }

    let totals = &data.totals;
    write_total_row(&mut writer, "Subtotal", totals.subtotal)?;
    if totals.discount > Decimal::ZERO {
        write_total_row(&mut writer, "Discount", -totals.discount)?;
    }
    if totals.additional_charges > Decimal::ZERO {
        write_total_row(&mut writer, &data.additional_label, totals.additional_charges)?;
    }
    write_total_row(&mut writer, "Total", totals.final_total)?;

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Io(e.into_error()))?;

    debug!(rows = data.rows.len(), "rendered CSV export");
    String::from_utf8(bytes).map_err(CsvError::from)
}

fn write_total_row(
    writer: &mut csv::Writer<Vec<u8>>,
    label: &str,
    amount: Decimal,
) -> Result<(), csv::Error> {
    writer.write_record(["", "", "", "", label, &fmt::grouped(amount)])
}
