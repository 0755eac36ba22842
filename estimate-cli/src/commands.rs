//! One function per CLI subcommand.
//!
//! Each handler loads the session file, applies its change, saves, and
//! prints what happened. The calculators are called here and nowhere else,
//! so the flow mirrors the form-driven original: gather numbers, compute,
//! preview, append.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use estimate_core::calculations::{ProfileJob, compute_area, compute_wastage};
use estimate_core::{
    ADDRESS_FALLBACK, ClientDetails, EstimateItem, EstimateSession, PHONE_FALLBACK,
};
use estimate_export::{ExportData, document, email, message, spreadsheet};
use rust_decimal::Decimal;
use tracing::info;

use crate::render;
use crate::store;

/// Export surfaces selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Document,
    Message,
}

/// `init` — start a fresh session with auto-generated client details.
pub fn init(
    path: &Path,
    force: bool,
) -> Result<()> {
    let session = EstimateSession::new(ClientDetails::auto_generated());
    store::create(path, &session, force)?;

    info!(path = %path.display(), "created new estimate session");
    println!("Created estimate {} in {}", session.client.estimate_no, path.display());
    Ok(())
}

/// `client` — update client details. Blank values fall back to the same
/// placeholders the auto-generated client uses.
pub fn client(
    path: &Path,
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    date: Option<NaiveDate>,
    estimate_no: Option<String>,
) -> Result<()> {
    let mut session = store::load(path)?;
    let details = &mut session.client;

    if let Some(name) = name {
        details.client_name = if name.trim().is_empty() {
            format!("Client-{}", Local::now().format("%Y%m%d-%H%M"))
        } else {
            name
        };
    }
    if let Some(phone) = phone {
        details.client_phone = if phone.trim().is_empty() {
            PHONE_FALLBACK.to_string()
        } else {
            phone
        };
    }
    if let Some(address) = address {
        details.client_address = if address.trim().is_empty() {
            ADDRESS_FALLBACK.to_string()
        } else {
            address
        };
    }
    if let Some(date) = date {
        details.estimate_date = date;
    }
    if let Some(no) = estimate_no
        && !no.trim().is_empty()
    {
        details.estimate_no = no;
    }

    store::save(path, &session)?;
    println!("Client details saved.");
    Ok(())
}

/// `add-area` — price a rectangular face and append the line item.
pub fn add_area(
    path: &Path,
    name: String,
    length: Decimal,
    width: Decimal,
    unit: String,
    rate: Decimal,
) -> Result<()> {
    let mut session = store::load(path)?;

    let quote = compute_area(length, width, rate)?;
    render::print_area(&quote, &unit);

    let label = format!("{name} ({length}×{width} {unit})");
    session.add_item(EstimateItem::area(
        label.clone(),
        &quote,
        unit,
        rate,
        format!("{length}×{width}"),
    ));
    store::save(path, &session)?;

    println!("Added {label} to estimate.");
    Ok(())
}

/// `add-quantity` — hardware and accessories sold by count.
pub fn add_quantity(
    path: &Path,
    name: String,
    quantity: Decimal,
    unit: String,
    rate: Decimal,
) -> Result<()> {
    let mut session = store::load(path)?;

    let item = EstimateItem::quantity(name.clone(), quantity, unit, rate);
    println!("Amount: {}", estimate_export::fmt::money(item.amount));

    session.add_item(item);
    store::save(path, &session)?;

    println!("Added {name} to estimate.");
    Ok(())
}

/// `add-profile` — run the wastage analysis, print it, and append the
/// derived profile line item.
pub fn add_profile(
    path: &Path,
    height: Decimal,
    width: Decimal,
    shutters: u32,
    stock_length: Decimal,
    rate: Decimal,
) -> Result<()> {
    let mut session = store::load(path)?;

    let job = ProfileJob {
        shutter_height: height,
        shutter_width: width,
        num_shutters: shutters,
        stock_length,
        rate_per_unit: rate,
    };
    let calc = compute_wastage(&job)?;
    render::print_wastage(&job, &calc);

    session.add_item(EstimateItem::from_wastage(&job, &calc));
    store::save(path, &session)?;

    println!("Added aluminum profile with wastage calculation to estimate.");
    Ok(())
}

/// `add-service` — flat-amount labor line.
pub fn add_service(
    path: &Path,
    name: String,
    amount: Decimal,
) -> Result<()> {
    let mut session = store::load(path)?;

    session.add_item(EstimateItem::service(name.clone(), amount));
    store::save(path, &session)?;

    println!("Added {name} to estimate.");
    Ok(())
}

/// `remove-last` — drop the most recently added item.
pub fn remove_last(path: &Path) -> Result<()> {
    let mut session = store::load(path)?;

    match session.remove_last() {
        Some(item) => {
            store::save(path, &session)?;
            println!("Removed {}.", item.name);
        }
        None => println!("Estimate has no items."),
    }
    Ok(())
}

/// `clear-items` — empty the item list, keeping client details.
pub fn clear_items(path: &Path) -> Result<()> {
    let mut session = store::load(path)?;

    session.clear_items();
    store::save(path, &session)?;

    println!("Cleared all items.");
    Ok(())
}

/// `adjust` — set discount and additional-charge figures.
pub fn adjust(
    path: &Path,
    discount: Option<Decimal>,
    discount_percent: Option<Decimal>,
    charges: Option<Decimal>,
    charges_label: Option<String>,
) -> Result<()> {
    let mut session = store::load(path)?;

    if let Some(amount) = discount {
        session.discount_amount = amount;
    }
    if let Some(percent) = discount_percent {
        session.discount_percent = percent;
    }
    if let Some(amount) = charges {
        session.additional_charges = amount;
    }
    if let Some(label) = charges_label {
        session.additional_label = label;
    }

    store::save(path, &session)?;
    render::print_session(&session);
    Ok(())
}

/// `show` — print the current estimate summary.
pub fn show(path: &Path) -> Result<()> {
    let session = store::load(path)?;
    render::print_session(&session);
    Ok(())
}

/// `wastage` — sessionless quick calculator; nothing is stored.
pub fn wastage(
    height: Decimal,
    width: Decimal,
    shutters: u32,
    stock_length: Decimal,
    rate: Decimal,
) -> Result<()> {
    let job = ProfileJob {
        shutter_height: height,
        shutter_width: width,
        num_shutters: shutters,
        stock_length,
        rate_per_unit: rate,
    };
    let calc = compute_wastage(&job)?;
    render::print_wastage(&job, &calc);
    Ok(())
}

/// `export` — render the estimate to the chosen surface.
pub fn export(
    path: &Path,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let session = store::load(path)?;
    let data = ExportData::from_session(&session);

    let rendered = match format {
        ExportFormat::Csv => spreadsheet::to_csv(&data)?,
        ExportFormat::Document => document::render(&data),
        ExportFormat::Message => message::render(&data),
    };

    match out {
        Some(out) => {
            fs::write(out, &rendered)?;
            info!(path = %out.display(), "wrote export");
            println!("Wrote {}", out.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// `email` — compose the estimate e-mail and write the attachment to disk.
/// Actually sending it is left to the caller's mail transport.
pub fn email(
    path: &Path,
    to: &str,
    out: Option<&Path>,
) -> Result<()> {
    let session = store::load(path)?;
    let data = ExportData::from_session(&session);

    let mail = email::compose(&data, to)?;

    println!("To:      {}", mail.to);
    println!("Subject: {}", mail.subject);
    println!();
    print!("{}", mail.body);

    let attachment_path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Path::new(&mail.attachment_name).to_path_buf());
    fs::write(&attachment_path, &mail.attachment)?;
    println!("\nAttachment written to {}", attachment_path.display());
    Ok(())
}
