use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use estimate_cli::commands::{self, ExportFormat};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimate builder for aluminum fabrication work.
///
/// Builds one estimate per session file: add area-priced, quantity-priced,
/// profile (with wastage analysis), and service items, then export the
/// result as a spreadsheet, document, or message.
#[derive(Debug, Parser)]
#[command(name = "estimate")]
struct Cli {
    /// Session file holding the estimate being built.
    #[arg(long, global = true, default_value = "estimate.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new estimate with auto-generated client details.
    Init {
        /// Replace an existing session file.
        #[arg(long)]
        force: bool,
    },

    /// Update client details. Blank values fall back to placeholders.
    Client {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Estimate date, ISO format (e.g. 2026-08-30).
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        estimate_no: Option<String>,
    },

    /// Add an area-priced item (shutters, partitions).
    AddArea {
        #[arg(long)]
        name: String,
        #[arg(long)]
        length: Decimal,
        #[arg(long)]
        width: Decimal,
        #[arg(long, default_value = "sqft")]
        unit: String,
        /// Rate per unit of area.
        #[arg(long)]
        rate: Decimal,
    },

    /// Add a quantity-priced item (hardware, accessories).
    AddQuantity {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: Decimal,
        #[arg(long, default_value = "pieces")]
        unit: String,
        #[arg(long)]
        rate: Decimal,
    },

    /// Add an aluminum profile item with wastage analysis.
    AddProfile {
        /// Shutter height in feet.
        #[arg(long)]
        height: Decimal,
        /// Shutter width in feet.
        #[arg(long)]
        width: Decimal,
        #[arg(long)]
        shutters: u32,
        /// Length of one stock bar in feet.
        #[arg(long, default_value = "19.5")]
        stock_length: Decimal,
        /// Rate per foot; zero skips the cost breakdown.
        #[arg(long, default_value = "0")]
        rate: Decimal,
    },

    /// Add a flat-amount labor or service item.
    AddService {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Decimal,
    },

    /// Remove the most recently added item.
    RemoveLast,

    /// Remove every item, keeping client details.
    ClearItems,

    /// Set discount and additional-charge figures.
    Adjust {
        /// Flat discount amount.
        #[arg(long)]
        discount: Option<Decimal>,
        /// Percentage discount; overrides the flat amount while set.
        #[arg(long)]
        discount_percent: Option<Decimal>,
        #[arg(long)]
        charges: Option<Decimal>,
        #[arg(long)]
        charges_label: Option<String>,
    },

    /// Print the current estimate summary.
    Show,

    /// Quick wastage calculator; computes without touching the session.
    Wastage {
        #[arg(long)]
        height: Decimal,
        #[arg(long)]
        width: Decimal,
        #[arg(long)]
        shutters: u32,
        #[arg(long, default_value = "19.5")]
        stock_length: Decimal,
        #[arg(long, default_value = "0")]
        rate: Decimal,
    },

    /// Export the estimate to a file or stdout.
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,
        /// Output path; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compose the estimate e-mail and write the attachment.
    Email {
        /// Recipient address.
        #[arg(long)]
        to: String,
        /// Attachment path; defaults to the estimate's file name.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let file = cli.file.as_path();

    match cli.command {
        Command::Init { force } => commands::init(file, force),
        Command::Client {
            name,
            phone,
            address,
            date,
            estimate_no,
        } => commands::client(file, name, phone, address, date, estimate_no),
        Command::AddArea {
            name,
            length,
            width,
            unit,
            rate,
        } => commands::add_area(file, name, length, width, unit, rate),
        Command::AddQuantity {
            name,
            quantity,
            unit,
            rate,
        } => commands::add_quantity(file, name, quantity, unit, rate),
        Command::AddProfile {
            height,
            width,
            shutters,
            stock_length,
            rate,
        } => commands::add_profile(file, height, width, shutters, stock_length, rate),
        Command::AddService { name, amount } => commands::add_service(file, name, amount),
        Command::RemoveLast => commands::remove_last(file),
        Command::ClearItems => commands::clear_items(file),
        Command::Adjust {
            discount,
            discount_percent,
            charges,
            charges_label,
        } => commands::adjust(file, discount, discount_percent, charges, charges_label),
        Command::Show => commands::show(file),
        Command::Wastage {
            height,
            width,
            shutters,
            stock_length,
            rate,
        } => commands::wastage(height, width, shutters, stock_length, rate),
        Command::Export { format, out } => commands::export(file, format, out.as_deref()),
        Command::Email { to, out } => commands::email(file, &to, out.as_deref()),
    }
}
