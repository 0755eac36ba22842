//! Terminal rendering for calculation results and the session summary.
//!
//! Results go to stdout via `println!`; diagnostics go through `tracing`.

use estimate_core::calculations::{AreaQuote, ProfileJob, WastageCalculation};
use estimate_core::EstimateSession;
use estimate_export::fmt;
use rust_decimal::Decimal;

/// Prints an area pricing preview.
pub fn print_area(quote: &AreaQuote, unit: &str) {
    println!("Area:   {} {unit}", fmt::qty(quote.area));
    println!("Amount: {}", fmt::money(quote.amount));
}

/// Prints the full wastage analysis for a profile job.
pub fn print_wastage(
    job: &ProfileJob,
    calc: &WastageCalculation,
) {
    println!(
        "Profile requirement for {} shutters ({}×{} ft, stock {} ft):",
        job.num_shutters, job.shutter_height, job.shutter_width, job.stock_length
    );
    println!("  Required length: {} ft", fmt::qty(calc.total_required_length));
    println!("  Sticks needed:   {} pieces", calc.sticks_needed);
    println!("  Supplied length: {} ft", fmt::qty(calc.total_supplied_length));
    println!(
        "  Wastage:         {} ft ({}%)",
        fmt::qty(calc.wastage_length),
        fmt::qty(calc.wastage_percentage),
    );

    if job.rate_per_unit > Decimal::ZERO {
        let costs = &calc.cost_breakdown;
        println!("  Cost breakdown:");
        println!("    Total material: {}", fmt::money(costs.material_cost));
        println!("    Useful:         {}", fmt::money(costs.useful_cost));
        println!("    Wastage:        {}", fmt::money(costs.wastage_cost));
    }
}

/// Prints the session summary: client block, item table, totals.
pub fn print_session(session: &EstimateSession) {
    let client = &session.client;
    println!("Estimate {} — {}", client.estimate_no, client.estimate_date);
    println!("Client: {} | {} | {}", client.client_name, client.client_phone, client.client_address);
    println!();

    if session.is_empty() {
        println!("No items yet.");
        return;
    }

    println!(
        "{:<4} {:<34} {:>9} {:<8} {:>10} {:>12}",
        "Sr.", "Description", "Qty", "Unit", "Rate (₹)", "Amount (₹)"
    );
    for (index, item) in session.items().iter().enumerate() {
        println!(
            "{:<4} {:<34} {:>9} {:<8} {:>10} {:>12}",
            index + 1,
            item.name,
            fmt::qty(item.quantity),
            item.unit,
            fmt::grouped(item.rate),
            fmt::grouped(item.amount),
        );
    }

    let totals = session.totals();
    println!();
    println!("Subtotal:           {}", fmt::money(totals.subtotal));
    if totals.discount > Decimal::ZERO {
        println!("Discount:          -{}", fmt::money(totals.discount));
    }
    if totals.additional_charges > Decimal::ZERO {
        println!(
            "{:<18} +{}",
            format!("{}:", session.additional_label),
            fmt::money(totals.additional_charges)
        );
    }
    println!("Final total:        {}", fmt::money(totals.final_total));
}
