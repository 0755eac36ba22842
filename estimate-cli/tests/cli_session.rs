//! Integration tests driving the command handlers against an on-disk
//! session file, the same path the binary takes after argument parsing.

use rust_decimal_macros::dec;
use tempfile::TempDir;

use estimate_cli::commands::{self, ExportFormat};
use estimate_cli::store;

fn session_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("estimate.json")
}

#[test]
fn init_then_add_items_builds_a_persistent_estimate() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);

    commands::init(&path, false).unwrap();
    commands::add_area(
        &path,
        "Aluminum Shutter".to_string(),
        dec!(6.0),
        dec!(4.0),
        "sqft".to_string(),
        dec!(150.00),
    )
    .unwrap();
    commands::add_profile(&path, dec!(7.0), dec!(3.0), 4, dec!(19.5), dec!(10.00)).unwrap();
    commands::add_service(&path, "Installation Labor".to_string(), dec!(1500.00)).unwrap();

    let session = store::load(&path).unwrap();

    assert_eq!(session.items().len(), 3);
    // 3600 (area) + 800 (useful profile cost) + 1500 (labor)
    assert_eq!(session.subtotal(), dec!(5900.00));
}

#[test]
fn init_refuses_to_clobber_an_existing_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);

    commands::init(&path, false).unwrap();
    let result = commands::init(&path, false);

    assert!(result.is_err());
    assert!(commands::init(&path, true).is_ok());
}

#[test]
fn client_command_applies_fields_and_placeholder_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    commands::init(&path, false).unwrap();

    commands::client(
        &path,
        Some("Mehta Fabricators".to_string()),
        Some("   ".to_string()),
        Some("7 Station Road, Nashik".to_string()),
        None,
        None,
    )
    .unwrap();

    let session = store::load(&path).unwrap();
    assert_eq!(session.client.client_name, "Mehta Fabricators");
    assert_eq!(session.client.client_phone, "Not provided");
    assert_eq!(session.client.client_address, "7 Station Road, Nashik");
}

#[test]
fn adjust_and_remove_last_update_totals() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    commands::init(&path, false).unwrap();

    commands::add_service(&path, "Labor".to_string(), dec!(1000.00)).unwrap();
    commands::add_service(&path, "Extra".to_string(), dec!(500.00)).unwrap();
    commands::remove_last(&path).unwrap();
    commands::adjust(&path, None, Some(dec!(10)), Some(dec!(75.00)), None).unwrap();

    let totals = store::load(&path).unwrap().totals();

    assert_eq!(totals.subtotal, dec!(1000.00));
    assert_eq!(totals.discount, dec!(100.00));
    assert_eq!(totals.final_total, dec!(975.00));
}

#[test]
fn invalid_profile_dimensions_leave_the_session_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    commands::init(&path, false).unwrap();

    let result = commands::add_profile(&path, dec!(0), dec!(3.0), 4, dec!(19.5), dec!(10.00));

    assert!(result.is_err());
    assert!(store::load(&path).unwrap().is_empty());
}

#[test]
fn export_csv_writes_the_requested_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    commands::init(&path, false).unwrap();
    commands::add_quantity(
        &path,
        "Door Handle".to_string(),
        dec!(4),
        "pieces".to_string(),
        dec!(85.00),
    )
    .unwrap();

    let out = dir.path().join("estimate.csv");
    commands::export(&path, ExportFormat::Csv, Some(&out)).unwrap();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Sr. No.,Description,Quantity,Unit"));
    assert!(csv.contains("1,Door Handle,4.00,pieces,85.00,340.00"));
}

#[test]
fn email_command_writes_the_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    commands::init(&path, false).unwrap();
    commands::add_service(&path, "Labor".to_string(), dec!(100.00)).unwrap();

    let out = dir.path().join("attachment.txt");
    commands::email(&path, "client@example.com", Some(&out)).unwrap();

    let attachment = std::fs::read_to_string(&out).unwrap();
    assert!(attachment.contains("ALUMINUM PROFILE ESTIMATE"));
}

#[test]
fn wastage_quick_calculator_needs_no_session_file() {
    // No init; the command must not touch the filesystem.
    assert!(commands::wastage(dec!(7.0), dec!(3.0), 4, dec!(19.5), dec!(0)).is_ok());
}
