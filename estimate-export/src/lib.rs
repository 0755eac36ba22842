//! Exporters for finished estimates.
//!
//! Every exporter consumes the same flat record shape ([`ExportData`]) and
//! renders it to one surface: a CSV spreadsheet, a plain-text document, a
//! share message, or a composed e-mail value. None of them perform I/O; the
//! caller decides where the rendered bytes go.

pub mod document;
pub mod email;
pub mod flat;
pub mod fmt;
pub mod message;
pub mod spreadsheet;

pub use email::{EmailError, EstimateEmail};
pub use flat::{ExportData, ExportRow};
