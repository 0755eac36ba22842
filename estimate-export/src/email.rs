//! E-mail composition.
//!
//! Builds the complete message value (recipient, subject, body, and the
//! rendered document as an attachment) but does not send anything. SMTP
//! transport belongs to the caller's infrastructure.

use thiserror::Error;
use tracing::debug;

use crate::document;
use crate::flat::ExportData;
use crate::fmt;

/// A composed estimate e-mail, ready to hand to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

/// Errors that can occur while composing an estimate e-mail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    /// The recipient address is blank or has no `@`.
    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),
}

/// Composes the estimate e-mail for the given recipient.
///
/// # Errors
///
/// Returns [`EmailError::InvalidRecipient`] for a blank address or one
/// without an `@`. This is a shallow sanity check, not RFC validation;
/// the transport remains the authority on deliverability.
pub fn compose(
    data: &ExportData,
    recipient: &str,
) -> Result<EstimateEmail, EmailError> {
    let to = recipient.trim();
    if to.is_empty() || !to.contains('@') {
        return Err(EmailError::InvalidRecipient(recipient.to_string()));
    }

    let body = format!(
        "Dear {},\n\n\
         Please find attached your aluminum works estimate.\n\n\
         Estimate Details:\n\
         - Estimate No: {}\n\
         - Date: {}\n\
         - Total Amount: {}\n\n\
         Thank you for choosing our services.\n\n\
         Best regards,\n\
         Aluminum Works Team\n",
        data.client.client_name,
        data.client.estimate_no,
        data.client.estimate_date.format("%Y-%m-%d"),
        fmt::money(data.totals.final_total),
    );

    debug!(to, estimate_no = %data.client.estimate_no, "composed estimate e-mail");

    Ok(EstimateEmail {
        to: to.to_string(),
        subject: format!("Aluminum Works Estimate - {}", data.client.estimate_no),
        body,
        attachment_name: format!("estimate_{}.txt", data.client.estimate_no),
        attachment: document::render(data).into_bytes(),
    })
}
