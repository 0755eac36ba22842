use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder used when no phone number is supplied.
pub const PHONE_FALLBACK: &str = "Not provided";

/// Placeholder used when no address is supplied.
pub const ADDRESS_FALLBACK: &str = "Address not provided";

/// Client metadata attached to one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,
    pub estimate_no: String,
    pub estimate_date: NaiveDate,
}

impl ClientDetails {
    /// Auto-generated details for a fresh estimate: placeholder contact
    /// fields, a timestamped client name, and an `EST-...` number with a
    /// short random suffix.
    pub fn auto_generated() -> Self {
        Self::auto_generated_at(Local::now())
    }

    /// Same as [`auto_generated`](Self::auto_generated) with the timestamp
    /// pinned, so the date-derived parts are testable.
    pub fn auto_generated_at(now: DateTime<Local>) -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect::<String>()
            .to_uppercase();

        Self {
            client_name: format!("Client-{}", now.format("%Y%m%d-%H%M")),
            client_phone: PHONE_FALLBACK.to_string(),
            client_address: ADDRESS_FALLBACK.to_string(),
            estimate_no: format!("EST-{}-{}", now.format("%Y%m%d%H%M"), suffix),
            estimate_date: now.date_naive(),
        }
    }
}
