pub mod client;
pub mod item;
pub mod session;

pub use client::{ADDRESS_FALLBACK, PHONE_FALLBACK, ClientDetails};
pub use item::{EstimateItem, ItemType};
pub use session::{ADDITIONAL_LABEL_DEFAULT, EstimateSession, EstimateTotals};
