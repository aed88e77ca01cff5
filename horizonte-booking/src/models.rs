use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking status in the lifecycle. Every new booking starts as `Pending`;
/// only an admin status transition moves it on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A traveler's reservation request against a package.
///
/// `package_name` and `amount` are snapshots taken at booking time: later
/// edits to the package never change them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub travelers: u32,
    pub package_id: String,
    pub package_name: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
    pub amount: i64,
}

/// A validated booking not yet committed to the ledger. Produced only by
/// the reservation workflow; the ledger assigns id and status.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub travelers: u32,
    pub package_id: String,
    pub package_name: String,
    pub date: NaiveDate,
    pub amount: i64,
}

/// A known traveler, auto-provisioned on first booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub joined_at: NaiveDate,
}
