use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, BookingDraft, BookingStatus};

/// Append-mostly collection of all bookings, newest first.
///
/// The only mutation besides `append` is `update_status`; nothing is ever
/// deleted and no other field changes after creation.
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

/// Aggregate amounts over a booking subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    pub amount: i64,
    pub travelers: u32,
}

/// Booking counts per lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// Commit a workflow draft. Assigns a fresh id and forces the status to
    /// `Pending` regardless of anything the caller did upstream.
    pub fn append(&mut self, draft: BookingDraft) -> &Booking {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            customer_name: draft.customer_name,
            email: draft.email,
            phone: draft.phone,
            travelers: draft.travelers,
            package_id: draft.package_id,
            package_name: draft.package_name,
            date: draft.date,
            status: BookingStatus::Pending,
            amount: draft.amount,
        };

        info!(
            booking_id = %booking.id,
            package_id = %booking.package_id,
            amount = booking.amount,
            "booking appended"
        );

        self.bookings.insert(0, booking);
        &self.bookings[0]
    }

    /// Replace the status of the matching booking. Every other field is
    /// left untouched. Unknown id is reported, never a panic.
    pub fn update_status(&mut self, id: &str, status: BookingStatus) -> Result<(), LedgerError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        booking.status = status;
        info!(booking_id = %id, ?status, "booking status updated");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// All bookings, newest first
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn by_package(&self, package_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.package_id == package_id)
            .collect()
    }

    /// Sum amount and traveler count over one package's bookings
    pub fn package_totals(&self, package_id: &str) -> LedgerTotals {
        self.bookings
            .iter()
            .filter(|b| b.package_id == package_id)
            .fold(
                LedgerTotals {
                    amount: 0,
                    travelers: 0,
                },
                |acc, b| LedgerTotals {
                    amount: acc.amount + b.amount,
                    travelers: acc.travelers + b.travelers,
                },
            )
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for booking in &self.bookings {
            match booking.status {
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Confirmed => counts.confirmed += 1,
                BookingStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Booking not found: {0}")]
    NotFound(String),
}
