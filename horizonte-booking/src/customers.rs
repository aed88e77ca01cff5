use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, Customer};

/// Placeholder until the traveler (or an admin) fills in the real date
const DEFAULT_BIRTH_DATE: (i32, u32, u32) = (1990, 1, 1);

/// Directory of known travelers, keyed by normalized email.
///
/// Records are created automatically the first time a booking arrives from
/// an unseen email and are never updated by later bookings.
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

/// Outcome of provisioning a customer for a booking
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned {
    /// A record for this email already existed; left untouched
    Existing(Customer),
    /// First booking from this email; a record was created
    Created(Customer),
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Ensure a customer record exists for the booking's email.
    ///
    /// Creates one with a placeholder birth date and `joined_at = today` on
    /// first sight; repeat bookings never touch the existing record, even
    /// when name or phone differ.
    pub fn provision(&mut self, booking: &Booking, today: NaiveDate) -> Provisioned {
        let email = normalize_email(&booking.email);

        if let Some(existing) = self.customers.iter().find(|c| c.email == email) {
            return Provisioned::Existing(existing.clone());
        }

        let (y, m, d) = DEFAULT_BIRTH_DATE;
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: booking.customer_name.clone(),
            email,
            phone: booking.phone.clone(),
            birth_date: NaiveDate::from_ymd_opt(y, m, d).expect("static date"),
            joined_at: today,
        };

        info!(customer_id = %customer.id, email = %customer.email, "customer provisioned");
        self.customers.push(customer.clone());
        Provisioned::Created(customer)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Customer> {
        let email = normalize_email(email);
        self.customers.iter().find(|c| c.email == email)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Case-insensitive search over name and email
    pub fn search(&self, term: &str) -> Vec<&Customer> {
        let term = term.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
            })
            .collect()
    }
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Dedup key for customer emails: trimmed and ASCII-lowercased. Merging
/// casing variants beats silently duplicating a traveler's record.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
