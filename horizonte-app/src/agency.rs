use chrono::NaiveDate;
use tracing::{info, warn};

use horizonte_assist::{ChatAssistant, ChatMessage, CopyGenerator, FALLBACK_REPLY};
use horizonte_booking::customers::{CustomerDirectory, Provisioned};
use horizonte_booking::ledger::{BookingLedger, LedgerError};
use horizonte_booking::models::{Booking, BookingDraft, BookingStatus};
use horizonte_booking::workflow::ReservationWorkflow;
use horizonte_catalog::{
    CatalogError, CatalogStore, NewPackage, NewReview, PackageUpdate, TravelPackage,
};

/// Result of committing a reservation: the ledger entry plus what happened
/// on the customer side.
#[derive(Debug, Clone)]
pub struct PlacedBooking {
    pub booking: Booking,
    pub customer: Provisioned,
}

/// Composition root for one agency session. Owns the catalog, the booking
/// ledger and the customer directory, and holds the external collaborators
/// behind trait objects so failures stay contained here.
pub struct Agency {
    catalog: CatalogStore,
    ledger: BookingLedger,
    customers: CustomerDirectory,
    copy_generator: Box<dyn CopyGenerator>,
    chat_assistant: Box<dyn ChatAssistant>,
}

impl Agency {
    pub fn new(
        copy_generator: Box<dyn CopyGenerator>,
        chat_assistant: Box<dyn ChatAssistant>,
    ) -> Self {
        Self {
            catalog: CatalogStore::new(),
            ledger: BookingLedger::new(),
            customers: CustomerDirectory::new(),
            copy_generator,
            chat_assistant,
        }
    }

    pub fn with_stores(
        catalog: CatalogStore,
        ledger: BookingLedger,
        customers: CustomerDirectory,
        copy_generator: Box<dyn CopyGenerator>,
        chat_assistant: Box<dyn ChatAssistant>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            customers,
            copy_generator,
            chat_assistant,
        }
    }

    // --- Public-site surface ---

    /// Open the reservation dialog for a package. Fails fast when the
    /// caller passes an id the catalog does not know.
    pub fn open_reservation(&self, package_id: &str) -> Result<ReservationWorkflow, AgencyError> {
        let package = self
            .catalog
            .get(package_id)
            .ok_or_else(|| AgencyError::PackageNotFound(package_id.to_string()))?;
        Ok(ReservationWorkflow::open(package))
    }

    /// Commit a finalized workflow draft: append to the ledger and
    /// auto-provision the customer on first-seen email.
    pub fn place_booking(&mut self, draft: BookingDraft, today: NaiveDate) -> PlacedBooking {
        let booking = self.ledger.append(draft).clone();
        let customer = self.customers.provision(&booking, today);

        info!(
            booking_id = %booking.id,
            package = %booking.package_name,
            new_customer = matches!(customer, Provisioned::Created(_)),
            "reservation placed"
        );

        PlacedBooking { booking, customer }
    }

    pub fn add_review(
        &mut self,
        package_id: &str,
        review: NewReview,
        today: NaiveDate,
    ) -> Result<TravelPackage, AgencyError> {
        Ok(self.catalog.add_review(package_id, review, today)?.clone())
    }

    /// Travel-assistant chat. Never fails: an unreachable assistant
    /// degrades to the static apology.
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> String {
        match self.chat_assistant.reply(history, message).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => FALLBACK_REPLY.to_string(),
            Err(error) => {
                warn!(%error, "chat assistant unavailable, using fallback");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    // --- Admin surface ---

    pub fn update_booking_status(
        &mut self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), AgencyError> {
        Ok(self.ledger.update_status(booking_id, status)?)
    }

    pub fn create_package(&mut self, new: NewPackage) -> Result<TravelPackage, AgencyError> {
        Ok(self.catalog.create_package(new)?.clone())
    }

    /// Create a package, asking the copy generator to draft description and
    /// itinerary when none was supplied. Generation failure means "no
    /// suggested text": the package is still created.
    pub async fn create_package_with_copy(
        &mut self,
        mut new: NewPackage,
    ) -> Result<TravelPackage, AgencyError> {
        if new.description.trim().is_empty() {
            match self
                .copy_generator
                .generate(&new.location, &new.duration, new.price)
                .await
            {
                Ok(copy) => {
                    new.description =
                        format!("{}\n\nItinerário:\n{}", copy.description, copy.itinerary);
                }
                Err(error) => {
                    warn!(%error, location = %new.location, "copy generation failed, creating without suggested text");
                }
            }
        }

        self.create_package(new)
    }

    pub fn update_package(
        &mut self,
        package_id: &str,
        update: PackageUpdate,
    ) -> Result<TravelPackage, AgencyError> {
        Ok(self.catalog.update_package(package_id, update)?.clone())
    }

    pub fn delete_package(&mut self, package_id: &str) -> Result<TravelPackage, AgencyError> {
        Ok(self.catalog.delete_package(package_id)?)
    }

    // --- Read-side snapshots ---

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AgencyError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
