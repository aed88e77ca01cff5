pub mod customers;
pub mod ledger;
pub mod models;
pub mod timer;
pub mod workflow;

pub use customers::{CustomerDirectory, Provisioned};
pub use ledger::{BookingLedger, LedgerError, LedgerTotals, StatusCounts};
pub use models::{Booking, BookingDraft, BookingStatus, Customer};
pub use timer::{DismissHandle, DismissOutcome, DismissTimer};
pub use workflow::{BookingForm, DateConstraint, ReservationWorkflow, WorkflowError};
