use std::time::Duration;

use chrono::NaiveDate;
use horizonte_catalog::TravelPackage;
use tokio::time::sleep;
use tracing::debug;

use crate::models::BookingDraft;
use crate::timer::{DismissOutcome, DismissTimer};

/// Floor on the visible processing step. The ledger append happens only
/// after `process` resolves, so it can never land before this elapses.
pub const MIN_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 10;

/// How date entry behaves for the selected package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateConstraint {
    /// Exactly one date on sale: pre-filled and not user-editable
    Fixed(NaiveDate),
    /// Closed choice restricted to the package's declared dates
    Choice(Vec<NaiveDate>),
    /// No declared dates: any future date is acceptable
    AnyFuture,
}

/// Traveler-supplied fields collected in the form step
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub travelers: u32,
    pub date: Option<NaiveDate>,
}

#[derive(Debug)]
enum State {
    Form,
    Processing { draft: BookingDraft },
    Success,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Form => "FORM",
            State::Processing { .. } => "PROCESSING",
            State::Success => "SUCCESS",
        }
    }
}

/// Per-session reservation state machine: Form → Processing → Success.
///
/// There is no path backward from `Processing`; `close` resets to the form
/// from any state. Opened against a package snapshot, so price and
/// availability are frozen for the life of the dialog.
pub struct ReservationWorkflow {
    package_id: String,
    package_name: String,
    package_price: i32,
    constraint: DateConstraint,
    state: State,
    processing_delay: Duration,
}

impl ReservationWorkflow {
    /// Open the workflow for a selected package
    pub fn open(package: &TravelPackage) -> Self {
        let constraint = match package.available_dates.as_slice() {
            [] => DateConstraint::AnyFuture,
            [only] => DateConstraint::Fixed(*only),
            dates => DateConstraint::Choice(dates.to_vec()),
        };

        Self {
            package_id: package.id.clone(),
            package_name: package.title.clone(),
            package_price: package.price,
            constraint,
            state: State::Form,
            processing_delay: MIN_PROCESSING_DELAY,
        }
    }

    /// Override the processing delay (tests use a short one)
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn constraint(&self) -> &DateConstraint {
        &self.constraint
    }

    /// The pre-filled date, present only when the package sells a single date
    pub fn prefilled_date(&self) -> Option<NaiveDate> {
        match self.constraint {
            DateConstraint::Fixed(date) => Some(date),
            _ => None,
        }
    }

    /// Whether the date field is read-only
    pub fn date_locked(&self) -> bool {
        matches!(self.constraint, DateConstraint::Fixed(_))
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, State::Processing { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success)
    }

    /// Validate the form and move to `Processing`. A rejected submit leaves
    /// the workflow in `Form` with no side effect.
    pub fn submit(&mut self, form: BookingForm, today: NaiveDate) -> Result<(), WorkflowError> {
        if !matches!(self.state, State::Form) {
            return Err(WorkflowError::InvalidState {
                action: "submit",
                state: self.state.name(),
            });
        }

        let customer_name = form.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(WorkflowError::MissingName);
        }
        if !is_plausible_email(&form.email) {
            return Err(WorkflowError::InvalidEmail(form.email));
        }
        if form.phone.trim().is_empty() {
            return Err(WorkflowError::MissingPhone);
        }
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&form.travelers) {
            return Err(WorkflowError::TravelerCount(form.travelers));
        }
        let date = self.resolve_date(form.date, today)?;

        let amount = i64::from(self.package_price) * i64::from(form.travelers);
        debug!(package_id = %self.package_id, amount, "reservation submitted");

        self.state = State::Processing {
            draft: BookingDraft {
                customer_name,
                email: form.email,
                phone: form.phone,
                travelers: form.travelers,
                package_id: self.package_id.clone(),
                package_name: self.package_name.clone(),
                date,
                amount,
            },
        };
        Ok(())
    }

    /// Run the processing step: wait out the minimum visible delay, then
    /// move to `Success` and hand the finalized draft to the caller for the
    /// ledger append. Cannot be aborted once started.
    pub async fn process(&mut self) -> Result<BookingDraft, WorkflowError> {
        let draft = match &self.state {
            State::Processing { draft } => draft.clone(),
            other => {
                return Err(WorkflowError::InvalidState {
                    action: "process",
                    state: other.name(),
                })
            }
        };

        sleep(self.processing_delay).await;
        self.state = State::Success;
        Ok(draft)
    }

    /// Hold the success dialog open until the timer resolves. `Elapsed`
    /// self-closes back to the form; `Cancelled` (a manual close raced the
    /// timer) leaves the state to the closing caller.
    pub async fn auto_dismiss(
        &mut self,
        timer: DismissTimer,
    ) -> Result<DismissOutcome, WorkflowError> {
        if !matches!(self.state, State::Success) {
            return Err(WorkflowError::InvalidState {
                action: "auto-dismiss",
                state: self.state.name(),
            });
        }

        let outcome = timer.wait().await;
        if outcome == DismissOutcome::Elapsed {
            self.state = State::Form;
        }
        Ok(outcome)
    }

    /// Close or cancel the dialog, resetting to an empty form
    pub fn close(&mut self) {
        self.state = State::Form;
    }

    fn resolve_date(
        &self,
        chosen: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<NaiveDate, WorkflowError> {
        match &self.constraint {
            DateConstraint::Fixed(fixed) => match chosen {
                None => Ok(*fixed),
                Some(date) if date == *fixed => Ok(date),
                Some(date) => Err(WorkflowError::DateNotAvailable(date)),
            },
            DateConstraint::Choice(dates) => {
                let date = chosen.ok_or(WorkflowError::MissingDate)?;
                if dates.contains(&date) {
                    Ok(date)
                } else {
                    Err(WorkflowError::DateNotAvailable(date))
                }
            }
            DateConstraint::AnyFuture => {
                let date = chosen.ok_or(WorkflowError::MissingDate)?;
                if date > today {
                    Ok(date)
                } else {
                    Err(WorkflowError::DateNotInFuture(date))
                }
            }
        }
    }
}

fn is_plausible_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Customer name is required")]
    MissingName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Traveler count must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}, got {0}")]
    TravelerCount(u32),

    #[error("No travel date selected")]
    MissingDate,

    #[error("Date {0} is not available for this package")]
    DateNotAvailable(NaiveDate),

    #[error("Travel date {0} is not in the future")]
    DateNotInFuture(NaiveDate),

    #[error("Cannot {action} in {state} state")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizonte_catalog::TransportType;

    fn package(dates: &[(i32, u32, u32)]) -> TravelPackage {
        TravelPackage {
            id: "1".to_string(),
            title: "Paraíso em Fernando de Noronha".to_string(),
            location: "Fernando de Noronha, BR".to_string(),
            price: 4500,
            duration: "5 Dias".to_string(),
            description: String::new(),
            rating: 4.9,
            featured: true,
            available_dates: dates
                .iter()
                .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
                .collect(),
            transport_types: vec![TransportType::Air],
            included_items: vec![],
            excluded_items: vec![],
            reviews: vec![],
        }
    }

    fn valid_form(date: Option<NaiveDate>) -> BookingForm {
        BookingForm {
            customer_name: "João Silva".to_string(),
            email: "joao@email.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            travelers: 2,
            date,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 20).unwrap()
    }

    #[test]
    fn test_single_date_is_prefilled_and_locked() {
        let workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]));
        assert_eq!(
            workflow.prefilled_date(),
            Some(NaiveDate::from_ymd_opt(2023, 11, 15).unwrap())
        );
        assert!(workflow.date_locked());
    }

    #[test]
    fn test_constraint_derivation() {
        let multi = ReservationWorkflow::open(&package(&[(2023, 11, 15), (2023, 12, 10)]));
        assert!(matches!(multi.constraint(), DateConstraint::Choice(d) if d.len() == 2));
        assert!(!multi.date_locked());

        let open_dates = ReservationWorkflow::open(&package(&[]));
        assert_eq!(*open_dates.constraint(), DateConstraint::AnyFuture);
        assert!(open_dates.prefilled_date().is_none());
    }

    #[test]
    fn test_fixed_date_rejects_other_dates() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]));
        let other = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();

        let result = workflow.submit(valid_form(Some(other)), today());
        assert!(matches!(result, Err(WorkflowError::DateNotAvailable(d)) if d == other));
        assert_eq!(workflow.state_name(), "FORM");

        // omitting the date uses the locked one
        workflow.submit(valid_form(None), today()).unwrap();
        assert!(workflow.is_processing());
    }

    #[test]
    fn test_choice_requires_membership() {
        let mut workflow =
            ReservationWorkflow::open(&package(&[(2023, 11, 15), (2023, 12, 10)]));

        let outside = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(workflow.submit(valid_form(Some(outside)), today()).is_err());
        assert!(workflow.submit(valid_form(None), today()).is_err());

        let member = NaiveDate::from_ymd_opt(2023, 12, 10).unwrap();
        workflow.submit(valid_form(Some(member)), today()).unwrap();
        assert!(workflow.is_processing());
    }

    #[test]
    fn test_any_future_rejects_past_and_today() {
        let mut workflow = ReservationWorkflow::open(&package(&[]));

        assert!(matches!(
            workflow.submit(valid_form(Some(today())), today()),
            Err(WorkflowError::DateNotInFuture(_))
        ));

        let tomorrow = today().succ_opt().unwrap();
        workflow.submit(valid_form(Some(tomorrow)), today()).unwrap();
        assert!(workflow.is_processing());
    }

    #[test]
    fn test_field_validation_keeps_form_state() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]));

        let mut form = valid_form(None);
        form.customer_name = "   ".to_string();
        assert!(matches!(
            workflow.submit(form, today()),
            Err(WorkflowError::MissingName)
        ));

        let mut form = valid_form(None);
        form.email = "joao-at-email.com".to_string();
        assert!(matches!(
            workflow.submit(form, today()),
            Err(WorkflowError::InvalidEmail(_))
        ));

        let mut form = valid_form(None);
        form.travelers = 0;
        assert!(matches!(
            workflow.submit(form, today()),
            Err(WorkflowError::TravelerCount(0))
        ));

        let mut form = valid_form(None);
        form.travelers = 11;
        assert!(workflow.submit(form, today()).is_err());

        // still usable after every rejection
        assert_eq!(workflow.state_name(), "FORM");
        workflow.submit(valid_form(None), today()).unwrap();
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("joao@email.com"));
        assert!(is_plausible_email(" maria@sub.email.com.br "));
        assert!(!is_plausible_email("joao"));
        assert!(!is_plausible_email("@email.com"));
        assert!(!is_plausible_email("joao@email"));
        assert!(!is_plausible_email("joao@email..com"));
        assert!(!is_plausible_email("joao@em@ail.com"));
    }

    #[tokio::test]
    async fn test_amount_and_no_backward_path() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]))
            .with_processing_delay(Duration::from_millis(5));

        workflow.submit(valid_form(None), today()).unwrap();

        // no edits once submitted
        assert!(matches!(
            workflow.submit(valid_form(None), today()),
            Err(WorkflowError::InvalidState { .. })
        ));

        let draft = workflow.process().await.unwrap();
        assert_eq!(draft.amount, 9000);
        assert_eq!(draft.package_id, "1");
        assert!(workflow.is_success());

        // one draft per submission
        assert!(matches!(
            workflow.process().await,
            Err(WorkflowError::InvalidState { .. })
        ));
    }

    #[tokio::test]
    async fn test_process_waits_minimum_delay() {
        let delay = Duration::from_millis(50);
        let mut workflow =
            ReservationWorkflow::open(&package(&[(2023, 11, 15)])).with_processing_delay(delay);
        workflow.submit(valid_form(None), today()).unwrap();

        let started = tokio::time::Instant::now();
        workflow.process().await.unwrap();
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn test_success_self_closes_when_timer_elapses() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]))
            .with_processing_delay(Duration::from_millis(5));
        workflow.submit(valid_form(None), today()).unwrap();
        workflow.process().await.unwrap();
        assert!(workflow.is_success());

        let timer = DismissTimer::new(Duration::from_millis(5));
        let outcome = workflow.auto_dismiss(timer).await.unwrap();
        assert_eq!(outcome, DismissOutcome::Elapsed);
        assert_eq!(workflow.state_name(), "FORM");
    }

    #[tokio::test]
    async fn test_manual_close_cancels_auto_dismiss() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]))
            .with_processing_delay(Duration::from_millis(5));
        workflow.submit(valid_form(None), today()).unwrap();
        workflow.process().await.unwrap();

        let timer = DismissTimer::new(Duration::from_secs(30));
        timer.handle().cancel();
        let outcome = workflow.auto_dismiss(timer).await.unwrap();
        assert_eq!(outcome, DismissOutcome::Cancelled);
        // the cancelling close is responsible for the reset
        assert!(workflow.is_success());
        workflow.close();
        assert_eq!(workflow.state_name(), "FORM");
    }

    #[tokio::test]
    async fn test_auto_dismiss_requires_success_state() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]));
        let timer = DismissTimer::new(Duration::from_millis(5));
        assert!(matches!(
            workflow.auto_dismiss(timer).await,
            Err(WorkflowError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_close_resets_to_form() {
        let mut workflow = ReservationWorkflow::open(&package(&[(2023, 11, 15)]));
        workflow.submit(valid_form(None), today()).unwrap();
        assert!(workflow.is_processing());

        workflow.close();
        assert_eq!(workflow.state_name(), "FORM");
        workflow.submit(valid_form(None), today()).unwrap();
    }
}
