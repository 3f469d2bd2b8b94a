//! # Entity form controller
//!
//! [`EntityFormController`] owns the state of one create/update dialog: whether it
//! is open, the [`Draft`] being edited, and whether a submission is in flight.
//! It is generic over the [`Entity`], whose static schema drives validation and
//! payload conversion, so a single implementation serves vouchers, users, sliders
//! and categories.
//!
//! ## Lifecycle
//!
//! ```text
//! open(record?) ──► set()/set_input() ... ──► begin_submit() ──► gateway ──► finish_submit()
//!      ▲                                            │ invalid                    │ success: notify, on_done, close()
//!      └──────────────── close() ◄──────────────────┴────────────────────────────┘ failure: notify, stay open
//! ```
//!
//! Submission is split in two halves so UI code never keeps the controller
//! borrowed across an `await`: [`begin_submit`](EntityFormController::begin_submit)
//! validates and returns a [`Submission`] ticket, the caller awaits the gateway,
//! and [`finish_submit`](EntityFormController::finish_submit) applies the result.
//! [`submit`](EntityFormController::submit) chains the three for callers that can
//! hold `&mut self` throughout.
//!
//! Every `open` and `close` starts a new generation. A ticket from an older
//! generation (the dialog was dismissed or reopened while the request was in
//! flight) never touches the current dialog or notifies: a failure is discarded,
//! a success only runs `on_done` so the owning list reloads.

use std::marker::PhantomData;

use crate::draft::{parse_input, Draft, Payload};
use crate::entity::Entity;
use crate::error::{FormError, ValidationError};
use crate::gateway::{EntityService, Notifier, SubmissionGateway, SubmissionResult};
use crate::schema::FieldValue;

/// Whether the dialog creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// A validated payload waiting for the gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    generation: u64,
    mode: FormMode,
    payload: Payload,
}

impl Submission {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

/// What `finish_submit` did with a gateway result.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome<E> {
    /// The write succeeded; the dialog is closed.
    Saved(E),
    /// The write failed; the dialog stays open with its draft intact.
    Failed(String),
    /// The write succeeded after its dialog was closed or reopened. The list was
    /// reloaded; the current dialog was not touched.
    SavedAfterClose(E),
    /// A failure belonging to a dialog that has since been closed or reopened.
    Discarded,
}

/// Create/update dialog state for one entity type.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityFormController<E> {
    open: bool,
    busy: bool,
    generation: u64,
    draft: Draft,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for EntityFormController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityFormController<E> {
    pub fn new() -> Self {
        Self {
            open: false,
            busy: false,
            generation: 0,
            draft: Draft::new(),
            _entity: PhantomData,
        }
    }

    /// Shows the dialog, editing `record` or starting from an empty draft.
    pub fn open(&mut self, record: Option<&E>) {
        self.generation += 1;
        self.busy = false;
        self.draft = record.map(Draft::from_record).unwrap_or_default();
        self.open = true;
        tracing::debug!(
            "opened {} form ({:?}, binding {:?})",
            E::KIND,
            self.mode(),
            self.draft.binding()
        );
    }

    /// Hides the dialog and releases the draft. Runs on every exit path.
    pub fn close(&mut self) {
        self.generation += 1;
        self.busy = false;
        self.draft.clear();
        self.open = false;
        tracing::debug!("closed {} form", E::KIND);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a submission is in flight; the confirm control is disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn mode(&self) -> FormMode {
        if self.draft.binding().is_some() {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.draft.get(name)
    }

    /// Sets or clears a field. Names outside the schema are ignored.
    pub fn set(&mut self, name: &str, value: Option<FieldValue>) {
        let Some(spec) = E::schema().field(name) else {
            tracing::warn!("{} form has no field named {name}", E::KIND);
            return;
        };
        match value {
            Some(value) => self.draft.set(spec.name, value),
            None => {
                self.draft.remove(spec.name);
            }
        }
    }

    pub fn clear_field(&mut self, name: &str) {
        self.set(name, None);
    }

    /// Sets a field from the text of an HTML input.
    pub fn set_input(&mut self, name: &str, input: &str) {
        if let Some(spec) = E::schema().field(name) {
            self.set(spec.name, parse_input(spec, input));
        }
    }

    /// Returns the first violated field, in schema order. Does not touch the draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let creating = self.mode() == FormMode::Create;
        E::schema()
            .fields()
            .iter()
            .try_for_each(|spec| spec.check(self.draft.get(spec.name), creating))
    }

    /// Validates the draft and marks the form busy.
    ///
    /// A validation failure is surfaced through `notifier` and nothing is sent.
    pub fn begin_submit(&mut self, notifier: &mut impl Notifier) -> Result<Submission, FormError> {
        if !self.open {
            return Err(FormError::Closed);
        }
        if self.busy {
            return Err(FormError::Busy);
        }
        if let Err(e) = self.validate() {
            tracing::debug!("{} form invalid: {}", E::KIND, e);
            notifier.error("Invalid input", &e.message);
            return Err(e.into());
        }

        self.busy = true;
        Ok(Submission {
            generation: self.generation,
            mode: self.mode(),
            payload: self.draft.to_payload(E::schema()),
        })
    }

    /// Applies a gateway result: feedback, list reload and closing on success.
    pub fn finish_submit(
        &mut self,
        submission: Submission,
        result: SubmissionResult<E>,
        notifier: &mut impl Notifier,
        on_done: impl FnOnce(),
    ) -> SubmitOutcome<E> {
        if submission.generation != self.generation {
            // The write still happened; the owning list must reload, the current
            // dialog is left alone.
            return match result {
                Ok(record) => {
                    tracing::debug!("{} saved after its dialog closed", E::KIND);
                    on_done();
                    SubmitOutcome::SavedAfterClose(record)
                }
                Err(_) => {
                    tracing::debug!("discarding stale {} submission", E::KIND);
                    SubmitOutcome::Discarded
                }
            };
        }
        self.busy = false;

        match result {
            Ok(record) => {
                let verb = match submission.mode {
                    FormMode::Create => "created",
                    FormMode::Update => "updated",
                };
                notifier.success(&format!("{} {verb}", capitalized(E::KIND)));
                on_done();
                self.close();
                SubmitOutcome::Saved(record)
            }
            Err(e) => {
                notifier.error(&format!("Could not save {}", E::KIND), e.message());
                SubmitOutcome::Failed(e.message().to_string())
            }
        }
    }

    /// Validates, sends through `gateway` and applies the result.
    pub async fn submit<S: EntityService<E>>(
        &mut self,
        gateway: &SubmissionGateway<S>,
        notifier: &mut impl Notifier,
        on_done: impl FnOnce(),
    ) -> Result<SubmitOutcome<E>, FormError> {
        let submission = self.begin_submit(notifier)?;
        let result = gateway
            .submit::<E>(submission.mode(), submission.payload().clone())
            .await;
        Ok(self.finish_submit(submission, result, notifier, on_done))
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::memory::MemoryBackend;
    use crate::models::{User, Voucher};
    use crate::testing::RecordingNotifier;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn filled_voucher_form() -> EntityFormController<Voucher> {
        let mut form = EntityFormController::<Voucher>::new();
        form.open(None);
        form.set_input("voucherCode", "SUMMER");
        form.set_input("voucherValue", "20");
        form.set(
            "startDate",
            Some(FieldValue::Date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())),
        );
        form.set_input("endDate", "2024-06-30");
        form.set("active", Some(FieldValue::Bool(true)));
        form
    }

    fn existing_voucher() -> Voucher {
        Voucher {
            id: Some(9),
            voucher_code: "OLD".into(),
            voucher_value: 5.0,
            start_date: Some("2024-01-01T00:00:00Z".into()),
            end_date: Some("2024-02-01T00:00:00Z".into()),
            active: false,
            description: Some("legacy".into()),
        }
    }

    #[test]
    fn test_open_close_open_yields_empty_draft() {
        let mut form = EntityFormController::<Voucher>::new();
        form.open(Some(&existing_voucher()));
        assert_eq!(form.mode(), FormMode::Update);
        assert!(form.value("voucherCode").is_some());

        form.close();
        assert!(!form.is_open());
        assert!(form.draft().is_empty());

        form.open(None);
        assert!(form.is_open());
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.draft().is_empty());
        assert!(form.value("voucherCode").is_none());
    }

    #[test]
    fn test_reopen_with_other_record_replaces_binding() {
        let mut form = EntityFormController::<Voucher>::new();
        form.open(Some(&existing_voucher()));
        let other = Voucher {
            id: Some(10),
            voucher_code: "NEW".into(),
            ..Voucher::default()
        };
        form.open(Some(&other));
        assert_eq!(form.draft().binding(), Some(10));
        assert_eq!(form.value("description"), None);
    }

    #[test]
    fn test_overflowing_value_is_rejected_before_payload() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_voucher_form();
        form.set_input("voucherValue", "1e400");
        assert_eq!(form.validate().unwrap_err().field, "voucherValue");

        form.set("voucherValue", Some(FieldValue::Number(f64::INFINITY)));
        assert_eq!(form.validate().unwrap_err().field, "voucherValue");
        assert!(form.begin_submit(&mut notifier).is_err());
        assert_eq!(notifier.errors.len(), 1);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_validate_reports_first_missing_field_without_mutating() {
        let mut form = EntityFormController::<Voucher>::new();
        form.open(None);
        form.set_input("voucherValue", "10");
        let before = form.draft().clone();

        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "voucherCode");
        assert_eq!(err.message, "Please enter the voucher code");
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_validate_order_follows_schema() {
        let mut form = filled_voucher_form();
        form.set("endDate", None);
        form.set("active", None);
        assert_eq!(form.validate().unwrap_err().field, "endDate");
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut form = filled_voucher_form();
        form.set_input("endDate", "2024-05-01");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_password_required_only_when_creating_users() {
        let mut form = EntityFormController::<User>::new();
        form.open(None);
        form.set_input("name", "Ann");
        form.set_input("email", "ann@example.com");
        form.set_input("role", "USER");
        assert_eq!(form.validate().unwrap_err().field, "password");

        let user = User {
            id: Some(1),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            role: Some("USER".into()),
            ..User::default()
        };
        form.open(Some(&user));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = EntityFormController::<Voucher>::new();
        form.open(None);
        form.set_input("nope", "value");
        assert!(form.draft().is_empty());
    }

    #[tokio::test]
    async fn test_valid_draft_calls_gateway_once_with_timestamps() {
        let backend = MemoryBackend::new();
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();
        let mut reloads = 0;

        let mut form = filled_voucher_form();
        let outcome = form
            .submit(&gateway, &mut notifier, || reloads += 1)
            .await
            .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(backend.calls("vouchers"), 1);
        let sent = backend.last_payload("vouchers").unwrap();
        assert_eq!(sent["startDate"], Value::from("2024-06-01T00:00:00.000Z"));
        assert_eq!(sent["endDate"], Value::from("2024-06-30T00:00:00.000Z"));
        assert_eq!(sent["voucherCode"], Value::from("SUMMER"));
        assert_eq!(reloads, 1);
        assert_eq!(notifier.successes, vec!["Voucher created".to_string()]);
        assert!(!form.is_open());
        assert!(form.draft().is_empty());
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn test_missing_code_never_reaches_gateway() {
        let backend = MemoryBackend::new();
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();
        let mut reloads = 0;

        let mut form = filled_voucher_form();
        form.set_input("voucherCode", "");
        let err = form
            .submit(&gateway, &mut notifier, || reloads += 1)
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(backend.calls("vouchers"), 0);
        assert_eq!(reloads, 0);
        assert_eq!(notifier.errors.len(), 1);
        assert!(!notifier.errors[0].1.is_empty());
        assert!(form.is_open());
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn test_update_sends_binding_id() {
        let backend = MemoryBackend::new();
        backend.seed(existing_voucher());
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();

        let mut form = EntityFormController::<Voucher>::new();
        form.open(Some(&existing_voucher()));
        form.set_input("voucherCode", "RENAMED");
        let outcome = form.submit(&gateway, &mut notifier, || {}).await.unwrap();

        let SubmitOutcome::Saved(saved) = outcome else {
            panic!("expected a saved voucher");
        };
        assert_eq!(saved.id, Some(9));
        assert_eq!(saved.voucher_code, "RENAMED");
        assert_eq!(backend.last_payload("vouchers").unwrap()["id"], Value::from(9));
        assert_eq!(notifier.successes, vec!["Voucher updated".to_string()]);
    }

    #[tokio::test]
    async fn test_rejection_keeps_dialog_open() {
        let backend = MemoryBackend::new();
        backend.reject_next("vouchers", "Voucher code already exists");
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();
        let mut reloads = 0;

        let mut form = filled_voucher_form();
        let outcome = form
            .submit(&gateway, &mut notifier, || reloads += 1)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Voucher code already exists".into())
        );
        assert_eq!(reloads, 0);
        assert!(form.is_open());
        assert!(!form.is_busy());
        assert_eq!(
            form.value("voucherCode"),
            Some(&FieldValue::Text("SUMMER".into()))
        );
        assert_eq!(notifier.errors[0].1, "Voucher code already exists");
    }

    #[tokio::test]
    async fn test_transport_failure_clears_busy() {
        let backend = MemoryBackend::new();
        backend.fail_next("vouchers", "net down");
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();

        let mut form = filled_voucher_form();
        let outcome = form.submit(&gateway, &mut notifier, || {}).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed("net down".into()));
        assert!(!form.is_busy());
        assert!(form.is_open());
    }

    #[test]
    fn test_second_begin_while_busy_is_refused() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_voucher_form();
        let first = form.begin_submit(&mut notifier).unwrap();
        assert!(form.is_busy());
        assert_eq!(form.begin_submit(&mut notifier), Err(FormError::Busy));
        assert_eq!(first.mode(), FormMode::Create);
    }

    #[test]
    fn test_begin_on_closed_form_is_refused() {
        let mut notifier = RecordingNotifier::default();
        let mut form = EntityFormController::<Voucher>::new();
        assert_eq!(form.begin_submit(&mut notifier), Err(FormError::Closed));
        assert!(notifier.errors.is_empty());
    }

    #[test]
    fn test_result_after_close_is_discarded() {
        let mut notifier = RecordingNotifier::default();
        let mut reloads = 0;
        let mut form = filled_voucher_form();
        let submission = form.begin_submit(&mut notifier).unwrap();

        form.close();
        form.open(None);
        let outcome = form.finish_submit(
            submission,
            Err(SubmitError::Transport("late".into())),
            &mut notifier,
            || reloads += 1,
        );

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert!(notifier.errors.is_empty());
        assert_eq!(reloads, 0);
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn test_write_landing_after_close_still_reloads_list() {
        let backend = MemoryBackend::new();
        let gateway = SubmissionGateway::new(backend.clone());
        let mut notifier = RecordingNotifier::default();
        let mut reloads = 0;
        let mut form = filled_voucher_form();
        let submission = form.begin_submit(&mut notifier).unwrap();

        form.close();
        let result = gateway
            .submit::<Voucher>(submission.mode(), submission.payload().clone())
            .await;
        let outcome = form.finish_submit(submission, result, &mut notifier, || reloads += 1);

        assert!(matches!(outcome, SubmitOutcome::SavedAfterClose(ref v) if v.voucher_code == "SUMMER"));
        assert_eq!(backend.calls("vouchers"), 1);
        assert_eq!(reloads, 1);
        assert!(notifier.successes.is_empty());
        assert!(notifier.errors.is_empty());
        assert!(!form.is_open());
        assert!(form.draft().is_empty());
    }
}
