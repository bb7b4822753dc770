//! Contact form state and the submission flow.
//!
//! The flow is written against three small seams so it runs the same in the
//! browser and under test: the form it reads and decorates, the submitter
//! that delivers the message, and the notifier that reports the outcome.

use serde::Serialize;
use tracing::{info, warn};

use super::notifications::NotificationKind;
use super::validation::{field_visual, ContactField, FieldVisual};
use crate::error::SubmitError;
use crate::platform::sleep_ms;

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    /// A keystroke: store the value and drop any error without re-checking.
    Input(ContactField, String),
    /// Focus left the field: re-check it.
    Blur(ContactField),
    Show(ContactField, FieldVisual),
    SetSubmitting(bool),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: ContactMessage,
    pub visuals: [FieldVisual; 4],
    pub submitting: bool,
}

impl FormState {
    pub fn visual(&self, field: ContactField) -> FieldVisual {
        self.visuals[field.index()]
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input(field, value) => {
                *self.values.value_mut(field) = value;
                self.visuals[field.index()] = self.visual(field).cleared();
            }
            FormAction::Blur(field) => {
                self.visuals[field.index()] = field_visual(field, self.values.value(field));
            }
            FormAction::Show(field, visual) => self.visuals[field.index()] = visual,
            FormAction::SetSubmitting(submitting) => self.submitting = submitting,
            FormAction::Reset => {
                self.values = ContactMessage::default();
                self.visuals = Default::default();
            }
        }
    }
}

/// The form as the submission flow sees it.
pub trait ContactForm {
    fn values(&self) -> ContactMessage;
    fn apply(&self, action: FormAction);
}

pub trait Notify {
    fn notify(&self, message: &str, kind: NotificationKind);
}

pub trait Submitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Stands in for a real endpoint: waits, then reports success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub latency_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        sleep_ms(self.latency_ms).await;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Sent,
    Failed,
}

/// Holds the submit control in its loading state; restores it when dropped,
/// whichever way the submission ends.
struct LoadingGuard<'a, F: ContactForm> {
    form: &'a F,
}

impl<'a, F: ContactForm> LoadingGuard<'a, F> {
    fn engage(form: &'a F) -> Self {
        form.apply(FormAction::SetSubmitting(true));
        Self { form }
    }
}

impl<F: ContactForm> Drop for LoadingGuard<'_, F> {
    fn drop(&mut self) {
        self.form.apply(FormAction::SetSubmitting(false));
    }
}

pub async fn submit_contact<F, S, N>(form: &F, submitter: &S, notifier: &N) -> SubmitOutcome
where
    F: ContactForm,
    S: Submitter,
    N: Notify,
{
    let message = form.values();

    let mut form_valid = true;
    for field in ContactField::ALL {
        let visual = field_visual(field, message.value(field));
        form_valid &= !visual.is_error();
        form.apply(FormAction::Show(field, visual));
    }

    if !form_valid {
        notifier.notify(INVALID_FORM_MESSAGE, NotificationKind::Error);
        return SubmitOutcome::Rejected;
    }

    let _loading = LoadingGuard::engage(form);
    info!("contact submission started");

    match submitter.submit(&message).await {
        Ok(()) => {
            notifier.notify(SENT_MESSAGE, NotificationKind::Success);
            form.apply(FormAction::Reset);
            info!("contact submission sent");
            SubmitOutcome::Sent
        }
        Err(err) => {
            warn!(error = %err, "contact submission failed");
            notifier.notify(FAILED_MESSAGE, NotificationKind::Error);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::time::Instant;

    #[derive(Default)]
    struct TestForm {
        state: RefCell<FormState>,
        submitting_log: RefCell<Vec<bool>>,
    }

    impl TestForm {
        fn filled(name: &str, email: &str, subject: &str, message: &str) -> Self {
            let form = Self::default();
            for (field, value) in ContactField::ALL.into_iter().zip([name, email, subject, message]) {
                form.apply(FormAction::Input(field, value.to_string()));
            }
            form
        }
    }

    impl ContactForm for TestForm {
        fn values(&self) -> ContactMessage {
            self.state.borrow().values.clone()
        }

        fn apply(&self, action: FormAction) {
            if let FormAction::SetSubmitting(flag) = action {
                self.submitting_log.borrow_mut().push(flag);
            }
            self.state.borrow_mut().apply(action);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<(String, NotificationKind)>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.shown.borrow_mut().push((message.to_string(), kind));
        }
    }

    struct FailingSubmitter;

    impl Submitter for FailingSubmitter {
        async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Status(503))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn valid_form_is_sent_after_simulated_latency() {
        let form = TestForm::filled("Jane", "jane@example.com", "Hello", "I would like to talk.");
        let notifier = RecordingNotifier::default();
        let submitter = SimulatedSubmitter { latency_ms: 2_000 };
        let started = Instant::now();

        let outcome = submit_contact(&form, &submitter, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(started.elapsed().as_millis() >= 2_000);
        assert_eq!(
            notifier.shown.borrow().as_slice(),
            &[(SENT_MESSAGE.to_string(), NotificationKind::Success)]
        );
        assert_eq!(form.submitting_log.borrow().as_slice(), &[true, false]);

        let state = form.state.borrow();
        assert_eq!(state.values, ContactMessage::default());
        assert!(state.visuals.iter().all(|visual| *visual == FieldVisual::Neutral));
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn invalid_form_is_rejected_without_loading_state() {
        let form = TestForm::filled("J", "jane@", "", "short");
        let notifier = RecordingNotifier::default();

        let outcome = submit_contact(&form, &SimulatedSubmitter { latency_ms: 0 }, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(form.submitting_log.borrow().is_empty());
        assert_eq!(
            notifier.shown.borrow().as_slice(),
            &[(INVALID_FORM_MESSAGE.to_string(), NotificationKind::Error)]
        );

        let state = form.state.borrow();
        assert_eq!(
            state.visual(ContactField::Name),
            FieldVisual::Error("Name must be at least 2 characters")
        );
        assert_eq!(state.visual(ContactField::Subject), FieldVisual::Error("Subject is required"));
        assert_eq!(state.values.name, "J");
    }

    #[tokio::test]
    async fn failed_delivery_keeps_input_and_restores_control() {
        let form = TestForm::filled("Jane", "jane@example.com", "Hello", "I would like to talk.");
        let notifier = RecordingNotifier::default();

        let outcome = submit_contact(&form, &FailingSubmitter, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.submitting_log.borrow().as_slice(), &[true, false]);
        assert_eq!(
            notifier.shown.borrow().as_slice(),
            &[(FAILED_MESSAGE.to_string(), NotificationKind::Error)]
        );
        assert_eq!(form.state.borrow().values.name, "Jane");
    }

    #[test]
    fn typing_clears_error_and_blur_rechecks() {
        let mut state = FormState::default();
        state.apply(FormAction::Blur(ContactField::Email));
        assert_eq!(state.visual(ContactField::Email), FieldVisual::Error("Email is required"));

        state.apply(FormAction::Input(ContactField::Email, "a@b".to_string()));
        assert_eq!(state.visual(ContactField::Email), FieldVisual::Neutral);

        state.apply(FormAction::Blur(ContactField::Email));
        assert_eq!(
            state.visual(ContactField::Email),
            FieldVisual::Error("Please enter a valid email")
        );

        state.apply(FormAction::Input(ContactField::Email, "a@b.c".to_string()));
        state.apply(FormAction::Blur(ContactField::Email));
        assert_eq!(state.visual(ContactField::Email), FieldVisual::Success);
    }

    #[test]
    fn message_serializes_with_field_names() {
        let message = ContactMessage {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there!".into(),
        };
        let json = serde_json::to_value(&message).expect("serializable");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json.as_object().map(|object| object.len()), Some(4));
    }
}
