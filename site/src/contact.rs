use std::fmt;

use tracing::{debug, info, warn};

use crate::notify::Notification;

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_DESCRIPTION: &str = "We'll get back to you as soon as possible.";
pub const FAILURE_TITLE: &str = "Message not sent";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    General,
    Support,
    Feedback,
    Collaboration,
}

impl Subject {
    pub fn all() -> [Subject; 4] {
        [
            Subject::General,
            Subject::Support,
            Subject::Feedback,
            Subject::Collaboration,
        ]
    }

    // form value
    pub fn value(self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Support => "support",
            Subject::Feedback => "feedback",
            Subject::Collaboration => "collaboration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Support => "Technical Support",
            Subject::Feedback => "Feedback",
            Subject::Collaboration => "Collaboration",
        }
    }

    pub fn from_value(value: &str) -> Option<Subject> {
        Subject::all().into_iter().find(|s| s.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl ContactFields {
    // every field is required; whitespace does not count as an answer
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(Field::Email);
        }
        if self.subject.is_none() {
            missing.push(Field::Subject);
        }
        if self.message.trim().is_empty() {
            missing.push(Field::Message);
        }

        missing
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    // only reachable through a delivery that can fail; the simulated one never does
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    AlreadySubmitting,
    MissingFields(Vec<Field>),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::AlreadySubmitting => f.write_str("a submission is already in progress"),
            SubmitError::MissingFields(fields) => {
                let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
                write!(f, "required fields are empty: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for SubmitError {}

// contact form state machine
//
// idle -> submitting on a valid submit, submitting -> idle when delivery completes.
// while submitting every further submit is rejected, which is what keeps the form from
// sending twice even if the disabled button is bypassed.  a failed delivery parks the
// form in Failed with the fields intact so the user can retry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() { "Sending..." } else { "Send Message" }
    }

    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitError> {
        if self.is_busy() {
            debug!("ignoring duplicate contact submission");
            return Err(SubmitError::AlreadySubmitting);
        }

        let missing = self.fields.missing();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        self.state = SubmissionState::Submitting;
        info!("submitting contact form");

        Ok(self.fields.clone())
    }

    // delivery finished; returns the notification to show, or None if no submission
    // was in flight
    pub fn finish(&mut self, outcome: Result<(), String>) -> Option<Notification> {
        if !self.is_busy() {
            return None;
        }

        match &outcome {
            Ok(()) => {
                self.state = SubmissionState::Idle;
                self.fields = ContactFields::default();
            }
            Err(err) => {
                warn!("contact submission failed: {err}");
                self.state = SubmissionState::Failed;
            }
        }

        Some(delivery_notification(&outcome))
    }
}

// what the user is told once delivery completes.  this does not need the form, since
// the page may have been left while the message was in flight
pub fn delivery_notification(outcome: &Result<(), String>) -> Notification {
    match outcome {
        Ok(()) => Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION),
        Err(err) => Notification::error(FAILURE_TITLE, err.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Variant;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields = ContactFields {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            subject: Some(Subject::Feedback),
            message: "Hello".into(),
        };
        form
    }

    #[test]
    fn test_successful_submission_cycle() {
        let mut form = filled();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.submit_label(), "Send Message");

        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "John Doe");
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(form.is_busy());
        assert_eq!(form.submit_label(), "Sending...");

        let mut notifications = Vec::new();
        notifications.extend(form.finish(Ok(())));

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Message sent!");
        assert_eq!(notifications[0].description, "We'll get back to you as soon as possible.");
        assert_eq!(notifications[0].variant, Variant::Success);

        // the timer firing twice must not produce a second toast
        assert_eq!(form.finish(Ok(())), None);
    }

    #[test]
    fn test_duplicate_submit_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert_eq!(form.fields.name, "John Doe");
    }

    #[test]
    fn test_blank_required_field_never_submits() {
        let mut form = filled();
        form.fields.message = "   ".into();

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::MissingFields(vec![Field::Message]))
        );
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.finish(Ok(())), None);

        let mut form = ContactForm::new();
        match form.begin_submit() {
            Err(SubmitError::MissingFields(fields)) => assert_eq!(fields.len(), 4),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_failed_delivery_keeps_fields_and_allows_retry() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let notification = form.finish(Err("network unreachable".into())).unwrap();
        assert_eq!(notification.variant, Variant::Error);
        assert_eq!(notification.description, "network unreachable");
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(!form.is_busy());
        assert_eq!(form.fields.email, "john@example.com");

        form.begin_submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_subject_values() {
        for subject in Subject::all() {
            assert_eq!(Subject::from_value(subject.value()), Some(subject));
        }
        assert_eq!(Subject::from_value(""), None);
        assert_eq!(Subject::Support.label(), "Technical Support");
    }

    #[test]
    fn test_missing_fields_message() {
        let err = SubmitError::MissingFields(vec![Field::Name, Field::Email]);
        assert_eq!(err.to_string(), "required fields are empty: name, email");
    }

    #[test]
    fn test_notification_without_form_matches_form() {
        // leaving the page mid-submit still has to tell the user how it went
        for outcome in [Ok(()), Err(String::from("timed out"))] {
            let mut form = filled();
            form.begin_submit().unwrap();

            let detached = delivery_notification(&outcome);
            assert_eq!(form.finish(outcome), Some(detached));
        }
    }
}
