//! Compose form with a simulated submission.
//!
//! Nothing leaves the machine: a valid submission sits in `Sending` for
//! [`SEND_DURATION`] and then succeeds, or fails when the configuration asks
//! for it. Any final status clears itself after [`STATUS_RESET`].

use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Time a valid submission spends in [`SubmitStatus::Sending`].
pub const SEND_DURATION: Duration = Duration::from_millis(1500);
/// Time a final status stays visible before the form returns to idle.
pub const STATUS_RESET: Duration = Duration::from_secs(3);

/// Longest accepted value per field, in chars.
const MAX_FIELD_CHARS: usize = 2000;

/// Input fields of the compose form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl FormField {
    /// Every field in focus order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Label drawn above the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    /// Following field, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    /// Preceding field, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Why a submission was rejected or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFailure {
    /// The name is blank.
    MissingName,
    /// The email is not of the form `local@domain.tld`.
    InvalidEmail,
    /// The message is blank.
    MissingMessage,
    /// The simulated delivery failed.
    Delivery,
}

impl FormFailure {
    /// Text shown under the form.
    pub fn message(self) -> &'static str {
        match self {
            FormFailure::MissingName => "Please enter your name.",
            FormFailure::InvalidEmail => "Please enter a valid email address.",
            FormFailure::MissingMessage => "Please write a message.",
            FormFailure::Delivery => "Message could not be sent. Try again later.",
        }
    }
}

/// Progress of the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing submitted, or the last status expired.
    #[default]
    Idle,
    /// Simulated delivery in progress.
    Sending {
        /// When delivery resolves.
        done_at: Instant,
    },
    /// Delivered; the fields were cleared.
    Sent {
        /// When the form returns to idle.
        reset_at: Instant,
    },
    /// Rejected or undeliverable; the fields are kept.
    Failed {
        /// What went wrong.
        reason: FormFailure,
        /// When the form returns to idle.
        reset_at: Instant,
    },
}

/// The compose form: field values, focus and submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    open: bool,
    name: String,
    email: String,
    message: String,
    focus: Option<FormField>,
    status: SubmitStatus,
    simulate_failure: bool,
}

impl ContactForm {
    /// Closed, empty form. `simulate_failure` makes every delivery fail.
    pub fn new(simulate_failure: bool) -> Self {
        Self {
            simulate_failure,
            ..Self::default()
        }
    }

    /// Show the form with the name field focused.
    pub fn open(&mut self) {
        self.open = true;
        self.focus = Some(FormField::Name);
    }

    /// Returns `true` if the form was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Whether the form is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Focused field.
    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Focus `field`.
    pub fn set_focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    /// Move focus forward, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Name, FormField::next));
    }

    /// Move focus backward, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Message, FormField::prev));
    }

    /// Current text of `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Status of the last submission.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether a delivery is in flight.
    pub fn is_sending(&self) -> bool {
        matches!(self.status, SubmitStatus::Sending { .. })
    }

    /// Type into the focused field. Ignored while sending.
    pub fn insert_char(&mut self, c: char) {
        if self.is_sending() || c.is_control() {
            return;
        }
        let Some(field) = self.focus else {
            return;
        };
        let value = self.value_mut(field);
        if value.chars().count() < MAX_FIELD_CHARS {
            value.push(c);
        }
    }

    /// Delete the last character of the focused field. Ignored while sending.
    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        if let Some(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    /// First validation problem, if any.
    pub fn validate(&self) -> Option<FormFailure> {
        if self.name.trim().is_empty() {
            return Some(FormFailure::MissingName);
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Some(FormFailure::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Some(FormFailure::MissingMessage);
        }
        None
    }

    /// Start a submission. Returns the resulting status.
    pub fn submit(&mut self, now: Instant) -> SubmitStatus {
        if self.is_sending() {
            return self.status;
        }
        self.status = match self.validate() {
            Some(reason) => {
                debug!(?reason, "Contact form rejected");
                SubmitStatus::Failed {
                    reason,
                    reset_at: now + STATUS_RESET,
                }
            }
            None => SubmitStatus::Sending {
                done_at: now + SEND_DURATION,
            },
        };
        self.status
    }

    /// Advance the simulated submission. Returns `true` if the status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.status {
            SubmitStatus::Sending { done_at } if now >= done_at => {
                self.status = if self.simulate_failure {
                    SubmitStatus::Failed {
                        reason: FormFailure::Delivery,
                        reset_at: done_at + STATUS_RESET,
                    }
                } else {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    SubmitStatus::Sent {
                        reset_at: done_at + STATUS_RESET,
                    }
                };
                info!(sent = !self.simulate_failure, "Contact form submission finished");
                true
            }
            SubmitStatus::Sent { reset_at } | SubmitStatus::Failed { reset_at, .. }
                if now >= reset_at =>
            {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(simulate_failure: bool) -> ContactForm {
        let mut form = ContactForm::new(simulate_failure);
        form.open();
        for (field, text) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Message, "Hello there"),
        ] {
            form.set_focus(field);
            text.chars().for_each(|c| form.insert_char(c));
        }
        form
    }

    mod validation {
        use super::*;

        #[test]
        fn empty_form_reports_missing_name() {
            let form = ContactForm::new(false);
            assert_eq!(form.validate(), Some(FormFailure::MissingName));
        }

        #[test]
        fn email_needs_user_and_dotted_domain() {
            let mut form = filled(false);
            form.set_focus(FormField::Email);
            for _ in 0.."ada@example.com".len() {
                form.backspace();
            }
            "ada@localhost".chars().for_each(|c| form.insert_char(c));
            assert_eq!(form.validate(), Some(FormFailure::InvalidEmail));
        }

        #[test]
        fn complete_form_is_valid() {
            assert_eq!(filled(false).validate(), None);
        }

        #[test]
        fn invalid_submission_fails_immediately() {
            let now = Instant::now();
            let mut form = ContactForm::new(false);
            let status = form.submit(now);
            assert_eq!(
                status,
                SubmitStatus::Failed {
                    reason: FormFailure::MissingName,
                    reset_at: now + STATUS_RESET
                }
            );
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn sends_then_clears_fields_then_resets() {
            let now = Instant::now();
            let mut form = filled(false);
            assert!(matches!(form.submit(now), SubmitStatus::Sending { .. }));

            assert!(!form.tick(now + Duration::from_millis(1499)));
            assert!(form.tick(now + SEND_DURATION));
            assert!(matches!(form.status(), SubmitStatus::Sent { .. }));
            assert_eq!(form.value(FormField::Name), "");

            assert!(form.tick(now + SEND_DURATION + STATUS_RESET));
            assert_eq!(form.status(), SubmitStatus::Idle);
        }

        #[test]
        fn simulated_failure_keeps_fields() {
            let now = Instant::now();
            let mut form = filled(true);
            form.submit(now);
            form.tick(now + SEND_DURATION);
            assert!(matches!(
                form.status(),
                SubmitStatus::Failed {
                    reason: FormFailure::Delivery,
                    ..
                }
            ));
            assert_eq!(form.value(FormField::Name), "Ada");
        }

        #[test]
        fn typing_is_ignored_while_sending() {
            let now = Instant::now();
            let mut form = filled(false);
            form.submit(now);
            form.insert_char('!');
            form.backspace();
            assert_eq!(form.value(FormField::Message), "Hello there");
        }
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = ContactForm::new(false);
        form.focus_next();
        assert_eq!(form.focus(), Some(FormField::Name));
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Some(FormField::Message));
        form.focus_next();
        assert_eq!(form.focus(), Some(FormField::Name));
        form.focus_prev();
        assert_eq!(form.focus(), Some(FormField::Message));
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut form = ContactForm::new(false);
        form.open();
        form.insert_char('\t');
        assert_eq!(form.value(FormField::Name), "");
    }
}
