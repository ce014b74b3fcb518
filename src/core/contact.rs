//! Contact form model
//!
//! Field validation, phone number formatting, the submission payload and the
//! [`ContactSink`] capability that delivers it.
//!
//! The remote sink is write-only: it never returns a structured response.
//! An [`Ack`] therefore only means that no transport error occurred, not that
//! the message was stored or read. Anything stronger (retries, delivery
//! receipts) needs a different endpoint contract.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

/// Longest accepted message body, in characters
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Longest accepted name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent. We'll be in touch soon.";

/// Form fields exactly as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Form field identifiers, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email address",
            Field::Phone => "phone number",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

/// First problem found in a form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your {0}")]
    Missing(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Your {field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) | ValidationError::TooLong { field, .. } => *field,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::InvalidPhone => Field::Phone,
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Check every field in order, reporting the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            let value = self.value(field).trim();
            if value.is_empty() {
                if field.is_required() {
                    return Err(ValidationError::Missing(field));
                }
                continue;
            }
            match field {
                Field::Name if value.chars().count() > MAX_NAME_LENGTH => {
                    return Err(ValidationError::TooLong {
                        field,
                        max: MAX_NAME_LENGTH,
                    });
                }
                Field::Email if !is_valid_email(value) => {
                    return Err(ValidationError::InvalidEmail);
                }
                Field::Phone if !is_valid_phone(value) => {
                    return Err(ValidationError::InvalidPhone);
                }
                Field::Message if value.chars().count() > MAX_MESSAGE_LENGTH => {
                    return Err(ValidationError::TooLong {
                        field,
                        max: MAX_MESSAGE_LENGTH,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Loose structural email check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1 && !domain.starts_with('.'),
        None => false,
    }
}

/// North American number: ten digits, or eleven with a leading country code 1.
/// Only digits, spaces and `()+-.` are allowed in the raw text.
pub fn is_valid_phone(phone: &str) -> bool {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '+' | '.'))
    {
        return false;
    }
    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => digits[0] != '1',
        11 => digits[0] == '1',
        _ => false,
    }
}

/// Reformat phone input as the visitor types.
///
/// Non-digits are dropped and the digits regrouped as `(555) 123-4567`.
/// A leading `1` is treated as the country code and rendered as `+1`.
/// Extra digits beyond a full number are discarded.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let (prefix, local) = match digits.strip_prefix('1') {
        Some(rest) => (Some("+1"), rest),
        None => (None, digits.as_str()),
    };
    let local = &local[..local.len().min(10)];

    let grouped = match local.len() {
        0 => String::new(),
        1..=3 => format!("({}", local),
        4..=6 => format!("({}) {}", &local[..3], &local[3..]),
        _ => format!("({}) {}-{}", &local[..3], &local[3..6], &local[6..]),
    };

    match prefix {
        Some(code) if grouped.is_empty() => code.to_string(),
        Some(code) => format!("{} {}", code, grouped),
        None => grouped,
    }
}

/// Payload delivered to the remote sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 UTC time the relay accepted the form
    pub timestamp: String,
}

impl ContactSubmission {
    pub fn new(form: &ContactForm, timestamp: impl Into<String>) -> Self {
        Self {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// Synthetic acknowledgement: the request left without a transport error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// Why a submission could not be handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Contact endpoint is not configured")]
    NotConfigured,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// Text shown in the form's message area
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::NotConfigured => "The contact form is not configured yet. \
                 Please reach us by phone or email in the meantime."
                .to_string(),
            SubmitError::Transport(_) => {
                "Sorry, your message could not be sent. Please try again.".to_string()
            }
            SubmitError::Rejected(reason) => reason.clone(),
        }
    }
}

/// Write-only destination for contact submissions
pub trait ContactSink {
    fn submit(&self, form: &ContactForm) -> impl Future<Output = Result<Ack, SubmitError>>;
}

/// Outcome shown in the form's message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormMessage::Error(_))
    }
}

/// Contact modal state: field values, in-flight flag and message area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    submitting: bool,
    message: Option<FormMessage>,
    /// Failure from the last submit attempt, shown beside its field
    invalid: Option<ValidationError>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Inline error for `field`, if the last attempt failed on it
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.invalid
            .as_ref()
            .filter(|error| error.field() == field)
            .map(ToString::to_string)
    }

    /// Store phone input in its formatted shape
    pub fn set_phone(&mut self, raw: &str) {
        self.form.phone = format_phone(raw);
    }

    /// Validate and enter the submitting state.
    ///
    /// On success returns the form to hand to the sink. On failure the
    /// validation message is shown and the submit control stays enabled.
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Result<ContactForm, ValidationError>> {
        if self.submitting {
            return None;
        }
        if let Err(error) = self.form.validate() {
            self.message = Some(FormMessage::Error(error.to_string()));
            self.invalid = Some(error.clone());
            return Some(Err(error));
        }
        self.submitting = true;
        self.message = None;
        self.invalid = None;
        Some(Ok(self.form.clone()))
    }

    /// Record the sink's verdict. Always re-enables the submit control.
    /// Success clears the form; failure keeps every field as entered.
    pub fn finish_submit(&mut self, result: Result<Ack, SubmitError>) {
        self.submitting = false;
        match result {
            Ok(Ack) => {
                self.form.clear();
                self.message = Some(FormMessage::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(error) => {
                self.message = Some(FormMessage::Error(error.user_message()));
            }
        }
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.invalid = None;
    }
}
