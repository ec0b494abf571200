//! Contact form state, validation, and delivery through a mail relay.

use async_trait::async_trait;
use mailrelay::{EmailJs, TemplateParams};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Shortest message the form accepts, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Errors from delivering a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Contact form is not configured: {0}")]
    NotConfigured(String),

    #[error("Message was rejected: {0}")]
    Rejected(String),

    #[error("Could not reach the mail service: {0}")]
    Unreachable(String),
}

impl From<mailrelay::Error> for RelayError {
    fn from(err: mailrelay::Error) -> Self {
        match err {
            mailrelay::Error::MissingConfig(_) | mailrelay::Error::Config(_) => {
                Self::NotConfigured(err.to_string())
            }
            mailrelay::Error::Api { status, message } => {
                Self::Rejected(format!("status {status}: {message}"))
            }
            mailrelay::Error::Network(message) => Self::Unreachable(message),
        }
    }
}

/// Anything that can deliver a contact message.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<(), RelayError>;
}

#[async_trait]
impl ContactRelay for EmailJs {
    async fn submit(&self, fields: &ContactFields) -> Result<(), RelayError> {
        self.send(&fields.template_params()).await?;
        Ok(())
    }
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// The values a visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Per-field validation, all fields checked at once.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.set(Field::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.set(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.set(Field::Email, "Invalid email address");
        }

        if self.subject.trim().is_empty() {
            errors.set(Field::Subject, "Subject is required");
        }

        if self.message.trim().is_empty() {
            errors.set(Field::Message, "Message is required");
        } else if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.set(Field::Message, "Message must be at least 10 characters");
        }

        errors
    }

    /// Template variables in the names the email template expects.
    pub fn template_params(&self) -> TemplateParams {
        TemplateParams::new()
            .with("from_name", &self.name)
            .with("from_email", &self.email)
            .with("subject", &self.subject)
            .with("message", &self.message)
    }
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    fn set(&mut self, field: Field, message: &'static str) {
        self.clear(field);
        self.errors.push((field, message));
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Delivery state of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Delivery failed; fields are kept so the visitor can retry.
    Failed(String),
}

/// Contact form with validation and submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Replace a field's value. Editing clears that field's error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.clear(field);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.fields.get_mut(field).push(c);
        self.errors.clear(field);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.fields.get_mut(field).pop();
        self.errors.clear(field);
    }

    /// Validate and move to `Sending`. Returns the fields to deliver, or
    /// `None` when validation fails or a send is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.status == SubmitStatus::Sending {
            return None;
        }

        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            info!(errors = self.errors.len(), "contact form blocked by validation");
            self.status = SubmitStatus::Idle;
            return None;
        }

        self.status = SubmitStatus::Sending;
        Some(self.fields.clone())
    }

    /// Record the relay's answer for the submission in flight.
    pub fn finish_submit(&mut self, result: Result<(), RelayError>) {
        match result {
            Ok(()) => {
                info!("contact message sent");
                self.status = SubmitStatus::Sent;
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }

    /// Validate, deliver through `relay`, and record the outcome.
    pub async fn submit_with(&mut self, relay: &dyn ContactRelay) -> &SubmitStatus {
        if let Some(fields) = self.begin_submit() {
            let result = relay.submit(&fields).await;
            self.finish_submit(result);
        }
        &self.status
    }

    /// Close the failure banner, keeping the typed values.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Clear everything for a new message.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Loved the helmet detector.".to_string(),
        }
    }

    #[test]
    fn test_valid_fields() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_required_messages() {
        let errors = ContactFields::default().validate();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Subject), Some("Subject is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut fields = filled();
        fields.name = "   ".to_string();
        assert_eq!(fields.validate().get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_email_pattern() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let mut fields = filled();
            fields.email = bad.to_string();
            assert_eq!(
                fields.validate().get(Field::Email),
                Some("Invalid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_short_message() {
        let mut fields = filled();
        fields.message = "Hi there".to_string();
        assert_eq!(
            fields.validate().get(Field::Message),
            Some("Message must be at least 10 characters")
        );

        fields.message = "0123456789".to_string();
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        assert!(form.errors().get(Field::Name).is_some());

        form.push_char(Field::Name, 'A');
        assert!(form.errors().get(Field::Name).is_none());
        assert!(form.errors().get(Field::Email).is_some());
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let mut form = ContactForm::new();
        for field in Field::ALL {
            form.set_field(field, filled().get(field));
        }

        let sent = form.begin_submit().unwrap();
        assert_eq!(sent, filled());
        assert_eq!(form.status(), &SubmitStatus::Sending);
        assert!(form.begin_submit().is_none());

        form.finish_submit(Err(RelayError::Unreachable("offline".into())));
        assert!(matches!(form.status(), SubmitStatus::Failed(_)));
        assert_eq!(form.fields(), &filled());

        form.dismiss_error();
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_template_params_names() {
        let params = filled().template_params();
        assert_eq!(params.get("from_name"), Some("Ada"));
        assert_eq!(params.get("from_email"), Some("ada@example.com"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_relay_error_mapping() {
        let err: RelayError = mailrelay::Error::Api {
            status: 400,
            message: "bad template".into(),
        }
        .into();
        assert_eq!(err, RelayError::Rejected("status 400: bad template".into()));

        let err: RelayError = mailrelay::Error::MissingConfig("EMAILJS_SERVICE_ID").into();
        assert!(matches!(err, RelayError::NotConfigured(_)));
    }

    #[test]
    fn test_field_cycle() {
        let mut field = Field::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
    }
}
