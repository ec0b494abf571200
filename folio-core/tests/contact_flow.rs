//! Contact form tests using the mock relay, plus an opt-in live EmailJS check.
//!
//! The live test needs `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
//! `EMAILJS_PUBLIC_KEY` (via .env file or environment).
//! Run with: `cargo test -p folio-core --test contact_flow -- --ignored`

use folio_core::testing::MockRelay;
use folio_core::{ContactForm, ContactRelay, Field, RelayError, SubmitStatus};
use mailrelay::EmailJs;

fn fill(form: &mut ContactForm) {
    form.set_field(Field::Name, "Ada Lovelace");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Subject, "Collaboration");
    form.set_field(Field::Message, "I'd love to talk about your helmet detector.");
}

#[tokio::test]
async fn test_successful_submission() {
    let relay = MockRelay::new();
    let mut form = ContactForm::new();
    fill(&mut form);

    let status = form.submit_with(&relay).await.clone();
    assert_eq!(status, SubmitStatus::Sent);
    assert_eq!(relay.sent_count(), 1);
    assert_eq!(relay.sent()[0].subject, "Collaboration");
}

#[tokio::test]
async fn test_invalid_form_never_reaches_relay() {
    let relay = MockRelay::new();
    let mut form = ContactForm::new();
    form.set_field(Field::Email, "not-an-email");
    form.set_field(Field::Message, "short");

    let status = form.submit_with(&relay).await.clone();
    assert_eq!(status, SubmitStatus::Idle);
    assert_eq!(relay.sent_count(), 0);
    assert_eq!(form.errors().get(Field::Email), Some("Invalid email address"));
    assert_eq!(
        form.errors().get(Field::Message),
        Some("Message must be at least 10 characters")
    );
}

#[tokio::test]
async fn test_failure_then_retry() {
    let relay = MockRelay::failing_once("connection reset");
    let mut form = ContactForm::new();
    fill(&mut form);

    let status = form.submit_with(&relay).await.clone();
    assert_eq!(
        status,
        SubmitStatus::Failed(RelayError::Unreachable("connection reset".into()).to_string())
    );
    assert_eq!(form.fields().name, "Ada Lovelace");

    form.dismiss_error();
    let status = form.submit_with(&relay).await.clone();
    assert_eq!(status, SubmitStatus::Sent);
    assert_eq!(relay.sent_count(), 2);

    form.reset();
    assert_eq!(form.fields().name, "");
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[tokio::test]
#[ignore] // Sends a real email.
async fn test_live_emailjs_delivery() {
    let _ = dotenvy::dotenv();
    let relay = match EmailJs::from_env() {
        Ok(relay) => relay,
        Err(e) => {
            eprintln!("Skipping test: {e}");
            return;
        }
    };

    let mut form = ContactForm::new();
    fill(&mut form);
    let fields = form.begin_submit().expect("filled form validates");
    relay.submit(&fields).await.expect("EmailJS accepted the message");
}
