//! Testing utilities.
//!
//! This module provides tools for integration testing:
//! - `MockRelay` for deterministic contact form tests without network calls
//! - `script_of` for building dialogue scripts from plain strings

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::contact::{ContactFields, ContactRelay, RelayError};
use crate::typewriter::{Line, Script};

/// A relay that returns scripted results and records what it was sent.
#[derive(Debug, Default)]
pub struct MockRelay {
    /// Results to return in order. When empty, submissions succeed.
    responses: Mutex<VecDeque<Result<(), RelayError>>>,
    /// Every message delivered to the relay.
    sent: Mutex<Vec<ContactFields>>,
}

impl MockRelay {
    /// A relay that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay that replays `responses` before falling back to success.
    pub fn with_responses(responses: Vec<Result<(), RelayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A relay whose next submission fails as unreachable.
    pub fn failing_once(message: impl Into<String>) -> Self {
        Self::with_responses(vec![Err(RelayError::Unreachable(message.into()))])
    }

    /// Messages delivered so far, oldest first.
    pub fn sent(&self) -> Vec<ContactFields> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or_default()
    }
}

#[async_trait]
impl ContactRelay for MockRelay {
    async fn submit(&self, fields: &ContactFields) -> Result<(), RelayError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(fields.clone());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or(Ok(()))
    }
}

/// Build a one-speaker script from plain lines.
///
/// Panics if `texts` is empty.
pub fn script_of(texts: &[&str]) -> Script {
    Script::new(texts.iter().map(|text| Line::new("TEST", *text)).collect())
        .expect("script_of needs at least one line")
}
